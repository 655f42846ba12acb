use crate::level::Level;

/// Which records a handler writes, and where besides its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerOptions {
    /// Records below this level are dropped before rendering.
    pub min_level: Level,
    /// Also write every admitted line to the console stream (stdout unless redirected).
    pub mirror_to_console: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            mirror_to_console: true,
        }
    }
}

impl HandlerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub const fn mirror_to_console(mut self, enabled: bool) -> Self {
        self.mirror_to_console = enabled;
        self
    }
}
