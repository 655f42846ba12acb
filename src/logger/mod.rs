//! What applications call. A `Logger` turns `info("msg", attrs)` into a [`Record`]
//! stamped with the current time and hands it to its handler.

#[cfg(feature = "log")]
mod bridge;

#[cfg(feature = "log")]
pub use bridge::LogBridge;

use crate::Error;
use crate::handler::Handler;
use crate::internal;
use crate::level::Level;
use crate::record::{Attr, Record};
use std::path::PathBuf;
use std::sync::Arc;

/// Cheap to clone; all clones share one handler.
#[derive(Debug, Clone)]
pub struct Logger {
    handler: Arc<Handler>,
}

impl Logger {
    #[must_use]
    pub fn new(handler: Handler) -> Self {
        Self::from_shared(Arc::new(handler))
    }

    /// Logger over a handler the caller keeps a reference to, e.g. to close it later.
    #[must_use]
    pub const fn from_shared(handler: Arc<Handler>) -> Self {
        Self { handler }
    }

    #[must_use]
    pub const fn handler(&self) -> &Arc<Handler> {
        &self.handler
    }

    /// Lets callers skip building expensive attributes for records that would be dropped.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Builds and writes a record, reporting the handler's result.
    ///
    /// # Errors
    /// Sink failures and writes after the handler was closed.
    pub fn log(
        &self,
        level: Level,
        msg: &str,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), Error> {
        if !self.enabled(level) {
            return Ok(());
        }
        let attrs = attrs.into_iter().collect();
        self.handler.handle(&Record::new(level, msg, attrs))
    }

    /// Fire-and-forget variant used by the level methods: a failure is reported once
    /// to the internal diagnostics and otherwise ignored.
    fn emit(&self, level: Level, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        if let Err(e) = self.log(level, msg, attrs) {
            internal::error("LOGGER", &format!("Dropped {level} record: {e}"));
        }
    }

    /// Level methods never return an error; use [`Logger::log`] to observe failures.
    pub fn debug(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.emit(Level::Debug, msg, attrs);
    }

    pub fn info(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.emit(Level::Info, msg, attrs);
    }

    pub fn warn(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.emit(Level::Warn, msg, attrs);
    }

    pub fn error(&self, msg: &str, attrs: impl IntoIterator<Item = Attr>) {
        self.emit(Level::Error, msg, attrs);
    }
}

impl From<Handler> for Logger {
    fn from(handler: Handler) -> Self {
        Self::new(handler)
    }
}

/// Logger over a rotating file at `filename` with all defaults.
#[must_use]
pub fn new_logger(filename: impl Into<PathBuf>) -> Logger {
    Logger::new(Handler::new(filename))
}
