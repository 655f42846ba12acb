//! The handler ties the pipeline together: level gate, renderer, then the sink and the
//! optional console mirror. It owns its format and options; nothing is process-global.

mod options;

pub use options::HandlerOptions;

use crate::Error;
use crate::config::Config;
use crate::fmt::{Format, render};
use crate::internal;
use crate::level::{Level, admit};
use crate::record::Record;
use crate::rotate::{RotatingFile, RotationOptions, Sink};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything a write touches, behind one lock so lines from concurrent callers never interleave.
struct State {
    sink: Box<dyn Sink>,
    console: Box<dyn Write + Send>,
    closed: bool,
}

/// Gates, renders and writes records.
///
/// `Send + Sync`: share it behind an `Arc` (a [`Logger`](crate::Logger) does this) and
/// call [`Handler::handle`] from any thread. Adjust format and options through the
/// `_mut` accessors before sharing.
pub struct Handler {
    format: Format,
    options: HandlerOptions,
    state: Mutex<State>,
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("format", &self.format)
            .field("options", &self.options)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Handler {
    /// Handler writing to a rotating file at `filename` with default rotation,
    /// format and options. The file is created on the first admitted record.
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self::with_rotation(RotationOptions::new(filename))
    }

    #[must_use]
    pub fn with_rotation(rotation: RotationOptions) -> Self {
        Self::with_sink(RotatingFile::new(rotation))
    }

    /// Handler over any sink, with default format and options.
    #[must_use]
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            format: Format::default(),
            options: HandlerOptions::default(),
            state: Mutex::new(State {
                sink: Box::new(sink),
                console: Box::new(io::stdout()),
                closed: false,
            }),
        }
    }

    /// Builds format, options and rotation from a loaded config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_rotation(config.rotation_options())
            .with_format(config.format())
            .with_options(config.handler_options())
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: HandlerOptions) -> Self {
        self.options = options;
        self
    }

    /// Redirects the console mirror, stdout by default.
    #[must_use]
    pub fn console(self, writer: impl Write + Send + 'static) -> Self {
        self.lock().console = Box::new(writer);
        self
    }

    #[must_use]
    pub const fn format(&self) -> &Format {
        &self.format
    }

    pub const fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    #[must_use]
    pub const fn options(&self) -> &HandlerOptions {
        &self.options
    }

    pub const fn options_mut(&mut self) -> &mut HandlerOptions {
        &mut self.options
    }

    /// Whether a record at `level` would be written.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        admit(level, self.options.min_level)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Writes one record. Records below the minimum level are dropped and reported as success.
    ///
    /// The console mirror is best effort: its failures are reported to the internal
    /// diagnostics and never change the result.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`Handler::close`], otherwise whatever the sink's write returns.
    pub fn handle(&self, record: &Record) -> Result<(), Error> {
        if !self.enabled(record.level()) {
            return Ok(());
        }

        let line = render(record, &self.format);

        let mut guard = self.lock();
        let state = &mut *guard;
        if state.closed {
            return Err(Error::Closed);
        }

        let written = state.sink.write(line.as_bytes()).map(|_| ());

        if self.options.mirror_to_console
            && let Err(e) = state
                .console
                .write_all(line.as_bytes())
                .and_then(|()| state.console.flush())
        {
            internal::warn("HANDLER", &format!("Console mirror failed: {e}"));
        }

        written
    }

    /// Closes the sink. Every later [`Handler::handle`] fails with [`Error::Closed`].
    /// Closing twice is a no-op.
    ///
    /// # Errors
    /// Whatever the sink's close returns. The handler counts as closed either way.
    pub fn close(&self) -> Result<(), Error> {
        let mut state = self.lock();
        if state.closed {
            return Ok(());
        }
        state.closed = true;
        let _ = state.console.flush();
        state.sink.close()
    }

    /// A writer that panicked mid-line must not disable logging for everyone else.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
