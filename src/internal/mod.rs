//! rotalog's own diagnostics: rotations, pruning, and errors the facade swallows.
//!
//! Silent until [`init`] installs a threshold. Diagnostics go through a [`Handler`]
//! with a stderr sink, so they share the line renderer with everything else.
//! `OnceLock` keeps the first threshold; later calls from other entry points are no-ops.

use crate::config::Config;
use crate::fmt::Format;
use crate::handler::{Handler, HandlerOptions};
use crate::level::Level;
use crate::record::Record;
use crate::rotate::Sink;
use std::io::{self, Write};
use std::sync::OnceLock;

static INTERNAL_HANDLER: OnceLock<Handler> = OnceLock::new();

const LINE: &str = "rotalog: ${Level} ${Message}";

struct Stderr;

impl Sink for Stderr {
    fn write(&mut self, buf: &[u8]) -> Result<usize, crate::Error> {
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn close(&mut self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}

fn build_internal_handler(level: Level) -> Handler {
    Handler::with_sink(Stderr)
        .with_format(Format::new().line(LINE))
        .with_options(
            HandlerOptions::new()
                .min_level(level)
                .mirror_to_console(false),
        )
}

/// Enables diagnostics at `level` and above on stderr.
pub fn init(level: Level) {
    let was_init = INTERNAL_HANDLER.get().is_some();
    INTERNAL_HANDLER.get_or_init(|| build_internal_handler(level));
    if !was_init {
        debug("INTERNAL", &format!("Internal diagnostics enabled at {level}"));
    }
}

/// Enables diagnostics when the config sets `general.internal_level`.
pub fn init_with_config(config: &Config) {
    if let Some(level) = config.parse_internal_level() {
        init(level);
    }
}

/// Threshold currently in effect, `None` while disabled.
#[must_use]
pub fn level() -> Option<Level> {
    INTERNAL_HANDLER.get().map(|h| h.options().min_level)
}

fn log(level: Level, scope: &str, msg: &str) {
    let Some(handler) = INTERNAL_HANDLER.get() else {
        return;
    };
    if handler.enabled(level) {
        // Nowhere left to report a failing stderr.
        let _ = handler.handle(&Record::new(level, format!("{scope}: {msg}"), Vec::new()));
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
