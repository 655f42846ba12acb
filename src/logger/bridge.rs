//! Routes records from the `log` facade into a [`Logger`], so `log::info!(user = "ann"; "login")`
//! lands in the same rotated file as direct `Logger` calls.

use super::Logger;
use crate::internal;
use crate::level::Level;
use crate::record::{Attr, Record, Value};
use log::kv::{self, Key, VisitSource};

/// `log::Log` implementation over a [`Logger`].
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Logger,
}

impl LogBridge {
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Installs the bridge as the process-wide `log` logger, with the `log` max level
    /// matching the handler's minimum level.
    ///
    /// # Errors
    /// When another `log` logger is already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = level_filter(self.logger.handler().options().min_level);
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

/// `log` has one more level than rotalog; trace folds into debug.
const fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

const fn level_filter(min_level: Level) -> log::LevelFilter {
    match min_level {
        Level::Debug => log::LevelFilter::Trace,
        Level::Info => log::LevelFilter::Info,
        Level::Warn => log::LevelFilter::Warn,
        Level::Error => log::LevelFilter::Error,
    }
}

fn convert(value: &kv::Value<'_>) -> Value {
    if let Some(b) = value.to_bool() {
        Value::Bool(b)
    } else if let Some(n) = value.to_u64() {
        Value::Uint(n)
    } else if let Some(n) = value.to_i64() {
        Value::Int(n)
    } else if let Some(n) = value.to_f64() {
        Value::Float(n)
    } else if let Some(s) = value.to_borrowed_str() {
        Value::Str(s.to_string())
    } else {
        Value::Str(value.to_string())
    }
}

struct CollectAttrs(Vec<Attr>);

impl<'kvs> VisitSource<'kvs> for CollectAttrs {
    fn visit_pair(&mut self, key: Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        self.0.push(Attr {
            key: key.as_str().to_string(),
            value: convert(&value),
        });
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.logger.enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        let level = map_level(record.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut attrs = CollectAttrs(Vec::new());
        if let Err(e) = record.key_values().visit(&mut attrs) {
            internal::warn("BRIDGE", &format!("Skipped remaining attributes: {e}"));
        }

        let message = record
            .args()
            .as_str()
            .map_or_else(|| record.args().to_string(), ToString::to_string);

        if let Err(e) = self
            .logger
            .handler()
            .handle(&Record::new(level, message, attrs.0))
        {
            internal::error("BRIDGE", &format!("Dropped {level} record: {e}"));
        }
    }

    fn flush(&self) {}
}
