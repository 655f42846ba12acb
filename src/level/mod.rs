//! Severity levels and the gate that decides which records get written.

use std::fmt;
use std::str::FromStr;

/// Ordered so the handler can compare a record's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Diagnostics that are too noisy outside of development.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures that prevent an operation from completing.
    Error = 3,
}

impl Level {
    /// Canonical name written into rendered lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// All levels, lowest first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }
}

/// Level gate: true iff `level` is at or above `min_level`.
#[must_use]
pub const fn admit(level: Level, min_level: Level) -> bool {
    level as u8 >= min_level as u8
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admit_matches_ordering_for_every_pair() {
        for level in Level::all() {
            for min in Level::all() {
                assert_eq!(admit(level, min), level >= min, "{level} vs {min}");
            }
        }
    }

    #[test]
    fn admit_at_info() {
        assert!(!admit(Level::Debug, Level::Info));
        assert!(admit(Level::Info, Level::Info));
        assert!(admit(Level::Warn, Level::Info));
        assert!(admit(Level::Error, Level::Info));
    }

    #[test]
    fn gate_is_monotonic() {
        let levels = Level::all();
        for min in levels {
            for (i, level) in levels.iter().enumerate() {
                if !admit(*level, min) {
                    assert!(levels[..i].iter().all(|lower| !admit(*lower, min)));
                }
            }
        }
    }
}
