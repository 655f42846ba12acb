//! Unified error type for all rotalog operations.

use std::fmt;

/// Error type for rotalog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the log file, a backup, or the config file.
    Io(std::io::Error),
    /// The handler was closed; the record was not written.
    Closed,
    /// The rotating writer for the log file could not be built.
    Rotation(String),
    /// A single write is larger than the rotation size limit and can never fit in one file.
    WriteTooLarge {
        /// Length of the rejected write in bytes.
        len: usize,
        /// Configured size limit in bytes.
        max: u64,
    },
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid log level string in config.
    InvalidLevel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Closed => write!(f, "handler is closed"),
            Self::Rotation(msg) => write!(f, "rotation error: {msg}"),
            Self::WriteTooLarge { len, max } => {
                write!(f, "write length {len} exceeds maximum file size {max}")
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
