//! Configuration struct definitions.

use crate::fmt::Format;
use serde::Deserialize;

/// `[general]`: gating and console mirroring.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Mirror admitted lines to stdout.
    pub console: bool,
    /// Threshold for rotalog's own diagnostics on stderr; unset keeps them off.
    pub internal_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
            internal_level: None,
        }
    }
}

/// `[format]`: line layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Line template with `${Datetime}`, `${Level}`, `${Attrs}` and `${Message}`.
    pub line: String,
    /// strftime pattern for `${Datetime}`.
    pub datetime: String,
    pub attr_between: String,
    pub attr_delimiter: String,
    pub attr_prefix: String,
    pub attr_suffix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let format = Format::default();
        Self {
            line: format.line.as_str().to_string(),
            datetime: format.datetime,
            attr_between: format.attr_between,
            attr_delimiter: format.attr_delimiter,
            attr_prefix: format.attr_prefix,
            attr_suffix: format.attr_suffix,
        }
    }
}

/// `[rotation]`: log file and backup retention.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Log file path, `~` expanded. Unset uses the platform state directory.
    pub filename: Option<String>,
    /// Size limit in megabytes; 0 means the 1 MB default.
    pub max_size_mb: u64,
    /// Size limit with a unit ("500K", "2M"); overrides `max_size_mb`.
    pub max_size: Option<String>,
    /// Backups to keep; 0 keeps all.
    pub max_backups: usize,
    /// Days to keep backups; 0 keeps them forever.
    pub max_age_days: u32,
    /// Local time for rotation instead of UTC.
    pub local_time: bool,
    /// Gzip backups.
    pub compress: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            filename: None,
            max_size_mb: 1,
            max_size: None,
            max_backups: 10,
            max_age_days: 0,
            local_time: true,
            compress: false,
        }
    }
}
