//! TOML configuration for a handler: gating, line format, and rotation.
//!
//! Every section and field has a default, so an empty file (or no file at all) yields
//! the same handler as [`Handler::new`](crate::Handler::new) on the default path.

mod size;
mod structs;

pub use size::parse_size;
pub use structs::{FormatConfig, GeneralConfig, RotationConfig};

use crate::fmt::{Format, LineTemplate};
use crate::handler::HandlerOptions;
use crate::internal;
use crate::level::Level;
use crate::rotate::{RotationOptions, default_filename};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub format: FormatConfig,
    pub rotation: RotationConfig,
}

impl Config {
    /// Loads `<config dir>/rotalog/rotalog.toml`. A missing file yields defaults.
    ///
    /// # Errors
    /// No platform config directory, unreadable file, TOML syntax errors, or
    /// unknown level names.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Unreadable file, TOML syntax errors, or unknown level names.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// `<config dir>/rotalog/rotalog.toml`.
    ///
    /// # Errors
    /// When the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("rotalog").join("rotalog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown names were rejected at load time; a hand-built config falls back to Info.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Info)
    }

    /// `None` when internal diagnostics are off.
    #[must_use]
    pub fn parse_internal_level(&self) -> Option<Level> {
        self.general
            .internal_level
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| s.parse().ok())
    }

    #[must_use]
    pub fn handler_options(&self) -> HandlerOptions {
        HandlerOptions::new()
            .min_level(self.parse_level())
            .mirror_to_console(self.general.console)
    }

    /// Unknown `${...}` tokens in the line template are kept verbatim.
    #[must_use]
    pub fn format(&self) -> Format {
        let f = &self.format;
        let line = LineTemplate::parse(&f.line);
        for token in line.unknown_tokens() {
            internal::warn(
                "CONFIG",
                &format!("Unknown token ${{{token}}} in line template is written verbatim"),
            );
        }
        Format {
            line,
            datetime: f.datetime.clone(),
            attr_between: f.attr_between.clone(),
            attr_delimiter: f.attr_delimiter.clone(),
            attr_prefix: f.attr_prefix.clone(),
            attr_suffix: f.attr_suffix.clone(),
        }
    }

    #[must_use]
    pub fn rotation_options(&self) -> RotationOptions {
        let r = &self.rotation;
        let filename = r.filename.as_deref().map_or_else(default_filename, |name| {
            PathBuf::from(shellexpand::tilde(name).as_ref())
        });

        let mut options = RotationOptions::new(filename)
            .max_size_mb(r.max_size_mb)
            .max_backups(r.max_backups)
            .max_age_days(r.max_age_days)
            .local_time(r.local_time)
            .compress(r.compress);

        if let Some(size) = r.max_size.as_deref() {
            match parse_size(size) {
                Some(bytes) => options = options.max_size_bytes(bytes),
                None => internal::warn(
                    "CONFIG",
                    &format!("Ignoring unparseable max_size '{size}'"),
                ),
            }
        }
        options
    }

    fn validate(&self) -> Result<(), crate::Error> {
        let mut levels = vec![&self.general.level];
        levels.extend(
            self.general
                .internal_level
                .iter()
                .filter(|s| !s.trim().is_empty()),
        );
        for level in levels {
            level
                .parse::<Level>()
                .map_err(|_| crate::Error::InvalidLevel(level.clone()))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
