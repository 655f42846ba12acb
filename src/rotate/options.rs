//! Rotation policy, separate from the file handling so callers and config can build it
//! without touching the filesystem.

use std::path::PathBuf;

const MEGABYTE: u64 = 1024 * 1024;
const DEFAULT_MAX_SIZE_MB: u64 = 1;

/// When to start a new file and which backups to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationOptions {
    /// Active log file. Backups are created next to it.
    pub filename: PathBuf,
    /// Rotate once the file would grow past this many megabytes. 0 means the 1 MB default.
    pub max_size_mb: u64,
    /// Byte-exact limit; takes precedence over `max_size_mb` when set and non-zero.
    pub max_size_bytes: Option<u64>,
    /// Backups to keep, newest first. 0 keeps all of them.
    pub max_backups: usize,
    /// Days to keep backups, judged by their modification time. 0 keeps them forever.
    pub max_age_days: u32,
    /// Local time for rotation timestamps instead of UTC.
    pub local_time: bool,
    /// Gzip backups after rotation.
    pub compress: bool,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self::new(default_filename())
    }
}

impl RotationOptions {
    /// Defaults for the given file: 1 MB, 10 backups, no age limit, local time, no compression.
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            max_size_bytes: None,
            max_backups: 10,
            max_age_days: 0,
            local_time: true,
            compress: false,
        }
    }

    #[must_use]
    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = filename.into();
        self
    }

    #[must_use]
    pub const fn max_size_mb(mut self, megabytes: u64) -> Self {
        self.max_size_mb = megabytes;
        self
    }

    /// Config files and tests sometimes need limits below a megabyte.
    #[must_use]
    pub const fn max_size_bytes(mut self, bytes: u64) -> Self {
        self.max_size_bytes = Some(bytes);
        self
    }

    #[must_use]
    pub const fn max_backups(mut self, count: usize) -> Self {
        self.max_backups = count;
        self
    }

    #[must_use]
    pub const fn max_age_days(mut self, days: u32) -> Self {
        self.max_age_days = days;
        self
    }

    #[must_use]
    pub const fn local_time(mut self, local: bool) -> Self {
        self.local_time = local;
        self
    }

    #[must_use]
    pub const fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Effective size limit in bytes. A zero limit would reject every write, so it
    /// falls back to the default.
    #[must_use]
    pub fn max_size(&self) -> u64 {
        match self.max_size_bytes {
            Some(bytes) if bytes > 0 => bytes,
            _ if self.max_size_mb == 0 => DEFAULT_MAX_SIZE_MB * MEGABYTE,
            _ => self.max_size_mb.saturating_mul(MEGABYTE),
        }
    }
}

/// `<state dir>/rotalog/rotalog.log`, or `rotalog.log` in the working directory
/// when the platform has no state or data directory.
#[must_use]
pub fn default_filename() -> PathBuf {
    directories::ProjectDirs::from("", "", "rotalog").map_or_else(
        || PathBuf::from("rotalog.log"),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("rotalog.log")
        },
    )
}
