//! Size-based file rotation. The handler only sees the [`Sink`] trait; the rolling
//! itself, backup count and compression are done by `logroller`, and backup age is
//! enforced on top of it.

mod options;
mod retention;

pub use options::{RotationOptions, default_filename};
pub use retention::{Backup, list_backups};

use crate::internal;
use logroller::{Compression, LogRoller, LogRollerBuilder, Rotation, RotationSize, TimeZone};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Byte destination for rendered lines.
///
/// `Send` so a handler holding a boxed sink can be shared across threads.
pub trait Sink: Send {
    /// Writes one rendered line. Returns the number of bytes written.
    ///
    /// # Errors
    /// I/O failures, or a write the sink can never accept.
    fn write(&mut self, buf: &[u8]) -> Result<usize, crate::Error>;

    /// Releases the underlying resource.
    ///
    /// # Errors
    /// I/O failures while closing.
    fn close(&mut self) -> Result<(), crate::Error>;
}

/// Log file that rolls over to a new file once it reaches the size limit.
///
/// The roller is built on first write, so an unused handler never touches the
/// filesystem. Backups older than `max_age_days` are removed before the first write
/// and roughly once per rotated file afterwards.
pub struct RotatingFile {
    options: RotationOptions,
    roller: Option<LogRoller>,
    since_prune: u64,
}

impl fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingFile")
            .field("options", &self.options)
            .field("open", &self.roller.is_some())
            .finish_non_exhaustive()
    }
}

impl RotatingFile {
    #[must_use]
    pub const fn new(options: RotationOptions) -> Self {
        Self {
            options,
            roller: None,
            since_prune: 0,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &RotationOptions {
        &self.options
    }

    /// Active file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.options.filename
    }

    /// Existing backups of the active file, newest first.
    ///
    /// # Errors
    /// Directory read failures.
    pub fn backups(&self) -> Result<Vec<Backup>, crate::Error> {
        list_backups(&self.options.filename)
    }

    fn prune(&self) {
        if let Err(e) = retention::prune_expired(&self.options) {
            internal::warn("ROTATE", &format!("Backup pruning failed: {e}"));
        }
    }
}

/// Maps the rotation policy onto a roller writing to `options.filename`.
fn build_roller(options: &RotationOptions) -> Result<LogRoller, crate::Error> {
    let path = &options.filename;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Some(name) = path.file_name() else {
        return Err(crate::Error::Rotation(format!(
            "{} does not name a file",
            path.display()
        )));
    };

    if !dir.exists() {
        fs::create_dir_all(dir)?;
        internal::debug("ROTATE", &format!("Created directory: {}", dir.display()));
    }

    let dir = dir.to_string_lossy();
    let name = name.to_string_lossy();
    let time_zone = if options.local_time {
        TimeZone::Local
    } else {
        TimeZone::UTC
    };

    let mut builder = LogRollerBuilder::new(&*dir, &*name)
        .rotation(Rotation::SizeBased(RotationSize::Bytes(options.max_size())))
        .time_zone(time_zone);
    if options.max_backups > 0 {
        builder = builder.max_keep_files(options.max_backups as _);
    }
    if options.compress {
        builder = builder.compression(Compression::Gzip);
    }

    let roller = builder
        .build()
        .map_err(|e| crate::Error::Rotation(e.to_string()))?;
    internal::debug("ROTATE", &format!("Opened {}", path.display()));
    Ok(roller)
}

impl Sink for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> Result<usize, crate::Error> {
        let len = buf.len() as u64;
        let max = self.options.max_size();
        if len > max {
            return Err(crate::Error::WriteTooLarge {
                len: buf.len(),
                max,
            });
        }

        if self.roller.is_none() {
            self.prune();
            self.roller = Some(build_roller(&self.options)?);
        }
        let Some(roller) = self.roller.as_mut() else {
            return Err(crate::Error::Closed);
        };
        roller.write_all(buf)?;
        // Lines must be on disk once `handle` returns.
        roller.flush()?;

        self.since_prune += len;
        if self.since_prune >= max {
            self.since_prune = 0;
            self.prune();
        }
        Ok(buf.len())
    }

    fn close(&mut self) -> Result<(), crate::Error> {
        if let Some(mut roller) = self.roller.take() {
            roller.flush()?;
        }
        Ok(())
    }
}
