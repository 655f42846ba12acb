//! Age-based cleanup of rotated files. The roller caps how many backups it keeps;
//! how long they may stay is enforced here, by modification time.

use super::options::RotationOptions;
use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const GZ_EXT: &str = ".gz";
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// A rotated-out log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    /// Location next to the active file.
    pub path: PathBuf,
    /// Last write to the file, which for a backup is its rotation time.
    pub modified: SystemTime,
    /// Gzipped by the roller.
    pub compressed: bool,
}

fn log_dir(filename: &Path) -> &Path {
    filename
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// `app.log` → backups start with `app.` or `app-` and are not `app.log` itself.
fn is_backup_of(candidate: &str, active: &str, stem: &str) -> bool {
    candidate != active
        && candidate
            .strip_prefix(stem)
            .is_some_and(|rest| rest.starts_with(['.', '-', '_']))
}

/// Files rotated out of `filename`, newest first.
///
/// # Errors
/// Directory read failures. A missing directory yields an empty list.
pub fn list_backups(filename: &Path) -> Result<Vec<Backup>, crate::Error> {
    let dir = log_dir(filename);
    let (Some(active), Some(stem)) = (
        filename.file_name().and_then(|n| n.to_str()),
        filename.file_stem().and_then(|n| n.to_str()),
    ) else {
        return Ok(Vec::new());
    };
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_backup_of(name, active, stem) {
            backups.push(Backup {
                path: entry.path(),
                modified: meta.modified()?,
                compressed: name.ends_with(GZ_EXT),
            });
        }
    }

    backups.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(backups)
}

/// Removes backups older than `max_age_days`. Returns how many were removed.
/// A file that cannot be removed is reported and skipped.
///
/// # Errors
/// Only a failure to list the directory.
pub(super) fn prune_expired(options: &RotationOptions) -> Result<usize, crate::Error> {
    if options.max_age_days == 0 {
        return Ok(0);
    }
    let max_age = Duration::from_secs(u64::from(options.max_age_days) * SECS_PER_DAY);
    let now = SystemTime::now();

    let mut removed = 0;
    for backup in list_backups(&options.filename)? {
        let age = now.duration_since(backup.modified).unwrap_or_default();
        if age <= max_age {
            continue;
        }
        match fs::remove_file(&backup.path) {
            Ok(()) => {
                removed += 1;
                internal::debug(
                    "ROTATE",
                    &format!("Removed expired backup {}", backup.path.display()),
                );
            }
            Err(e) => internal::warn(
                "ROTATE",
                &format!("Failed to remove {}: {e}", backup.path.display()),
            ),
        }
    }
    Ok(removed)
}
