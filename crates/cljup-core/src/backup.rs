//! Backups of user-owned files before they are overwritten

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// A copy made before a destructive overwrite. Never deleted by cljup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupArtifact {
    pub original_path: PathBuf,
    pub backup_path: PathBuf,
}

/// Copy `path` to `<path>.bak`, or to `<path>.bak.<UTC timestamp>` when an
/// earlier backup already occupies `<path>.bak`.
pub fn backup_file(path: &Path) -> Result<BackupArtifact> {
    let backup_path = free_backup_path(path);
    std::fs::copy(path, &backup_path).map_err(|e| Error::write(&backup_path, e))?;

    tracing::info!(
        original = %path.display(),
        backup = %backup_path.display(),
        "backup created"
    );
    Ok(BackupArtifact {
        original_path: path.to_path_buf(),
        backup_path,
    })
}

fn free_backup_path(path: &Path) -> PathBuf {
    let plain = with_suffix(path, ".bak");
    if !plain.exists() {
        return plain;
    }
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    let stamped = with_suffix(path, &format!(".bak.{}", stamp));
    if !stamped.exists() {
        return stamped;
    }
    // Same second as an earlier backup
    (1u32..)
        .map(|n| with_suffix(path, &format!(".bak.{}.{}", stamp, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(stamped)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
