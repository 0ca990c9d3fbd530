//! Single-run lock

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// An exclusive advisory lock held for the lifetime of a run.
///
/// The lock file itself is left in place; only the lock is released on drop.
#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Try to take the lock without blocking.
    ///
    /// Fails with [`Error::LockHeld`] when another process holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| Error::io(path, e))?;

        file.try_lock_exclusive().map_err(|_| Error::LockHeld {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(path = %path.display(), "run lock acquired");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!(path = %self.path.display(), "failed to release run lock: {e}");
        }
    }
}
