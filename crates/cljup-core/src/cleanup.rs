//! Removal of temporary working directories

use crate::env::HostEnv;
use crate::settings::Settings;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The known temporary directories of a run.
#[derive(Debug, Clone)]
pub struct Cleanup {
    directories: Vec<PathBuf>,
    home: PathBuf,
}

impl Cleanup {
    pub fn new(directories: Vec<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            directories,
            home: home.into(),
        }
    }

    pub fn from_settings(settings: &Settings, env: &HostEnv) -> Self {
        let directories = settings
            .cleanup
            .directories
            .iter()
            .map(|dir| env.expand(dir))
            .collect();
        Self::new(directories, &env.home)
    }

    /// Remove every known directory that exists and return the ones removed.
    ///
    /// Directories that were never created are skipped silently. Removal
    /// failures are logged; cleanup itself never fails.
    pub fn run(&self) -> Vec<PathBuf> {
        let mut removed = Vec::new();
        for dir in &self.directories {
            if self.is_protected(dir) {
                tracing::warn!(dir = %dir.display(), "refusing to remove protected directory");
                continue;
            }
            match std::fs::remove_dir_all(dir) {
                Ok(()) => {
                    tracing::debug!(dir = %dir.display(), "removed");
                    removed.push(dir.clone());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(dir = %dir.display(), "cleanup failed: {e}"),
            }
        }
        removed
    }

    /// Run cleanup when the returned guard is dropped.
    pub fn guard(self) -> CleanupGuard {
        CleanupGuard { cleanup: self }
    }

    fn is_protected(&self, dir: &Path) -> bool {
        dir.parent().is_none() || dir == self.home || self.home.starts_with(dir)
    }
}

/// Runs [`Cleanup`] on drop, whether the run returned normally or with an error.
#[derive(Debug)]
pub struct CleanupGuard {
    cleanup: Cleanup,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        self.cleanup.run();
    }
}
