//! Error types for cljup-fs

use std::path::PathBuf;

/// Result type for cljup-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cljup-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not lock {path}")]
    LockFailed { path: PathBuf },

    #[error("Lock at {path} is held by another process")]
    LockHeld { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
