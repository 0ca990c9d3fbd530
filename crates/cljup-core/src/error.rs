//! Error types for cljup-core

use std::path::PathBuf;

/// Conventional exit status after SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Result type for cljup-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a bootstrap run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No supported package manager on the search path
    #[error("Unsupported platform: none of {probed} found on PATH")]
    PlatformUnsupported { probed: String },

    /// A download could not be completed or failed verification
    #[error("Download of {url} failed: {message}")]
    DownloadFailed { url: String, message: String },

    /// An installation command failed or could not be prepared
    #[error("Installing {component} failed: {message}")]
    InstallFailed { component: String, message: String },

    /// Every editor was declined or absent and none was already set up
    #[error("No editor configured: install VS Code or Neovim and accept at least one editor setup")]
    NoEditorConfigured,

    /// A user-owned file or directory could not be written
    #[error("Could not write {path}: {message}")]
    ConfigWriteFailed { path: PathBuf, message: String },

    /// Another run holds the run lock
    #[error("Another cljup run is in progress (lock held at {path})")]
    AlreadyRunning { path: PathBuf },

    /// Reading an answer from the user failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// The user interrupted the run, e.g. with Ctrl+C at a prompt
    #[error("Interrupted")]
    Interrupted,

    /// Settings file missing or malformed
    #[error("Invalid settings in {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Neither HOME nor the platform home directory is available
    #[error("Cannot determine the home directory: set HOME")]
    HomeNotFound,

    /// Filesystem error from cljup-fs
    #[error(transparent)]
    Fs(#[from] cljup_fs::Error),

    /// Block error from cljup-blocks
    #[error(transparent)]
    Blocks(#[from] cljup_blocks::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn install(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InstallFailed {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn download(url: impl Into<String>, message: impl ToString) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PlatformUnsupported { .. } => 2,
            Self::InstallFailed { .. } => 3,
            Self::DownloadFailed { .. } => 4,
            Self::NoEditorConfigured => 5,
            Self::ConfigWriteFailed { .. } => 6,
            Self::AlreadyRunning { .. } => 7,
            Self::Interrupted => INTERRUPTED_EXIT_CODE,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_failed_names_component() {
        let err = Error::install("runtime", "`apt-get install -y temurin-21-jdk` exited with 100");
        assert!(err.to_string().contains("runtime"));
        assert!(err.to_string().contains("exited with 100"));
    }

    #[test]
    fn taxonomy_exit_codes_are_distinct_and_non_zero() {
        let codes = [
            Error::PlatformUnsupported { probed: "apt-get, dnf".into() }.exit_code(),
            Error::install("toolchain", "x").exit_code(),
            Error::download("https://example.invalid", "x").exit_code(),
            Error::NoEditorConfigured.exit_code(),
            Error::write("/tmp/x", "x").exit_code(),
            Error::AlreadyRunning { path: "/tmp/l".into() }.exit_code(),
            Error::Interrupted.exit_code(),
        ];
        for (i, code) in codes.iter().enumerate() {
            assert_ne!(*code, 0);
            assert!(!codes[i + 1..].contains(code));
        }
    }

    #[test]
    fn interrupted_exits_like_sigint() {
        assert_eq!(Error::Interrupted.exit_code(), 130);
    }
}
