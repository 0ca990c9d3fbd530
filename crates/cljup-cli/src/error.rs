//! Error types for cljup-cli

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cljup-core
    #[error(transparent)]
    Core(#[from] cljup_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) => e.exit_code(),
            Self::Io(_) => 1,
        }
    }
}
