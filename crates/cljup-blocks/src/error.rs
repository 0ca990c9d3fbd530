//! Error types for cljup-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] cljup_fs::Error),

    #[error("Invalid block id {id:?}: use letters, digits, '-' or '_'")]
    InvalidId { id: String },
}
