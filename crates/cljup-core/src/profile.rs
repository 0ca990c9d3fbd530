//! Shell run-commands file edits
//!
//! Components never touch the run-commands file directly; they go through a
//! [`ProfileEditor`], which only knows how to look for markers and append
//! marker-delimited blocks.

use crate::Result;
use cljup_blocks::{append_block_to_file, file_has_block};
use cljup_fs::io;
use std::path::{Path, PathBuf};

pub trait ProfileEditor {
    /// The file being edited.
    fn path(&self) -> &Path;

    /// Whether the block `id` was already applied.
    fn has_marker(&self, id: &str) -> Result<bool>;

    /// Whether arbitrary text such as a function signature appears anywhere.
    fn contains(&self, needle: &str) -> Result<bool>;

    /// Append the block `id` unless present. Returns `true` when written.
    fn append_block(&self, id: &str, text: &str) -> Result<bool>;
}

/// [`ProfileEditor`] over a real run-commands file.
#[derive(Debug, Clone)]
pub struct RcFileEditor {
    path: PathBuf,
}

impl RcFileEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileEditor for RcFileEditor {
    fn path(&self) -> &Path {
        &self.path
    }

    fn has_marker(&self, id: &str) -> Result<bool> {
        Ok(file_has_block(&self.path, id)?)
    }

    fn contains(&self, needle: &str) -> Result<bool> {
        Ok(io::read_lossy_or_empty(&self.path)?.contains(needle))
    }

    fn append_block(&self, id: &str, text: &str) -> Result<bool> {
        Ok(append_block_to_file(&self.path, id, text)?)
    }
}
