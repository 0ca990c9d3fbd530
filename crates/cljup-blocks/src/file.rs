//! Block operations on files

use crate::error::{Error, Result};
use crate::parser::{has_block, is_valid_id};
use crate::writer::append_text;
use cljup_fs::io;
use std::path::Path;

/// Checks whether `path` already contains the opening marker for `id`.
///
/// A missing file contains no blocks.
pub fn file_has_block(path: &Path, id: &str) -> Result<bool> {
    let content = io::read_lossy_or_empty(path)?;
    Ok(has_block(&content, id))
}

/// Appends a block to `path` unless its marker is already present.
///
/// Returns `true` when the block was written and `false` when it was
/// already there. The file is created if missing.
pub fn append_block_to_file(path: &Path, id: &str, block_content: &str) -> Result<bool> {
    if !is_valid_id(id) {
        return Err(Error::InvalidId { id: id.to_string() });
    }

    let existing = io::read_lossy_or_empty(path)?;
    if has_block(&existing, id) {
        tracing::debug!(path = %path.display(), id, "block already present");
        return Ok(false);
    }

    io::append_locked(path, &append_text(&existing, id, block_content))?;
    tracing::info!(path = %path.display(), id, "block appended");
    Ok(true)
}
