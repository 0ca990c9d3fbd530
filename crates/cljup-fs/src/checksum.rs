//! Pinned SHA-256 digests for downloaded files
//!
//! Digests are rendered as `sha256:<lowercase hex>`. Settings may pin them
//! with or without the prefix, in either case.

use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;

const PREFIX: &str = "sha256:";

fn render(digest: impl std::fmt::LowerHex) -> String {
    format!("{PREFIX}{digest:x}")
}

/// Digest of a file, streamed rather than read whole.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| Error::io(path, e))?;
    Ok(render(hasher.finalize()))
}

/// Bring a pinned value into the rendered form.
pub fn normalize(expected: &str) -> String {
    let trimmed = expected.trim();
    let hex = trimmed.strip_prefix(PREFIX).unwrap_or(trimmed);
    format!("{PREFIX}{}", hex.to_ascii_lowercase())
}

/// Compare a file against a pinned digest.
///
/// The inner `Err` carries the actual digest for the mismatch message.
pub fn verify_file(path: &Path, expected: &str) -> Result<std::result::Result<(), String>> {
    let actual = compute_file_checksum(path)?;
    Ok(if actual == normalize(expected) {
        Ok(())
    } else {
        Err(actual)
    })
}
