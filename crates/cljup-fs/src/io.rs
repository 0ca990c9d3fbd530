//! Atomic writes and locked appends

use crate::{Error, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` in one step.
///
/// Bytes go to an anonymous sibling file that is synced and then renamed over
/// the target, so readers see either the old file or the new one.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut staged = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    staged
        .write_all(content)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::io(staged.path(), e))?;
    staged
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "replaced");
    Ok(())
}

/// Append text to a file under an exclusive lock.
///
/// Creates the file (and its parent directory) when missing. Existing content
/// is never rewritten, so symlinked dotfiles keep pointing where they did.
pub fn append_locked(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let written = file
        .write_all(text.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(path, e));

    file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "appended");
    written
}

/// Read a user-edited file for searching, treating a missing file as empty.
///
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub fn read_lossy_or_empty(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Copy `from` over `to` atomically.
pub fn copy_atomic(from: &Path, to: &Path) -> Result<()> {
    let content = fs::read(from).map_err(|e| Error::io(from, e))?;
    write_atomic(to, &content)
}

/// Mark a file executable for its owner, group and others (`0o755`).
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| Error::io(path, e))?
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).map_err(|e| Error::io(path, e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
