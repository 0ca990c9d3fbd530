//! Stub executables.
//!
//! A stub is a `#!/bin/sh` script placed in a private `bin` directory so
//! executable lookup finds it without any real tool being installed.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable `#!/bin/sh` script named `name` into `dir`.
///
/// `body` is the script after the shebang line.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    fs::create_dir_all(dir)
        .unwrap_or_else(|e| panic!("write_stub: failed to create {}: {e}", dir.display()));
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .unwrap_or_else(|e| panic!("write_stub: failed to write {}: {e}", path.display()));
    make_executable(&path);
    path
}

/// A stub that exits successfully without output.
pub fn write_noop_stub(dir: &Path, name: &str) -> PathBuf {
    write_stub(dir, name, "exit 0")
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("write_stub: failed to chmod {}: {e}", path.display()));
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
