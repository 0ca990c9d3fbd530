//! [`TestHome`] builder for bootstrap test scenarios.

use crate::stub;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary user home with a private search path and system root.
///
/// Layout under one temporary directory:
///
/// ```text
/// home/   the user's HOME
/// bin/    the only entry of the search path
/// root/   stands in for `/` (holds `etc/os-release` and friends)
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use cljup_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.stub("apt-get", "exit 0");
/// home.write_home_file(".bashrc", "alias ll='ls -l'\n");
/// home.assert_home_file_exists(".bashrc");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create the empty `home`, `bin` and `root` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["home", "bin", "root/etc"] {
            fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    /// The temporary directory holding everything.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root().join("bin")
    }

    pub fn system_root(&self) -> PathBuf {
        self.root().join("root")
    }

    /// A search path containing only [`TestHome::bin_dir`].
    pub fn search_path(&self) -> OsString {
        self.bin_dir().into_os_string()
    }

    /// Put an executable stub named `name` on the search path.
    pub fn stub(&self, name: &str, body: &str) -> PathBuf {
        stub::write_stub(&self.bin_dir(), name, body)
    }

    /// Put a stub that does nothing on the search path.
    pub fn stub_noop(&self, name: &str) -> PathBuf {
        stub::write_noop_stub(&self.bin_dir(), name)
    }

    /// Write `etc/os-release` under the system root.
    pub fn os_release(&self, content: &str) {
        fs::write(self.system_root().join("etc/os-release"), content).unwrap();
    }

    /// Write a file relative to the system root, creating parent directories.
    pub fn write_system_file(&self, relative: &str, content: &str) {
        write_with_parents(&self.system_root().join(relative), content);
    }

    /// Write a file relative to the home directory, creating parent directories.
    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home().join(relative);
        write_with_parents(&path, content);
        path
    }

    /// Read a file relative to the home directory.
    pub fn read_home_file(&self, relative: &str) -> String {
        let path = self.home().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }

    pub fn assert_home_file_exists(&self, relative: &str) {
        let path = self.home().join(relative);
        assert!(path.exists(), "Expected {} to exist", path.display());
    }

    pub fn assert_home_file_absent(&self, relative: &str) {
        let path = self.home().join(relative);
        assert!(!path.exists(), "Expected {} to be absent", path.display());
    }

    /// Number of lines in a home file equal to `line` after trimming.
    pub fn count_lines(&self, relative: &str, line: &str) -> usize {
        self.read_home_file(relative)
            .lines()
            .filter(|l| l.trim() == line)
            .count()
    }
}

fn write_with_parents(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
}
