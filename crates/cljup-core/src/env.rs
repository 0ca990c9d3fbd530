//! Host environment captured at start-up

use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Shell families with a known run-commands file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Bash,
    Zsh,
    Other,
}

impl ShellKind {
    /// Classify a `SHELL` value such as `/usr/bin/zsh`.
    pub fn from_shell(shell: Option<&str>) -> Self {
        let name = shell
            .and_then(|s| Path::new(s).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match name {
            "bash" => Self::Bash,
            "zsh" => Self::Zsh,
            _ => Self::Other,
        }
    }

    /// Run-commands file name relative to the home directory.
    pub fn rc_file_name(&self) -> &'static str {
        match self {
            Self::Bash => ".bashrc",
            Self::Zsh => ".zshrc",
            Self::Other => ".profile",
        }
    }
}

/// `HOME`, `SHELL` and `PATH` plus the roots every other path hangs off.
///
/// `system_root` is `/` outside of tests; system files such as
/// `etc/os-release` are always resolved beneath it.
#[derive(Debug, Clone)]
pub struct HostEnv {
    pub home: PathBuf,
    pub shell: Option<String>,
    pub search_path: OsString,
    pub system_root: PathBuf,
    pub cwd: PathBuf,
}

impl HostEnv {
    /// Capture the environment of the current process.
    pub fn capture() -> Result<Self> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or(Error::HomeNotFound)?;
        let cwd = std::env::current_dir().unwrap_or_else(|_| home.clone());

        Ok(Self {
            home,
            shell: std::env::var("SHELL").ok().filter(|s| !s.is_empty()),
            search_path: std::env::var_os("PATH").unwrap_or_default(),
            system_root: PathBuf::from("/"),
            cwd,
        })
    }

    pub fn shell_kind(&self) -> ShellKind {
        ShellKind::from_shell(self.shell.as_deref())
    }

    /// The shell's run-commands file.
    pub fn rc_file(&self) -> PathBuf {
        self.home.join(self.shell_kind().rc_file_name())
    }

    /// Shell used to re-source the run-commands file.
    pub fn shell_program(&self) -> &str {
        self.shell.as_deref().unwrap_or("sh")
    }

    /// Expand `~` and anchor relative paths at the working directory.
    pub fn expand(&self, input: &str) -> PathBuf {
        let path = cljup_fs::expand_home(input, &self.home);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }

    /// A system path such as `etc/os-release`, beneath `system_root`.
    pub fn system_path(&self, relative: &str) -> PathBuf {
        self.system_root.join(relative.trim_start_matches('/'))
    }

    /// Look an executable up on the current search path.
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let found = which::which_in(name, Some(&self.search_path), &self.cwd).ok();
        tracing::debug!(name, found = ?found, "executable lookup");
        found
    }

    /// Whether `dir` is already an entry of the search path.
    pub fn search_path_contains(&self, dir: &Path) -> bool {
        std::env::split_paths(&self.search_path).any(|entry| entry == dir)
    }

    /// Put `dir` in front of the search path for the rest of the run.
    pub fn prepend_search_path(&mut self, dir: &Path) {
        if self.search_path_contains(dir) {
            return;
        }
        let entries = std::iter::once(dir.to_path_buf())
            .chain(std::env::split_paths(&self.search_path));
        match std::env::join_paths(entries) {
            Ok(joined) => self.search_path = joined,
            Err(e) => tracing::warn!(dir = %dir.display(), "cannot add to search path: {e}"),
        }
    }
}
