//! Package-manager detection

use crate::env::HostEnv;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Supported system package managers, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Dnf,
}

impl PackageManager {
    pub const PROBE_ORDER: [PackageManager; 2] = [PackageManager::Apt, PackageManager::Dnf];

    /// Executable probed on the search path.
    pub fn executable(&self) -> &'static str {
        match self {
            Self::Apt => "apt-get",
            Self::Dnf => "dnf",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable())
    }
}

/// What the host offers. Determined once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemProfile {
    pub package_manager: PackageManager,
    /// Resolved location of the package manager executable.
    pub executable: PathBuf,
}

/// Probe for known package managers in priority order.
///
/// Fails closed with [`Error::PlatformUnsupported`] when none is found.
pub fn detect_platform(env: &HostEnv) -> Result<SystemProfile> {
    for manager in PackageManager::PROBE_ORDER {
        if let Some(executable) = env.find_executable(manager.executable()) {
            tracing::info!(package_manager = %manager, "platform detected");
            return Ok(SystemProfile {
                package_manager: manager,
                executable,
            });
        }
    }

    Err(Error::PlatformUnsupported {
        probed: PackageManager::PROBE_ORDER
            .iter()
            .map(PackageManager::executable)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// The subset of `/etc/os-release` used to pick vendor repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    fields: HashMap<String, String>,
}

impl OsRelease {
    pub fn parse(content: &str) -> Self {
        let fields = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| {
                let value = value.trim().trim_matches('"').trim_matches('\'');
                (key.trim().to_string(), value.to_string())
            })
            .collect();
        Self { fields }
    }

    /// Read and parse; a missing file yields an empty release.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::parse(&cljup_fs::io::read_lossy_or_empty(path)?))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Distribution id such as `ubuntu` or `fedora`.
    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    /// Release codename such as `jammy`, falling back to `UBUNTU_CODENAME`.
    pub fn codename(&self) -> Option<&str> {
        self.get("VERSION_CODENAME")
            .or_else(|| self.get("UBUNTU_CODENAME"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_values() {
        let release = OsRelease::parse(
            "NAME=\"Ubuntu\"\nID=ubuntu\nVERSION_CODENAME=jammy\n# comment\nBAD LINE\n",
        );
        assert_eq!(release.id(), Some("ubuntu"));
        assert_eq!(release.codename(), Some("jammy"));
    }

    #[test]
    fn codename_falls_back_to_ubuntu_codename() {
        let release = OsRelease::parse("ID=linuxmint\nVERSION_CODENAME=\nUBUNTU_CODENAME=noble\n");
        assert_eq!(release.codename(), Some("noble"));
    }
}
