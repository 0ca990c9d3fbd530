//! Bootstrap settings
//!
//! Package names, versions, URLs and editor details are facts about the
//! outside world, so they live here rather than in the installers. Every
//! field has a default; an empty settings file is valid.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file.
pub const CONFIG_ENV: &str = "CLJUP_CONFIG";

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Privilege-escalation command prefixed to system package operations.
    /// Empty runs them directly.
    pub elevate: String,
    /// Download staging directory, removed by cleanup.
    pub staging_dir: String,
    /// Run lock location.
    pub lock_path: String,
    pub runtime: RuntimeSettings,
    pub toolchain: ToolchainSettings,
    pub editors: EditorSettings,
    pub shared_config: SharedConfigSettings,
    pub cleanup: CleanupSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            elevate: "sudo".into(),
            staging_dir: "~/.cljup/tmp".into(),
            lock_path: "~/.cljup/cljup.lock".into(),
            runtime: RuntimeSettings::default(),
            toolchain: ToolchainSettings::default(),
            editors: EditorSettings::default(),
            shared_config: SharedConfigSettings::default(),
            cleanup: CleanupSettings::default(),
        }
    }
}

/// Java runtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeSettings {
    pub launcher: String,
    /// Oldest acceptable major version of an already-installed runtime.
    pub min_major: u32,
    pub package: String,
    /// Base name of the repository list/repo and keyring files.
    pub repository_name: String,
    pub key_url: String,
    pub key_sha256: Option<String>,
    pub apt_repository_url: String,
    pub rpm_repository_url: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            launcher: "java".into(),
            min_major: 11,
            package: "temurin-21-jdk".into(),
            repository_name: "adoptium".into(),
            key_url: "https://packages.adoptium.net/artifactory/api/gpg/key/public".into(),
            key_sha256: None,
            apt_repository_url: "https://packages.adoptium.net/artifactory/deb".into(),
            rpm_repository_url: "https://packages.adoptium.net/artifactory/rpm".into(),
        }
    }
}

/// Clojure command-line tools.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainSettings {
    pub launcher: String,
    pub version: String,
    /// Installer URL; `{version}` is substituted.
    pub installer_url: String,
    pub installer_sha256: Option<String>,
    pub default_dir: String,
    pub path_block_id: String,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            launcher: "clojure".into(),
            version: "1.12.0.1530".into(),
            installer_url: "https://download.clojure.org/install/linux-install-{version}.sh".into(),
            installer_sha256: None,
            default_dir: "~/.clojure".into(),
            path_block_id: "clojure-path".into(),
        }
    }
}

impl ToolchainSettings {
    pub fn installer_url(&self) -> String {
        self.installer_url.replace("{version}", &self.version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorSettings {
    pub vscode: VsCodeSettings,
    pub neovim: NeovimSettings,
}

/// Extension-model editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VsCodeSettings {
    pub cli: String,
    pub extensions: Vec<String>,
    pub scripts_dir: String,
}

impl Default for VsCodeSettings {
    fn default() -> Self {
        Self {
            cli: "code".into(),
            extensions: vec![
                "betterthantomorrow.calva".into(),
                "borkdude.clj-kondo".into(),
            ],
            scripts_dir: "~/.config/calva/scripts".into(),
        }
    }
}

/// Plugin-model editor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeovimSettings {
    pub cli: String,
    pub config_path: String,
    pub config_url: String,
    pub config_sha256: Option<String>,
    /// Text whose presence in the config file means it is already set up for Clojure.
    pub configured_marker: String,
    pub plugin_install_args: Vec<String>,
}

impl Default for NeovimSettings {
    fn default() -> Self {
        Self {
            cli: "nvim".into(),
            config_path: "~/.config/nvim/init.vim".into(),
            config_url: "https://raw.githubusercontent.com/practicalli/neovim-config/main/init.vim"
                .into(),
            config_sha256: None,
            configured_marker: "Olical/conjure".into(),
            plugin_install_args: vec!["--headless".into(), "+PlugInstall".into(), "+qall".into()],
        }
    }
}

/// Shared build-tool configuration and shell helper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfigSettings {
    pub file_name: String,
    pub url: String,
    pub sha256: Option<String>,
    /// Where the file is fetched before being copied into the toolchain directory.
    pub staging_dir: String,
    pub function_block_id: String,
    /// Text identifying the function when it was added by hand.
    pub function_signature: String,
    pub function_body: String,
}

impl Default for SharedConfigSettings {
    fn default() -> Self {
        Self {
            file_name: "deps.edn".into(),
            url: "https://raw.githubusercontent.com/practicalli/clojure-cli-config/main/deps.edn"
                .into(),
            sha256: None,
            staging_dir: "~/dot-clojure".into(),
            function_block_id: "clj-new".into(),
            function_signature: "cljnew()".into(),
            function_body: "cljnew() {\n  clojure -Tclj-new app :name \"$1\"\n}".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanupSettings {
    pub directories: Vec<String>,
}

impl Default for CleanupSettings {
    fn default() -> Self {
        Self {
            directories: vec!["~/.cljup/tmp".into(), "~/dot-clojure".into()],
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Settings {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings from a file that must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve settings from, in order: an explicit path, the `CLJUP_CONFIG`
    /// variable, `<config dir>/cljup/config.toml`, built-in defaults.
    ///
    /// Explicitly named files must exist; the default location may not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Self::from_file(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/cljup/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cljup").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml_str("", Path::new("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let content = r#"
elevate = ""

[toolchain]
version = "1.11.1.1435"

[editors.vscode]
extensions = ["betterthantomorrow.calva"]
"#;
        let settings = Settings::from_toml_str(content, Path::new("config.toml")).unwrap();

        assert_eq!(settings.elevate, "");
        assert_eq!(
            settings.toolchain.installer_url(),
            "https://download.clojure.org/install/linux-install-1.11.1.1435.sh"
        );
        assert_eq!(settings.editors.vscode.extensions.len(), 1);
        assert_eq!(settings.editors.vscode.cli, "code");
        assert_eq!(settings.runtime, RuntimeSettings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::from_toml_str("[runtime]\npackages = 1\n", Path::new("c.toml"));
        assert!(matches!(result, Err(Error::Settings { .. })));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Settings::resolve(Some(Path::new("/nonexistent/cljup.toml")));
        assert!(matches!(result, Err(Error::Settings { .. })));
    }
}
