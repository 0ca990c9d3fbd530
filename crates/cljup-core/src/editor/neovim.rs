//! Neovim: plugin-model editor

use super::EditorIntegration;
use crate::backup::backup_file;
use crate::report::Outcome;
use crate::session::Session;
use crate::{Error, Result};

const COMPONENT: &str = "neovim";

#[derive(Debug, Default, Clone, Copy)]
pub struct Neovim;

impl EditorIntegration for Neovim {
    fn name(&self) -> &'static str {
        "neovim"
    }

    fn detect_installed(&self, session: &Session<'_>) -> bool {
        session
            .env
            .find_executable(&session.settings.editors.neovim.cli)
            .is_some()
    }

    fn is_configured(&self, session: &Session<'_>) -> Result<bool> {
        let settings = &session.settings.editors.neovim;
        let config = session.env.expand(&settings.config_path);
        if !config.is_file() {
            return Ok(false);
        }
        let content = cljup_fs::io::read_lossy_or_empty(&config)?;
        Ok(content.contains(&settings.configured_marker))
    }

    /// Replace the user config with the curated one and install its plugins.
    ///
    /// An existing config is only replaced after a backup the user agreed to,
    /// and only once the download has passed verification in staging.
    fn configure(&self, session: &Session<'_>) -> Result<Outcome> {
        let settings = &session.settings.editors.neovim;
        let nvim = session
            .env
            .find_executable(&settings.cli)
            .ok_or_else(|| Error::install(COMPONENT, format!("`{}` not found on PATH", settings.cli)))?;
        let config = session.env.expand(&settings.config_path);

        if config.exists() {
            let question = format!(
                "{} already exists. Back it up and replace it?",
                config.display()
            );
            if !session.prompter.confirm(&question, false)? {
                tracing::info!(config = %config.display(), "existing config kept, neovim not configured");
                return Ok(Outcome::Skipped);
            }
        }

        let file_name = config
            .file_name()
            .ok_or_else(|| Error::install(COMPONENT, format!("{} is not a file path", config.display())))?;
        let staged = session.staging_dir()?.join(file_name);
        session.download(&settings.config_url, settings.config_sha256.as_deref(), &staged)?;

        if config.exists() {
            backup_file(&config)?;
        }
        cljup_fs::io::copy_atomic(&staged, &config).map_err(|e| Error::write(&config, e))?;

        let install = session.command(&nvim).args(&settings.plugin_install_args);
        session.run_checked(COMPONENT, &install)?;
        tracing::info!(config = %config.display(), "neovim configured");

        Ok(Outcome::Configured)
    }
}
