//! VS Code: extension-model editor

use super::EditorIntegration;
use crate::report::Outcome;
use crate::session::Session;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

const COMPONENT: &str = "vscode";

#[derive(Debug, Default, Clone, Copy)]
pub struct VsCode;

impl VsCode {
    /// Installed extension ids, lower-cased.
    fn installed_extensions(&self, session: &Session<'_>, cli: &Path) -> Result<BTreeSet<String>> {
        let spec = session.command(cli).arg("--list-extensions").captured();
        let output = session.run_checked(COMPONENT, &spec)?;
        Ok(output
            .stdout
            .lines()
            .map(|line| line.trim().to_ascii_lowercase())
            .filter(|line| !line.is_empty())
            .collect())
    }

    fn missing_extensions(&self, session: &Session<'_>, cli: &Path) -> Result<Vec<String>> {
        let installed = self.installed_extensions(session, cli)?;
        Ok(session
            .settings
            .editors
            .vscode
            .extensions
            .iter()
            .filter(|ext| !installed.contains(&ext.to_ascii_lowercase()))
            .cloned()
            .collect())
    }
}

impl EditorIntegration for VsCode {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn detect_installed(&self, session: &Session<'_>) -> bool {
        session
            .env
            .find_executable(&session.settings.editors.vscode.cli)
            .is_some()
    }

    fn is_configured(&self, session: &Session<'_>) -> Result<bool> {
        let settings = &session.settings.editors.vscode;
        let Some(cli) = session.env.find_executable(&settings.cli) else {
            return Ok(false);
        };
        let scripts_dir = session.env.expand(&settings.scripts_dir);
        Ok(scripts_dir.is_dir() && self.missing_extensions(session, &cli)?.is_empty())
    }

    fn configure(&self, session: &Session<'_>) -> Result<Outcome> {
        let settings = &session.settings.editors.vscode;
        let cli = session
            .env
            .find_executable(&settings.cli)
            .ok_or_else(|| Error::install(COMPONENT, format!("`{}` not found on PATH", settings.cli)))?;

        for extension in self.missing_extensions(session, &cli)? {
            let spec = session
                .command(&cli)
                .args(["--install-extension", extension.as_str()]);
            session.run_checked(COMPONENT, &spec)?;
            tracing::info!(extension = %extension, "extension installed");
        }

        let scripts_dir = session.env.expand(&settings.scripts_dir);
        std::fs::create_dir_all(&scripts_dir).map_err(|e| Error::write(&scripts_dir, e))?;

        Ok(Outcome::Configured)
    }
}
