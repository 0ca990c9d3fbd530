//! Per-run state shared by every bootstrap step

use crate::env::HostEnv;
use crate::fetch::{Downloader, download_verified};
use crate::profile::ProfileEditor;
use crate::prompt::Prompter;
use crate::runner::{CommandOutput, CommandRunner, CommandSpec};
use crate::settings::Settings;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Everything a step needs: the environment, the settings and the injected
/// collaborators.
pub struct Session<'a> {
    pub env: HostEnv,
    pub settings: &'a Settings,
    pub runner: &'a dyn CommandRunner,
    pub prompter: &'a dyn Prompter,
    pub downloader: &'a dyn Downloader,
    pub profile: &'a dyn ProfileEditor,
}

impl<'a> Session<'a> {
    /// A command spec that sees the session's search path.
    pub fn command(&self, program: impl Into<PathBuf>) -> CommandSpec {
        CommandSpec::new(program).env("PATH", self.env.search_path.clone())
    }

    /// A command run through the configured privilege-escalation prefix.
    pub fn elevated(&self, component: &str, program: &Path) -> Result<CommandSpec> {
        let elevate = self.settings.elevate.trim();
        if elevate.is_empty() {
            return Ok(self.command(program));
        }
        let prefix = self.env.find_executable(elevate).ok_or_else(|| {
            Error::install(component, format!("`{}` not found on PATH", elevate))
        })?;
        Ok(self.command(prefix).arg(program))
    }

    /// Run a command whose failure fails `component`.
    pub fn run_checked(&self, component: &str, spec: &CommandSpec) -> Result<CommandOutput> {
        let output = self.runner.run(spec).map_err(|e| match e {
            Error::Io(io) => Error::install(component, format!("cannot run `{}`: {}", spec.display(), io)),
            other => other,
        })?;
        if !output.success() {
            let mut message = format!("`{}` failed with {}", spec.display(), output.describe_exit());
            let stderr = output.stderr.trim();
            if !stderr.is_empty() {
                message.push_str(": ");
                message.push_str(stderr);
            }
            return Err(Error::install(component, message));
        }
        Ok(output)
    }

    /// Download staging directory, created on demand.
    pub fn staging_dir(&self) -> Result<PathBuf> {
        let dir = self.env.expand(&self.settings.staging_dir);
        std::fs::create_dir_all(&dir).map_err(|e| Error::write(&dir, e))?;
        Ok(dir)
    }

    pub fn download(&self, url: &str, sha256: Option<&str>, dest: &Path) -> Result<()> {
        download_verified(self.downloader, url, sha256, dest)
    }
}
