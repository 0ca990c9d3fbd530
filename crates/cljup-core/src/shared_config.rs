//! Shared build-tool configuration and shell helper function

use crate::backup::backup_file;
use crate::report::Outcome;
use crate::session::Session;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedConfigOutcome {
    /// The configuration file in the toolchain directory.
    pub file: Outcome,
    /// The shell function block in the run-commands file.
    pub function: Outcome,
}

/// Install the shared configuration file into `toolchain_dir` and the shell
/// helper function into the run-commands file.
///
/// An existing configuration file is only replaced with the user's consent,
/// after a backup. Keeping it is a successful outcome.
pub fn ensure_shared_config(session: &Session<'_>, toolchain_dir: &Path) -> Result<SharedConfigOutcome> {
    Ok(SharedConfigOutcome {
        file: ensure_config_file(session, toolchain_dir)?,
        function: ensure_shell_function(session)?,
    })
}

fn ensure_config_file(session: &Session<'_>, toolchain_dir: &Path) -> Result<Outcome> {
    let shared = &session.settings.shared_config;
    let dest = toolchain_dir.join(&shared.file_name);

    if dest.exists() {
        let question = format!("{} already exists. Replace it?", dest.display());
        if !session.prompter.confirm(&question, false)? {
            tracing::info!(path = %dest.display(), "existing shared config kept");
            return Ok(Outcome::Kept);
        }
        let staged = stage_download(session)?;
        backup_file(&dest)?;
        install(&staged, &dest)?;
        return Ok(Outcome::Replaced);
    }

    let staged = stage_download(session)?;
    std::fs::create_dir_all(toolchain_dir).map_err(|e| Error::write(toolchain_dir, e))?;
    install(&staged, &dest)?;
    Ok(Outcome::Installed)
}

/// Append the helper function unless its block or a hand-written
/// definition is already there.
pub fn ensure_shell_function(session: &Session<'_>) -> Result<Outcome> {
    let shared = &session.settings.shared_config;
    let profile = session.profile;

    if profile.has_marker(&shared.function_block_id)? {
        return Ok(Outcome::AlreadySatisfied);
    }
    if !shared.function_signature.is_empty() && profile.contains(&shared.function_signature)? {
        tracing::debug!(signature = %shared.function_signature, "shell function defined by hand");
        return Ok(Outcome::AlreadySatisfied);
    }

    profile
        .append_block(&shared.function_block_id, &shared.function_body)
        .map_err(|e| Error::write(profile.path(), e))?;
    Ok(Outcome::Installed)
}

/// Fetch the file into its staging directory.
fn stage_download(session: &Session<'_>) -> Result<PathBuf> {
    let shared = &session.settings.shared_config;
    let staging = session.env.expand(&shared.staging_dir);
    std::fs::create_dir_all(&staging).map_err(|e| Error::write(&staging, e))?;

    let staged = staging.join(&shared.file_name);
    session.download(&shared.url, shared.sha256.as_deref(), &staged)?;
    Ok(staged)
}

fn install(staged: &Path, dest: &Path) -> Result<()> {
    cljup_fs::io::copy_atomic(staged, dest).map_err(|e| Error::write(dest, e))?;
    tracing::info!(path = %dest.display(), "shared config installed");
    Ok(())
}
