//! Clojure command-line tools installation

use crate::report::Outcome;
use crate::session::Session;
use crate::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const COMPONENT: &str = "toolchain";

/// Install location chosen for the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryChoice {
    pub path: PathBuf,
    /// Whether the directory had to be created.
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainInstall {
    pub dir: PathBuf,
    pub outcome: Outcome,
}

/// Make sure the toolchain launcher is available and on PATH.
///
/// An existing launcher determines the install directory and ends the step
/// without any download.
pub fn ensure_toolchain_installed(session: &mut Session<'_>) -> Result<ToolchainInstall> {
    let settings = session.settings;
    let toolchain = &settings.toolchain;

    if let Some(found) = session.env.find_executable(&toolchain.launcher) {
        let dir = install_dir_from_launcher(&found, &toolchain.launcher);
        tracing::info!(dir = %dir.display(), "toolchain already installed");
        return Ok(ToolchainInstall {
            dir,
            outcome: Outcome::AlreadySatisfied,
        });
    }

    let choice = resolve_directory(session)?;
    let url = toolchain.installer_url();
    let script = choice.path.join(script_file_name(&url));

    session.download(&url, toolchain.installer_sha256.as_deref(), &script)?;
    cljup_fs::io::make_executable(&script).map_err(|e| Error::write(&script, e))?;

    let install = session
        .command(&script)
        .arg("--prefix")
        .arg(&choice.path);
    session.run_checked(COMPONENT, &install)?;
    tracing::info!(dir = %choice.path.display(), "toolchain installed");

    let bin = choice.path.join("bin");
    let block = format!("export PATH=\"{}:$PATH\"", bin.display());
    let profile = session.profile;
    profile
        .append_block(&toolchain.path_block_id, &block)
        .map_err(|e| Error::write(profile.path(), e))?;

    resource_profile(session, &bin);

    Ok(ToolchainInstall {
        dir: choice.path,
        outcome: Outcome::Installed,
    })
}

/// Install directory for a launcher found at `launcher_path`.
///
/// Symlinks are resolved first, then the trailing `bin/<launcher>` is
/// removed. A launcher outside a `bin` directory falls back to its
/// grandparent.
pub fn install_dir_from_launcher(launcher_path: &Path, launcher: &str) -> PathBuf {
    let resolved = dunce::canonicalize(launcher_path).unwrap_or_else(|_| launcher_path.to_path_buf());
    let suffix = Path::new("bin").join(launcher);

    cljup_fs::strip_trailing_components(&resolved, &suffix)
        .or_else(|| resolved.parent().and_then(Path::parent).map(Path::to_path_buf))
        .unwrap_or(resolved)
}

/// Ask for the install directory and make sure it exists.
pub fn resolve_directory(session: &Session<'_>) -> Result<DirectoryChoice> {
    let default = &session.settings.toolchain.default_dir;
    let answer = session
        .prompter
        .ask("Where should the Clojure tools be installed?", default)?;
    let answer = answer.trim();
    let path = session
        .env
        .expand(if answer.is_empty() { default } else { answer });

    let created = !path.is_dir();
    if created {
        std::fs::create_dir_all(&path).map_err(|e| Error::write(&path, e))?;
        tracing::debug!(dir = %path.display(), "created install directory");
    }
    Ok(DirectoryChoice { path, created })
}

fn script_file_name(url: &str) -> String {
    url.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("linux-install.sh")
        .to_string()
}

/// Printed on its own line before PATH, so anything the run-commands file
/// echoes can be told apart from the value.
const PATH_SENTINEL: &str = "__cljup_path__";

/// The PATH printed after the sentinel line, if any.
fn path_after_sentinel(stdout: &str) -> Option<&str> {
    let marker = format!("{PATH_SENTINEL}\n");
    let (_, path) = stdout.rsplit_once(&marker)?;
    let path = path.trim_end_matches('\n');
    (!path.is_empty()).then_some(path)
}

/// Re-source the run-commands file and adopt the resulting PATH.
///
/// Failure only warns. `bin` is put on the in-process search path either way,
/// since many run-commands files return early in non-interactive shells.
fn resource_profile(session: &mut Session<'_>, bin: &Path) {
    let rc = session.profile.path().display().to_string();
    let script = format!(
        ". \"{}\" && printf '\\n{}\\n%s' \"$PATH\"",
        rc, PATH_SENTINEL
    );
    let spec = session
        .command(session.env.shell_program())
        .arg("-c")
        .arg(script)
        .captured();

    match session.runner.run(&spec) {
        Ok(output) if output.success() => match path_after_sentinel(&output.stdout) {
            Some(path) => {
                session.env.search_path = OsString::from(path);
                tracing::debug!(rc = %rc, "run-commands file re-sourced");
            }
            None => tracing::warn!(rc = %rc, "re-sourcing printed no PATH"),
        },
        Ok(output) => {
            tracing::warn!(rc = %rc, "could not re-source run-commands file: {}", output.describe_exit());
        }
        Err(e) => tracing::warn!(rc = %rc, "could not re-source run-commands file: {e}"),
    }

    session.env.prepend_search_path(bin);
}
