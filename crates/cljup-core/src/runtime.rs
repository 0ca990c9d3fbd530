//! Java runtime installation

use crate::platform::{OsRelease, PackageManager, SystemProfile};
use crate::report::Outcome;
use crate::session::Session;
use crate::settings::RuntimeSettings;
use crate::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const COMPONENT: &str = "runtime";

/// `version "21.0.2"`, `version "1.8.0_402"` and `version "17"`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version "(\d+)(?:\.(\d+))?"#).expect("Invalid version regex")
});

/// Make sure a compatible Java runtime is available.
///
/// Nothing is installed when a launcher of at least `min_major` is already
/// on the search path.
pub fn ensure_runtime_installed(session: &Session, system: &SystemProfile) -> Result<Outcome> {
    let runtime = &session.settings.runtime;

    if let Some(launcher) = session.env.find_executable(&runtime.launcher) {
        match probe_major(session, &launcher) {
            Some(major) if major < runtime.min_major => {
                tracing::warn!(
                    major,
                    required = runtime.min_major,
                    "installed runtime is too old, installing {}",
                    runtime.package
                );
            }
            major => {
                tracing::info!(launcher = %launcher.display(), ?major, "runtime already installed");
                return Ok(Outcome::AlreadySatisfied);
            }
        }
    }

    match system.package_manager {
        PackageManager::Apt => install_with_apt(session, system, runtime)?,
        PackageManager::Dnf => install_with_dnf(session, system, runtime)?,
    }

    tracing::info!(package = %runtime.package, "runtime installed");
    Ok(Outcome::Installed)
}

/// Major version reported by `<launcher> -version`, if it can be read.
fn probe_major(session: &Session, launcher: &Path) -> Option<u32> {
    let spec = session.command(launcher).arg("-version").captured();
    match session.runner.run(&spec) {
        Ok(output) => parse_major_version(&format!("{}{}", output.stderr, output.stdout)),
        Err(e) => {
            tracing::debug!("runtime version probe failed: {e}");
            None
        }
    }
}

/// Extract the major version from `java -version` output. Legacy `1.x`
/// versions report `x`.
pub fn parse_major_version(output: &str) -> Option<u32> {
    let caps = VERSION_REGEX.captures(output)?;
    let first: u32 = caps[1].parse().ok()?;
    if first == 1 {
        caps.get(2)?.as_str().parse().ok()
    } else {
        Some(first)
    }
}

fn install_with_apt(session: &Session, system: &SystemProfile, runtime: &RuntimeSettings) -> Result<()> {
    let name = &runtime.repository_name;
    let list_path = session
        .env
        .system_path(&format!("etc/apt/sources.list.d/{}.list", name));

    if list_path.exists() {
        tracing::debug!(path = %list_path.display(), "vendor repository already registered");
    } else {
        let release = OsRelease::load(&session.env.system_path("etc/os-release"))?;
        let codename = release.codename().ok_or_else(|| {
            Error::install(COMPONENT, "cannot determine the release codename from os-release")
        })?;

        let keyring = session
            .env
            .system_path(&format!("etc/apt/keyrings/{}.asc", name));
        let staging = session.staging_dir()?;
        let staged_key = staging.join(format!("{}.asc", name));
        session.download(&runtime.key_url, runtime.key_sha256.as_deref(), &staged_key)?;

        let line = format!(
            "deb [signed-by={}] {} {} main\n",
            keyring.display(),
            runtime.apt_repository_url,
            codename
        );
        let staged_list = write_staged(&staging, &format!("{}.list", name), &line)?;

        install_system_file(session, &staged_key, &keyring)?;
        install_system_file(session, &staged_list, &list_path)?;
        tracing::info!(path = %list_path.display(), "vendor repository registered");
    }

    let apt = &system.executable;
    session.run_checked(COMPONENT, &session.elevated(COMPONENT, apt)?.arg("update"))?;
    session.run_checked(
        COMPONENT,
        &session
            .elevated(COMPONENT, apt)?
            .args(["install", "-y", runtime.package.as_str()]),
    )?;
    Ok(())
}

fn install_with_dnf(session: &Session, system: &SystemProfile, runtime: &RuntimeSettings) -> Result<()> {
    let name = &runtime.repository_name;
    let repo_path = session
        .env
        .system_path(&format!("etc/yum.repos.d/{}.repo", name));

    if repo_path.exists() {
        tracing::debug!(path = %repo_path.display(), "vendor repository already registered");
    } else {
        let release = OsRelease::load(&session.env.system_path("etc/os-release"))?;
        let distro = release.id().ok_or_else(|| {
            Error::install(COMPONENT, "cannot determine the distribution id from os-release")
        })?;

        let staging = session.staging_dir()?;
        let content = render_repo_file(runtime, distro);
        let staged = write_staged(&staging, &format!("{}.repo", name), &content)?;
        install_system_file(session, &staged, &repo_path)?;
        tracing::info!(path = %repo_path.display(), "vendor repository registered");
    }

    session.run_checked(
        COMPONENT,
        &session
            .elevated(COMPONENT, &system.executable)?
            .args(["install", "-y", runtime.package.as_str()]),
    )?;
    Ok(())
}

/// The `.repo` definition for the vendor repository.
pub fn render_repo_file(runtime: &RuntimeSettings, distro: &str) -> String {
    format!(
        "[{name}]\n\
         name={name}\n\
         baseurl={url}/{distro}/$releasever/$basearch\n\
         enabled=1\n\
         gpgcheck=1\n\
         gpgkey={key}\n",
        name = runtime.repository_name,
        url = runtime.rpm_repository_url.trim_end_matches('/'),
        distro = distro,
        key = runtime.key_url,
    )
}

fn write_staged(staging: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let path = staging.join(file_name);
    cljup_fs::io::write_atomic(&path, content.as_bytes()).map_err(|e| Error::write(&path, e))?;
    Ok(path)
}

/// Copy a staged file into a root-owned location with mode 0644.
fn install_system_file(session: &Session, staged: &Path, target: &Path) -> Result<()> {
    let spec = session
        .elevated(COMPONENT, Path::new("install"))?
        .args(["-D", "-m", "0644"])
        .arg(staged)
        .arg(target);
    session.run_checked(COMPONENT, &spec)?;
    Ok(())
}
