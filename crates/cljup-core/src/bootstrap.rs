//! The bootstrap sequence

use crate::cleanup::Cleanup;
use crate::editor::{EditorIntegration, configure_editors};
use crate::platform::{SystemProfile, detect_platform};
use crate::report::{BootstrapReport, StepReport};
use crate::runtime::ensure_runtime_installed;
use crate::session::Session;
use crate::shared_config::ensure_shared_config;
use crate::toolchain::ensure_toolchain_installed;
use crate::{Error, Result};
use cljup_fs::RunLock;

/// Run the whole sequence.
///
/// Platform detection happens before anything is written. After that the
/// run lock is held and temporary directories are removed on the way out,
/// whether the sequence succeeds or fails.
pub fn run(session: &mut Session<'_>, editors: &[Box<dyn EditorIntegration>]) -> Result<BootstrapReport> {
    let system = detect_platform(&session.env)?;

    let _lock = acquire_run_lock(session)?;
    let _cleanup = Cleanup::from_settings(session.settings, &session.env).guard();

    run_steps(session, &system, editors)
}

/// Take the single-run lock. A concurrent run fails with
/// [`Error::AlreadyRunning`].
pub fn acquire_run_lock(session: &Session<'_>) -> Result<RunLock> {
    let path = session.env.expand(&session.settings.lock_path);
    RunLock::acquire(&path).map_err(|e| match e {
        cljup_fs::Error::LockHeld { path } => Error::AlreadyRunning { path },
        other => Error::Fs(other),
    })
}

/// Every step after platform detection, strictly in order. The first
/// failure ends the run; earlier steps are not rolled back.
pub fn run_steps(
    session: &mut Session<'_>,
    system: &SystemProfile,
    editors: &[Box<dyn EditorIntegration>],
) -> Result<BootstrapReport> {
    let mut report = BootstrapReport::new(system.package_manager);

    let runtime = ensure_runtime_installed(session, system)?;
    report.push(StepReport::new("runtime", runtime).with_detail(&session.settings.runtime.package));

    let toolchain = ensure_toolchain_installed(session)?;
    report.push(
        StepReport::new("toolchain", toolchain.outcome)
            .with_detail(toolchain.dir.display().to_string()),
    );
    report.toolchain_dir = Some(toolchain.dir.clone());

    for step in configure_editors(session, editors)? {
        report.push(step);
    }

    let shared = ensure_shared_config(session, &toolchain.dir)?;
    report.push(
        StepReport::new(session.settings.shared_config.file_name.as_str(), shared.file),
    );
    report.push(
        StepReport::new("shell function", shared.function)
            .with_detail(&session.settings.shared_config.function_block_id),
    );

    Ok(report)
}
