//! Run summary

use crate::platform::PackageManager;
use std::fmt;
use std::path::PathBuf;

/// How a step ended. Every variant is a successful end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Presence check passed; nothing was done.
    AlreadySatisfied,
    Installed,
    Configured,
    /// An existing file was left untouched at the user's request.
    Kept,
    /// An existing file was backed up and overwritten.
    Replaced,
    /// Not applicable, or declined by the user.
    Skipped,
}

impl Outcome {
    /// Whether the step changed anything on disk or in the system.
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Installed | Self::Configured | Self::Replaced)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AlreadySatisfied => "already satisfied",
            Self::Installed => "installed",
            Self::Configured => "configured",
            Self::Kept => "kept",
            Self::Replaced => "replaced",
            Self::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: String,
    pub outcome: Outcome,
    pub detail: Option<String>,
}

impl StepReport {
    pub fn new(step: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            step: step.into(),
            outcome,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Everything a completed run did, in step order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub package_manager: PackageManager,
    pub toolchain_dir: Option<PathBuf>,
    pub steps: Vec<StepReport>,
}

impl BootstrapReport {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            toolchain_dir: None,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: StepReport) {
        tracing::info!(step = %step.step, outcome = %step.outcome, "step finished");
        self.steps.push(step);
    }

    /// Outcome of the first step named `step`.
    pub fn outcome_of(&self, step: &str) -> Option<Outcome> {
        self.steps.iter().find(|s| s.step == step).map(|s| s.outcome)
    }

    /// Whether the run changed nothing.
    pub fn is_noop(&self) -> bool {
        !self.steps.iter().any(|s| s.outcome.is_change())
    }
}
