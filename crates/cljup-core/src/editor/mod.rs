//! Editor integrations
//!
//! Each supported editor implements [`EditorIntegration`]. The configurator
//! walks them in order, asking before changing anything, and requires at
//! least one editor to end up set up for Clojure.

mod neovim;
mod vscode;

pub use neovim::Neovim;
pub use vscode::VsCode;

use crate::report::{Outcome, StepReport};
use crate::session::Session;
use crate::{Error, Result};

pub trait EditorIntegration {
    /// Short name used in prompts and the report.
    fn name(&self) -> &'static str;

    /// Whether the editor itself is installed.
    fn detect_installed(&self, session: &Session<'_>) -> bool;

    /// Whether the editor is already set up for Clojure.
    fn is_configured(&self, session: &Session<'_>) -> Result<bool>;

    /// Set the editor up. Returns [`Outcome::Skipped`] when the user
    /// declines a step the configuration depends on.
    fn configure(&self, session: &Session<'_>) -> Result<Outcome>;
}

/// The editors cljup knows how to configure, in prompt order.
pub fn builtin_editors() -> Vec<Box<dyn EditorIntegration>> {
    vec![Box::new(VsCode), Box::new(Neovim)]
}

/// Offer each installed editor for configuration.
///
/// Fails with [`Error::NoEditorConfigured`] when no editor was configured in
/// this run and none was configured before it.
pub fn configure_editors(
    session: &Session<'_>,
    editors: &[Box<dyn EditorIntegration>],
) -> Result<Vec<StepReport>> {
    let mut steps = Vec::with_capacity(editors.len());
    let mut satisfied = false;

    for editor in editors {
        let name = editor.name();

        if !editor.detect_installed(session) {
            tracing::debug!(editor = name, "editor not installed");
            steps.push(StepReport::new(name, Outcome::Skipped).with_detail("not installed"));
            continue;
        }

        if editor.is_configured(session)? {
            satisfied = true;
            steps.push(StepReport::new(name, Outcome::AlreadySatisfied));
            continue;
        }

        let question = format!("Configure {} for Clojure development?", name);
        if !session.prompter.confirm(&question, true)? {
            steps.push(StepReport::new(name, Outcome::Skipped).with_detail("declined"));
            continue;
        }

        let outcome = editor.configure(session)?;
        if outcome == Outcome::Configured {
            satisfied = true;
        }
        steps.push(StepReport::new(name, outcome));
    }

    if !satisfied {
        return Err(Error::NoEditorConfigured);
    }
    Ok(steps)
}
