//! User interaction seam

use crate::Result;

/// Asks the user questions.
///
/// Installers never read the terminal themselves; the CLI supplies an
/// interactive implementation and tests supply scripted answers.
pub trait Prompter {
    /// Yes/no question. `default` is the answer on a bare Enter.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Free-text question. `default` is the answer on a bare Enter.
    fn ask(&self, question: &str, default: &str) -> Result<String>;
}
