//! Interactive prompts
//!
//! Uses dialoguer for terminal-based questions.

use cljup_core::{Error, Prompter, Result};
use dialoguer::{Confirm, Input};

/// [`Prompter`] that asks on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn ask(&self, question: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }
}

fn prompt_error(error: dialoguer::Error) -> Error {
    let dialoguer::Error::IO(io) = error;
    if io.kind() == std::io::ErrorKind::Interrupted {
        return Error::Interrupted;
    }
    Error::Prompt {
        message: io.to_string(),
    }
}
