//! External command execution
//!
//! Every package-manager, installer-script and editor invocation goes
//! through [`CommandRunner`] so exit-status handling can be exercised with
//! canned results.

use crate::Result;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub envs: Vec<(String, OsString)>,
    /// Capture stdout/stderr instead of sharing the terminal.
    pub capture: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            capture: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Program file name, e.g. `apt-get` for `/usr/bin/apt-get`.
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.to_string_lossy().into_owned())
    }

    /// Shell-like rendering for logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program_name())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// `exit code N` or `signal` for error messages.
    pub fn describe_exit(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

/// Runs external commands synchronously.
///
/// Failing to start the program is an error; a non-zero exit is reported in
/// the returned [`CommandOutput`] for the caller to judge.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        tracing::debug!(command = %spec.display(), capture = spec.capture, "running");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        for (key, value) in &spec.envs {
            cmd.env(key, value);
        }

        if spec.capture {
            let output = cmd.stdin(Stdio::null()).output()?;
            Ok(CommandOutput {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        } else {
            let status = cmd.status()?;
            Ok(CommandOutput {
                code: status.code(),
                ..CommandOutput::default()
            })
        }
    }
}
