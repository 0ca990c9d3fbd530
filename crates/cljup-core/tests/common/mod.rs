//! Scripted collaborators for bootstrap tests.

#![allow(dead_code)]

use cljup_core::{
    CommandOutput, CommandRunner, CommandSpec, Downloader, Error, HostEnv, Prompter,
    ProfileEditor, RcFileEditor, Result, Session, Settings,
};
use cljup_test_utils::TestHome;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};

pub const INSTALLER_SCRIPT: &str = "#!/bin/sh\nexit 0\n";
pub const NEOVIM_CONFIG: &str = "call plug#begin()\nPlug 'Olical/conjure'\ncall plug#end()\n";
pub const SHARED_CONFIG: &str = "{:aliases {:repl/rebel {:extra-deps {}}}}\n";
pub const SIGNING_KEY: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n";

/// Answers questions from a script, falling back to each question's default.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    answers: RefCell<VecDeque<String>>,
    questions: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer yes/no questions in order.
    pub fn confirming(answers: &[bool]) -> Self {
        let prompter = Self::new();
        prompter.confirms.borrow_mut().extend(answers.iter().copied());
        prompter
    }

    /// Queue a free-text answer.
    pub fn answering(self, answer: &str) -> Self {
        self.answers.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn unused_confirms(&self) -> usize {
        self.confirms.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }

    fn ask(&self, question: &str, default: &str) -> Result<String> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }
}

/// Records every command and answers with canned results.
///
/// Commands whose rendering contains a registered pattern get that
/// pattern's output; everything else succeeds silently.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    rules: Vec<(String, CommandOutput)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, pattern: &str, output: CommandOutput) -> Self {
        self.rules.push((pattern.to_string(), output));
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(CommandSpec::display).collect()
    }

    /// Whether any command line contains `pattern`.
    pub fn ran(&self, pattern: &str) -> bool {
        self.commands().iter().any(|c| c.contains(pattern))
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        let display = spec.display();
        let output = self
            .rules
            .iter()
            .find(|(pattern, _)| display.contains(pattern.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| exited(0));
        Ok(output)
    }
}

pub fn exited(code: i32) -> CommandOutput {
    CommandOutput {
        code: Some(code),
        ..CommandOutput::default()
    }
}

pub fn printed(stdout: &str) -> CommandOutput {
    CommandOutput {
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn printed_err(stderr: &str) -> CommandOutput {
    CommandOutput {
        code: Some(0),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

/// Serves fixed content per URL; unknown URLs fail like a 404.
#[derive(Default)]
pub struct StaticDownloader {
    files: HashMap<String, String>,
    fetched: RefCell<Vec<String>>,
}

impl StaticDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves every download the default settings name.
    pub fn serving_defaults(settings: &Settings) -> Self {
        Self::new()
            .with(&settings.runtime.key_url, SIGNING_KEY)
            .with(&settings.toolchain.installer_url(), INSTALLER_SCRIPT)
            .with(&settings.editors.neovim.config_url, NEOVIM_CONFIG)
            .with(&settings.shared_config.url, SHARED_CONFIG)
    }

    pub fn with(mut self, url: &str, content: &str) -> Self {
        self.files.insert(url.to_string(), content.to_string());
        self
    }

    pub fn without(mut self, url: &str) -> Self {
        self.files.remove(url);
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }
}

impl Downloader for StaticDownloader {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        self.fetched.borrow_mut().push(url.to_string());
        let Some(content) = self.files.get(url) else {
            return Err(Error::download(url, "HTTP status client error (404 Not Found)"));
        };
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(dest, content)?;
        Ok(())
    }
}

/// A run-commands file kept in memory.
pub struct MemoryProfile {
    path: PathBuf,
    content: RefCell<String>,
}

impl MemoryProfile {
    pub fn new(initial: &str) -> Self {
        Self {
            path: PathBuf::from("/nonexistent/.bashrc"),
            content: RefCell::new(initial.to_string()),
        }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl ProfileEditor for MemoryProfile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn has_marker(&self, id: &str) -> Result<bool> {
        Ok(cljup_blocks::has_block(&self.content.borrow(), id))
    }

    fn contains(&self, needle: &str) -> Result<bool> {
        Ok(self.content.borrow().contains(needle))
    }

    fn append_block(&self, id: &str, text: &str) -> Result<bool> {
        if self.has_marker(id)? {
            return Ok(false);
        }
        let addition = cljup_blocks::append_text(&self.content.borrow(), id, text);
        self.content.borrow_mut().push_str(&addition);
        Ok(true)
    }
}

/// A fake home plus scripted collaborators, ready to build sessions from.
pub struct Harness {
    pub home: TestHome,
    pub settings: Settings,
    pub runner: RecordingRunner,
    pub prompter: ScriptedPrompter,
    pub downloader: StaticDownloader,
    pub profile: RcFileEditor,
}

impl Harness {
    /// bash user, no privilege escalation, every default URL served.
    pub fn new() -> Self {
        let home = TestHome::new();
        let settings = Settings {
            elevate: String::new(),
            ..Settings::default()
        };
        let downloader = StaticDownloader::serving_defaults(&settings);
        let profile = RcFileEditor::new(home.home().join(".bashrc"));
        Self {
            home,
            settings,
            runner: RecordingRunner::new(),
            prompter: ScriptedPrompter::new(),
            downloader,
            profile,
        }
    }

    pub fn env(&self) -> HostEnv {
        HostEnv {
            home: self.home.home(),
            shell: Some("/bin/bash".to_string()),
            search_path: self.home.search_path(),
            system_root: self.home.system_root(),
            cwd: self.home.home(),
        }
    }

    pub fn session(&self) -> Session<'_> {
        Session {
            env: self.env(),
            settings: &self.settings,
            runner: &self.runner,
            prompter: &self.prompter,
            downloader: &self.downloader,
            profile: &self.profile,
        }
    }

    /// Same as [`Harness::session`] but editing `profile` instead of `~/.bashrc`.
    pub fn session_with_profile<'a>(&'a self, profile: &'a dyn ProfileEditor) -> Session<'a> {
        Session {
            profile,
            ..self.session()
        }
    }

    pub fn rc_content(&self) -> String {
        std::fs::read_to_string(self.profile.path()).unwrap_or_default()
    }
}
