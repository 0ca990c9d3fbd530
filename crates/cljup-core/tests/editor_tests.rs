#![cfg(unix)]

mod common;

use common::{Harness, RecordingRunner, ScriptedPrompter, exited, printed};
use cljup_core::{Error, Outcome, builtin_editors, configure_editors};
use pretty_assertions::assert_eq;

const NVIM_CONFIG: &str = ".config/nvim/init.vim";

fn outcomes(steps: &[cljup_core::StepReport]) -> Vec<(String, Outcome)> {
    steps.iter().map(|s| (s.step.clone(), s.outcome)).collect()
}

#[test]
fn declining_every_editor_is_no_editor_configured() {
    let mut h = Harness::new();
    h.home.stub_noop("code");
    h.home.stub_noop("nvim");
    h.prompter = ScriptedPrompter::confirming(&[false, false]);

    let err = configure_editors(&h.session(), &builtin_editors()).unwrap_err();

    assert!(matches!(err, Error::NoEditorConfigured));
    assert_eq!(err.exit_code(), 5);
    assert!(!h.runner.ran("--install-extension"));
    assert!(h.downloader.fetched().is_empty());
}

#[test]
fn no_installed_editor_is_no_editor_configured() {
    let h = Harness::new();

    let err = configure_editors(&h.session(), &builtin_editors()).unwrap_err();

    assert!(matches!(err, Error::NoEditorConfigured));
    assert!(h.prompter.questions().is_empty());
}

#[test]
fn accepting_one_editor_is_enough() {
    let mut h = Harness::new();
    h.home.stub_noop("code");
    h.home.stub_noop("nvim");
    h.prompter = ScriptedPrompter::confirming(&[true, false]);

    let steps = configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(
        outcomes(&steps),
        vec![
            ("vscode".to_string(), Outcome::Configured),
            ("neovim".to_string(), Outcome::Skipped)
        ]
    );
    assert!(h.runner.ran("code --install-extension betterthantomorrow.calva"));
    assert!(h.runner.ran("code --install-extension borkdude.clj-kondo"));
    h.home.assert_home_file_exists(".config/calva/scripts");
    h.home.assert_home_file_absent(NVIM_CONFIG);
}

#[test]
fn only_missing_extensions_are_installed() {
    let mut h = Harness::new();
    h.home.stub_noop("code");
    h.runner = RecordingRunner::new()
        .respond("--list-extensions", printed("BetterThanTomorrow.calva\nms-python.python\n"));
    h.prompter = ScriptedPrompter::confirming(&[true]);

    configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert!(!h.runner.ran("--install-extension betterthantomorrow.calva"));
    assert!(h.runner.ran("--install-extension borkdude.clj-kondo"));
}

#[test]
fn already_configured_editor_satisfies_without_prompting() {
    let mut h = Harness::new();
    h.home.stub_noop("code");
    h.home.write_home_file(".config/calva/scripts/.keep", "");
    h.runner = RecordingRunner::new().respond(
        "--list-extensions",
        printed("betterthantomorrow.calva\nborkdude.clj-kondo\n"),
    );

    let steps = configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(steps[0].outcome, Outcome::AlreadySatisfied);
    assert_eq!(steps[1].outcome, Outcome::Skipped);
    assert_eq!(steps[1].detail.as_deref(), Some("not installed"));
    assert!(h.prompter.questions().is_empty());
}

#[test]
fn failed_extension_install_aborts() {
    let mut h = Harness::new();
    h.home.stub_noop("code");
    h.home.stub_noop("nvim");
    h.runner = RecordingRunner::new().respond("--install-extension", exited(1));
    h.prompter = ScriptedPrompter::confirming(&[true, true]);

    let err = configure_editors(&h.session(), &builtin_editors()).unwrap_err();

    assert!(matches!(&err, Error::InstallFailed { component, .. } if component == "vscode"));
    assert_eq!(h.prompter.unused_confirms(), 1);
}

#[test]
fn neovim_fresh_config_is_downloaded_and_plugins_installed() {
    let mut h = Harness::new();
    h.home.stub_noop("nvim");
    h.prompter = ScriptedPrompter::confirming(&[true]);

    let steps = configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(steps[1].outcome, Outcome::Configured);
    assert_eq!(h.home.read_home_file(NVIM_CONFIG), common::NEOVIM_CONFIG);
    assert!(h.runner.ran("nvim --headless +PlugInstall +qall"));
    assert_eq!(h.prompter.questions().len(), 1);
}

#[test]
fn neovim_backup_declined_leaves_config_untouched() {
    let mut h = Harness::new();
    h.home.stub_noop("nvim");
    let original = "set number\n\" my own setup\n";
    h.home.write_home_file(NVIM_CONFIG, original);
    h.prompter = ScriptedPrompter::confirming(&[true, false]);

    let err = configure_editors(&h.session(), &builtin_editors()).unwrap_err();

    assert!(matches!(err, Error::NoEditorConfigured));
    assert_eq!(h.home.read_home_file(NVIM_CONFIG), original);
    h.home.assert_home_file_absent(".config/nvim/init.vim.bak");
    assert!(h.runner.commands().is_empty());
}

#[test]
fn neovim_backup_accepted_keeps_copy() {
    let mut h = Harness::new();
    h.home.stub_noop("nvim");
    h.home.write_home_file(NVIM_CONFIG, "set number\n");
    h.prompter = ScriptedPrompter::confirming(&[true, true]);

    let steps = configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(steps[1].outcome, Outcome::Configured);
    assert_eq!(h.home.read_home_file(".config/nvim/init.vim.bak"), "set number\n");
    assert_eq!(h.home.read_home_file(NVIM_CONFIG), common::NEOVIM_CONFIG);
}

#[test]
fn neovim_with_conjure_counts_as_configured() {
    let h = Harness::new();
    h.home.stub_noop("nvim");
    h.home.write_home_file(NVIM_CONFIG, "Plug 'Olical/conjure'\n");

    let steps = configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(steps[1].outcome, Outcome::AlreadySatisfied);
    assert!(h.downloader.fetched().is_empty());
}

#[test]
fn neovim_checksum_mismatch_keeps_existing_config() {
    let mut h = Harness::new();
    h.home.stub_noop("nvim");
    let original = "set number\n\" my own setup\n";
    h.home.write_home_file(NVIM_CONFIG, original);
    h.settings.editors.neovim.config_sha256 = Some("0".repeat(64));
    h.prompter = ScriptedPrompter::confirming(&[true, true]);

    let err = configure_editors(&h.session(), &builtin_editors()).unwrap_err();

    assert!(matches!(err, Error::DownloadFailed { .. }));
    assert_eq!(h.home.read_home_file(NVIM_CONFIG), original);
    h.home.assert_home_file_absent(".config/nvim/init.vim.bak");
    h.home.assert_home_file_absent(".cljup/tmp/init.vim");
    assert!(!h.runner.ran("PlugInstall"));
}

#[test]
fn neovim_config_is_staged_before_install() {
    let mut h = Harness::new();
    h.home.stub_noop("nvim");
    h.prompter = ScriptedPrompter::confirming(&[true]);

    configure_editors(&h.session(), &builtin_editors()).unwrap();

    assert_eq!(h.home.read_home_file(".cljup/tmp/init.vim"), common::NEOVIM_CONFIG);
    assert_eq!(h.home.read_home_file(NVIM_CONFIG), common::NEOVIM_CONFIG);
}
