//! cljup CLI
//!
//! Installs a Java runtime and the Clojure CLI tools, then configures an
//! editor. Every step checks before it acts, so the tool is safe to re-run.

mod cli;
mod error;
mod interactive;
mod interrupt;
mod logging;
mod summary;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use cljup_core::{
    Cleanup, HostEnv, HttpDownloader, ProfileEditor, RcFileEditor, Session, Settings,
    SystemRunner, builtin_editors,
};
use error::Result;
use interactive::DialoguerPrompter;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref())?;
    let env = HostEnv::capture()?;

    interrupt::install_handler(Cleanup::from_settings(&settings, &env));

    let runner = SystemRunner;
    let prompter = DialoguerPrompter;
    let downloader = HttpDownloader::new()?;
    let profile = RcFileEditor::new(env.rc_file());
    tracing::debug!(rc = %profile.path().display(), home = %env.home.display(), "host environment");

    let mut session = Session {
        env,
        settings: &settings,
        runner: &runner,
        prompter: &prompter,
        downloader: &downloader,
        profile: &profile,
    };
    let report = cljup_core::run(&mut session, &builtin_editors())?;

    summary::write_report(&mut std::io::stdout().lock(), &report, profile.path())?;
    Ok(())
}
