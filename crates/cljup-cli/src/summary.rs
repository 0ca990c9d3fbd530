//! End-of-run summary

use cljup_core::{BootstrapReport, Outcome};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};
use std::path::Path;

/// Print `report`, plus a reminder to reload the shell when PATH changed.
pub fn write_report(out: &mut impl Write, report: &BootstrapReport, rc_file: &Path) -> io::Result<()> {
    writeln!(out)?;
    let headline = if report.is_noop() {
        "environment already set up, nothing changed"
    } else {
        "environment ready"
    };
    writeln!(out, "{} {}", "cljup".green().bold(), headline.bold())?;
    writeln!(out, "  {:<16} {}", "package manager", report.package_manager)?;

    for step in &report.steps {
        match &step.detail {
            Some(detail) => writeln!(
                out,
                "  {:<16} {} {}",
                step.step,
                paint(step.outcome),
                format!("({})", detail).dimmed()
            )?,
            None => writeln!(out, "  {:<16} {}", step.step, paint(step.outcome))?,
        }
    }

    if report.outcome_of("toolchain") == Some(Outcome::Installed) {
        writeln!(out)?;
        writeln!(
            out,
            "Open a new shell or run {} to pick up the new PATH.",
            format!("source {}", rc_file.display()).cyan()
        )?;
    }
    Ok(())
}

fn paint(outcome: Outcome) -> ColoredString {
    let label = outcome.to_string();
    match outcome {
        Outcome::Installed | Outcome::Configured | Outcome::Replaced => label.green(),
        Outcome::AlreadySatisfied | Outcome::Kept => label.cyan(),
        Outcome::Skipped => label.yellow(),
    }
}
