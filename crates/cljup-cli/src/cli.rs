//! Command-line flags

use clap::Parser;
use std::path::PathBuf;

/// cljup - Set up Java, the Clojure CLI tools and an editor, safely re-runnable
#[derive(Parser, Debug)]
#[command(name = "cljup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file overriding package names, URLs and paths
    ///
    /// Defaults to $CLJUP_CONFIG, then ~/.config/cljup/config.toml.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
