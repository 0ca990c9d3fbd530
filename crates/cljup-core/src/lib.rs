//! The idempotent Java and Clojure bootstrap sequence
//!
//! This crate decides what to install, where, and in what order:
//!
//! - **Platform detection**: pick the system package manager or fail before touching anything
//! - **Runtime**: install a Java runtime through the package manager, registering the vendor repository first
//! - **Toolchain**: install the Clojure tools and put them on PATH through the run-commands file
//! - **Editors**: configure VS Code and/or Neovim with the user's consent
//! - **Shared config**: install `deps.edn` and a shell helper function
//! - **Cleanup**: remove temporary directories however the run ends
//!
//! Every side effect goes through a collaborator trait ([`CommandRunner`],
//! [`Prompter`], [`ProfileEditor`], [`Downloader`]) bundled in a [`Session`],
//! so each step can run against scripted answers and canned command results.
//!
//! ```text
//!                   cljup-cli
//!                       |
//!                  cljup-core
//!                   |       |
//!          cljup-blocks   cljup-fs
//! ```

pub mod backup;
pub mod bootstrap;
pub mod cleanup;
pub mod editor;
pub mod env;
pub mod error;
pub mod fetch;
pub mod platform;
pub mod profile;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod shared_config;
pub mod toolchain;

pub use backup::{BackupArtifact, backup_file};
pub use bootstrap::{acquire_run_lock, run, run_steps};
pub use cleanup::{Cleanup, CleanupGuard};
pub use editor::{EditorIntegration, Neovim, VsCode, builtin_editors, configure_editors};
pub use env::{HostEnv, ShellKind};
pub use error::{Error, INTERRUPTED_EXIT_CODE, Result};
pub use fetch::{Downloader, HttpDownloader, download_verified};
pub use platform::{OsRelease, PackageManager, SystemProfile, detect_platform};
pub use profile::{ProfileEditor, RcFileEditor};
pub use prompt::Prompter;
pub use report::{BootstrapReport, Outcome, StepReport};
pub use runner::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
pub use runtime::ensure_runtime_installed;
pub use session::Session;
pub use settings::Settings;
pub use shared_config::{SharedConfigOutcome, ensure_shared_config, ensure_shell_function};
pub use toolchain::{DirectoryChoice, ToolchainInstall, ensure_toolchain_installed};
