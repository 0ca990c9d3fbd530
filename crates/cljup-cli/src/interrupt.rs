//! Interrupt handling
//!
//! Ctrl+C still removes the temporary directories. The signal is awaited on a
//! helper thread with its own single-threaded runtime so the bootstrap itself
//! stays synchronous.

use cljup_core::{Cleanup, INTERRUPTED_EXIT_CODE};
use colored::Colorize;

/// Run `cleanup` and exit when the process is interrupted.
pub fn install_handler(cleanup: Cleanup) {
    let spawned = std::thread::Builder::new()
        .name("cljup-interrupt".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::warn!("cannot listen for interrupts: {e}");
                    return;
                }
            };

            if let Err(e) = runtime.block_on(tokio::signal::ctrl_c()) {
                tracing::warn!("cannot listen for interrupts: {e}");
                return;
            }

            eprintln!();
            eprintln!("{}: interrupted, cleaning up", "warning".yellow().bold());
            cleanup.run();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        });

    if let Err(e) = spawned {
        tracing::warn!("cannot listen for interrupts: {e}");
    }
}
