use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber writing compact lines to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `--verbose`. Failure to initialise is reported and otherwise ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .without_time()
        .compact();

    if let Err(e) = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
    {
        eprintln!("warning: logging unavailable: {e}");
    }
}
