//! Logging setup for the CLI.
//!
//! Logs go to stderr so rendered output can be piped from stdout.
//! `RUST_LOG` takes precedence over the `--verbose` default.

use std::io;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
