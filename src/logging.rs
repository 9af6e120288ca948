//! Logging setup
//!
//! Structured logging via the `tracing` crate. Output goes to stderr so
//! stdout stays clean for the report.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// The level comes from `RUST_LOG` when set, otherwise `warn` (or `debug`
/// with `verbose`). Call once per process.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
