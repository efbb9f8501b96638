//! Logging initialization
//!
//! Check results are the program's stdout; the tracing subscriber writes
//! diagnostics to stderr so the two streams stay separable.

use tracing_subscriber::EnvFilter;

use crate::config;

/// Initialize the global tracing subscriber.
///
/// The filter comes from `MYAI_SMOKE_LOG_LEVEL` (default `info`); an invalid
/// filter string falls back to `info` rather than aborting the run.
pub fn init() -> anyhow::Result<()> {
    let level = config::env_or("MYAI_SMOKE_LOG_LEVEL", "info");
    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
