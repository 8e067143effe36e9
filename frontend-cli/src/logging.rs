//! Tracing setup for the `kp` binary.

use crate::error::{CliError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to `default_level`.
///
/// Stdout carries the user-facing text, so log lines never go there.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing::debug!("Tracing initialized with default level: {}", default_level);
    Ok(())
}
