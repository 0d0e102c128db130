//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::core::types::{ScanError, ScanResult};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so stdout carries only the report.
pub fn init_logging(config: &LoggingConfig) -> ScanResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ScanError::Logging(e.to_string()))
}
