//! Configuration validator for char-scanner
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{BufferConfig, Config, ConfigError, HarnessConfig, LoggingConfig, ScannerConfig};
use crate::core::types::ScanMode;
use tracing::warn;

/// Largest buffer the harness will generate (1 GiB)
pub const MAX_BUFFER_LENGTH: usize = 1 << 30;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_buffer(&config.buffer)?;
        Self::validate_scanner(&config.scanner)?;
        Self::validate_harness(&config.harness)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates buffer configuration
    fn validate_buffer(buffer: &BufferConfig) -> Result<(), ConfigError> {
        if buffer.length == 0 {
            return Err(ConfigError::Invalid(
                "Buffer length must be greater than 0".to_string(),
            ));
        }

        if buffer.length > MAX_BUFFER_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "Buffer length cannot exceed {} bytes",
                MAX_BUFFER_LENGTH
            )));
        }

        Ok(())
    }

    /// Validates scanner configuration
    fn validate_scanner(scanner: &ScannerConfig) -> Result<(), ConfigError> {
        if scanner.max_threads == 0 {
            return Err(ConfigError::Invalid(
                "Scanner threads must be at least 1".to_string(),
            ));
        }

        if scanner.max_threads > 128 {
            return Err(ConfigError::Invalid(
                "Scanner threads cannot exceed 128".to_string(),
            ));
        }

        if scanner.chunk_size == 0 || !scanner.chunk_size.is_power_of_two() {
            return Err(ConfigError::Invalid(
                "Chunk size must be a power of 2".to_string(),
            ));
        }

        if scanner.parallel && scanner.mode == ScanMode::Chars {
            return Err(ConfigError::Invalid(
                "Parallel scanning is only supported in bytes mode".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates harness configuration
    fn validate_harness(harness: &HarnessConfig) -> Result<(), ConfigError> {
        if harness.iterations == 0 {
            return Err(ConfigError::Invalid(
                "Harness iterations must be at least 1".to_string(),
            ));
        }

        if harness.warmup_iterations > harness.iterations {
            warn!(
                "Warmup iterations ({}) exceed measured iterations ({})",
                harness.warmup_iterations, harness.iterations
            );
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
