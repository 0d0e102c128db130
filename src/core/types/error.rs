//! Custom error types for char-scanner

use crate::config::ConfigError;
use std::fmt;
use thiserror::Error;

/// Main error type for harness setup
///
/// Scanning itself never fails; every variant here comes from one-time setup.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to allocate {requested} bytes for scan buffer: {reason}")]
    Allocation { requested: usize, reason: String },

    #[error("Random source failed: {0}")]
    RandomSource(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result type alias for harness operations
pub type ScanResult<T> = Result<T, ScanError>;

impl ScanError {
    /// Creates an allocation error for a buffer of `requested` bytes
    pub fn allocation(requested: usize, reason: impl fmt::Display) -> Self {
        ScanError::Allocation {
            requested,
            reason: reason.to_string(),
        }
    }

    /// Creates a random source error
    pub fn random_source(reason: impl fmt::Display) -> Self {
        ScanError::RandomSource(reason.to_string())
    }

    /// Creates a thread pool error
    pub fn thread_pool(reason: impl fmt::Display) -> Self {
        ScanError::ThreadPool(reason.to_string())
    }

    /// Returns true for errors that make the harness unable to proceed
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScanError::Allocation { .. } | ScanError::RandomSource(_)
        )
    }
}
