//! Core module containing fundamental types for char-scanner
//!
//! This module provides the building blocks used throughout the harness:
//! the whitespace set, scan summaries, benchmark reports and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    is_whitespace, BenchReport, ReportFormat, ScanError, ScanMode, ScanResult, ScanSummary,
    WhitespaceSet, WHITESPACE_BYTES,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
