//! Core type definitions for char-scanner
//!
//! This module contains the whitespace set, scan summaries, benchmark
//! reports and the error taxonomy shared by every other module.

mod error;
mod report;
mod whitespace;

// Re-export all public types
pub use error::{ScanError, ScanResult};
pub use report::{BenchReport, ReportFormat, ScanMode, ScanSummary};
pub use whitespace::{is_whitespace, WhitespaceSet, WHITESPACE_BYTES};
