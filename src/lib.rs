//! char-scanner: whitespace scanning micro-benchmark harness
//!
//! A random buffer is generated once, then every benchmark pass classifies
//! each of its bytes against the set {space, tab, newline, carriage return}.

pub mod buffer;
pub mod config;
pub mod core;
pub mod harness;
pub mod scanner;

// Re-export main types
pub use buffer::{BufferGenerator, ByteBuffer};
pub use config::{Config, ConfigError, DEFAULT_BUFFER_LENGTH};
pub use harness::BenchmarkHarness;
pub use scanner::{ParallelScanner, WhitespaceScanner};

// Re-export core directly for full access
pub use crate::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_module_accessible() {
        assert_eq!(crate::core::VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(AUTHORS, env!("CARGO_PKG_AUTHORS"));
    }

    #[test]
    fn test_whitespace_reexport() {
        assert!(is_whitespace(b' '));
        assert!(!is_whitespace(b'x'));
        assert_eq!(WhitespaceSet.len(), WHITESPACE_BYTES.len());
    }

    #[test]
    fn test_scan_error_reexport() {
        let error = ScanError::random_source("no entropy");
        assert!(error.to_string().contains("Random source failed"));

        let result: ScanResult<u32> = Ok(42);
        assert!(matches!(result, Ok(42)));
    }

    #[test]
    fn test_pipeline_reexports() {
        let buffer = BufferGenerator::new(64).generate_seeded(3).unwrap();
        let scanner = WhitespaceScanner::new();
        let summary = scanner.summarize(&buffer);
        assert_eq!(summary.scanned, 64);
        assert_eq!(summary.whitespace, scanner.count(buffer.as_bytes()));
    }

    #[test]
    fn test_default_length() {
        assert_eq!(DEFAULT_BUFFER_LENGTH, 5_000_000);
        assert_eq!(Config::default().buffer.length, DEFAULT_BUFFER_LENGTH);
    }
}
