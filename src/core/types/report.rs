//! Scan summaries and benchmark reports

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which view of the buffer the benchmark walks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Raw bytes of the buffer
    #[default]
    Bytes,
    /// Characters of the lossy UTF-8 decoding of the buffer
    Chars,
}

impl ScanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Bytes => "bytes",
            ScanMode::Chars => "chars",
        }
    }
}

/// How the binary emits its final report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Totals from a counting scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub scanned: usize,
    pub whitespace: usize,
}

impl ScanSummary {
    pub fn new(scanned: usize, whitespace: usize) -> Self {
        ScanSummary {
            scanned,
            whitespace,
        }
    }

    pub fn non_whitespace(&self) -> usize {
        self.scanned.saturating_sub(self.whitespace)
    }

    /// Fraction of scanned units that were whitespace; 0.0 for an empty scan
    pub fn ratio(&self) -> f64 {
        if self.scanned == 0 {
            0.0
        } else {
            self.whitespace as f64 / self.scanned as f64
        }
    }

    /// Combines the summaries of two disjoint ranges
    pub fn merge(self, other: ScanSummary) -> ScanSummary {
        ScanSummary {
            scanned: self.scanned + other.scanned,
            whitespace: self.whitespace + other.whitespace,
        }
    }
}

/// Timing results of a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    pub mode: ScanMode,
    pub parallel: bool,
    pub buffer_len: usize,
    pub iterations: u32,
    pub total: Duration,
    pub whitespace: usize,
}

impl BenchReport {
    /// Mean time of one pass over the buffer
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            Duration::ZERO
        } else {
            self.total / self.iterations
        }
    }

    /// Milliseconds per pass
    pub fn millis_per_op(&self) -> f64 {
        self.per_iteration().as_secs_f64() * 1000.0
    }

    /// Bytes scanned per second across all iterations
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            (self.buffer_len as f64 * self.iterations as f64) / secs
        }
    }

    /// Throughput in MiB/s
    pub fn throughput_mib_per_sec(&self) -> f64 {
        self.throughput_bytes_per_sec() / (1024.0 * 1024.0)
    }
}
