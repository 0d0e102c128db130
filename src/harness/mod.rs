//! Benchmark lifecycle: one-time setup, warmup, timed passes, report
//!
//! The buffer is generated in [`BenchmarkHarness::setup`] and is fully built
//! before any pass runs. Every pass scans the same unmodified buffer.

mod logging;

pub use logging::init_logging;

use crate::buffer::{BufferGenerator, ByteBuffer};
use crate::config::{Config, ConfigError, HarnessConfig};
use crate::core::types::{BenchReport, ScanMode, ScanResult};
use crate::scanner::{ParallelScanner, WhitespaceScanner};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Owns the scan buffer and runs timed passes over it
pub struct BenchmarkHarness {
    buffer: ByteBuffer,
    text: Option<String>,
    mode: ScanMode,
    scanner: WhitespaceScanner,
    parallel: Option<ParallelScanner>,
    settings: HarnessConfig,
}

impl BenchmarkHarness {
    /// Generates the buffer described by `config` and prepares the scanners
    pub fn setup(config: &Config) -> ScanResult<Self> {
        let generator = BufferGenerator::new(config.buffer.length);
        let buffer = match config.buffer.seed {
            Some(seed) => generator.generate_seeded(seed)?,
            None => generator.generate()?,
        };
        Self::with_buffer(buffer, config)
    }

    /// Builds a harness around an existing buffer
    ///
    /// Parallel scanning over the chars view is rejected.
    pub fn with_buffer(buffer: ByteBuffer, config: &Config) -> ScanResult<Self> {
        let mode = config.scanner.mode;
        if config.scanner.parallel && mode == ScanMode::Chars {
            return Err(ConfigError::Invalid(
                "Parallel scanning is only supported in bytes mode".to_string(),
            )
            .into());
        }

        let text = match mode {
            ScanMode::Chars => Some(buffer.to_string_lossy().into_owned()),
            ScanMode::Bytes => None,
        };

        let parallel = if config.scanner.parallel {
            Some(ParallelScanner::from_config(&config.scanner)?)
        } else {
            None
        };

        info!(
            "Harness ready: {} bytes, mode={}, parallel={}",
            buffer.len(),
            mode.as_str(),
            parallel.is_some()
        );

        Ok(BenchmarkHarness {
            buffer,
            text,
            mode,
            scanner: WhitespaceScanner::new(),
            parallel,
            settings: config.harness.clone(),
        })
    }

    pub fn buffer(&self) -> &ByteBuffer {
        &self.buffer
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel.is_some()
    }

    /// One benchmark pass over the whole buffer
    pub fn run_once(&self) {
        match (&self.text, &self.parallel) {
            (Some(text), _) => self.scanner.scan_chars(text),
            (None, Some(parallel)) => parallel.scan(&self.buffer),
            (None, None) => self.scanner.scan(&self.buffer),
        }
    }

    /// Times `iterations` passes and returns the elapsed total
    pub fn measure(&self, iterations: u32) -> Duration {
        let start = Instant::now();
        for _ in 0..iterations {
            self.run_once();
        }
        start.elapsed()
    }

    /// Whitespace count over the scanned view, used as a check value
    pub fn whitespace_count(&self) -> usize {
        match (&self.text, &self.parallel) {
            (Some(text), _) => self.scanner.count_chars(text),
            (None, Some(parallel)) => parallel.count(&self.buffer),
            (None, None) => self.scanner.count(&self.buffer),
        }
    }

    /// Runs warmup passes, then the measured passes
    pub fn run(&self) -> BenchReport {
        if self.settings.warmup_iterations > 0 {
            let warmup = self.measure(self.settings.warmup_iterations);
            debug!(
                "Warmup: {} passes in {:?}",
                self.settings.warmup_iterations, warmup
            );
        }

        let iterations = self.settings.iterations;
        let total = self.measure(iterations);

        let report = BenchReport {
            mode: self.mode,
            parallel: self.is_parallel(),
            buffer_len: self.buffer.len(),
            iterations,
            total,
            whitespace: self.whitespace_count(),
        };

        info!(
            "Completed {} passes in {:?} ({:.3} ms/op)",
            iterations,
            total,
            report.millis_per_op()
        );
        report
    }
}

/// Logs a report in human-readable form
pub fn log_report(report: &BenchReport) {
    info!("char scanner benchmark ({} mode)", report.mode.as_str());
    info!("  buffer:      {} bytes", report.buffer_len);
    info!("  parallel:    {}", report.parallel);
    info!("  iterations:  {}", report.iterations);
    info!("  total:       {:?}", report.total);
    info!("  one pass:    {:.3} ms/op", report.millis_per_op());
    info!(
        "  throughput:  {:.1} MiB/s",
        report.throughput_mib_per_sec()
    );
    info!("  whitespace:  {}", report.whitespace);
}
