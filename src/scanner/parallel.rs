//! Parallel whitespace scanning
//!
//! The buffer is split into disjoint contiguous chunks, each chunk is scanned
//! on a worker of a dedicated rayon pool, and per-chunk results are joined.
//! Bytes are classified independently, so the join is the only coordination.

use super::WhitespaceScanner;
use crate::config::ScannerConfig;
use crate::core::types::{is_whitespace, ScanError, ScanResult, ScanSummary};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

/// Chunked scanner running on its own thread pool
pub struct ParallelScanner {
    pool: ThreadPool,
    chunk_size: usize,
    scanner: WhitespaceScanner,
}

impl ParallelScanner {
    /// Builds a pool of `threads` workers scanning `chunk_size` byte chunks
    pub fn new(threads: usize, chunk_size: usize) -> ScanResult<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("ws-scan-{}", i))
            .build()
            .map_err(ScanError::thread_pool)?;

        debug!(
            "Parallel scanner ready: {} threads, {} byte chunks",
            pool.current_num_threads(),
            chunk_size
        );

        Ok(ParallelScanner {
            pool,
            chunk_size: chunk_size.max(1),
            scanner: WhitespaceScanner::new(),
        })
    }

    pub fn from_config(config: &ScannerConfig) -> ScanResult<Self> {
        Self::new(config.max_threads, config.chunk_size)
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Benchmark pass split across the pool
    pub fn scan(&self, bytes: &[u8]) {
        let scanner = self.scanner;
        let chunk_size = self.chunk_size;
        self.pool.install(|| {
            bytes
                .par_chunks(chunk_size)
                .for_each(|chunk| scanner.scan(chunk))
        });
    }

    /// Number of whitespace bytes, summed over chunks
    pub fn count(&self, bytes: &[u8]) -> usize {
        let scanner = self.scanner;
        let chunk_size = self.chunk_size;
        self.pool.install(|| {
            bytes
                .par_chunks(chunk_size)
                .map(|chunk| scanner.count(chunk))
                .sum()
        })
    }

    /// Per-byte classification in input order
    pub fn classify(&self, bytes: &[u8]) -> Vec<bool> {
        let chunk_size = self.chunk_size;
        self.pool.install(|| {
            bytes
                .par_iter()
                .with_min_len(chunk_size)
                .map(|&b| is_whitespace(b))
                .collect()
        })
    }

    pub fn summarize(&self, bytes: &[u8]) -> ScanSummary {
        let scanner = self.scanner;
        let chunk_size = self.chunk_size;
        self.pool.install(|| {
            bytes
                .par_chunks(chunk_size)
                .map(|chunk| scanner.summarize(chunk))
                .reduce(ScanSummary::default, ScanSummary::merge)
        })
    }
}
