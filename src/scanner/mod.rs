//! Whitespace scanning over byte buffers
//!
//! This module provides:
//! - The benchmark pass, which classifies every byte and discards the answer
//! - Reusable scans that return classifications, counts or positions
//! - A character scan over the decoded string view
//! - A rayon-backed parallel scanner over disjoint chunks

pub mod parallel;

pub use crate::core::types::is_whitespace;
pub use parallel::ParallelScanner;

use crate::core::types::{ScanSummary, WhitespaceSet};
use std::hint::black_box;

/// Sequential whitespace scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceScanner {
    set: WhitespaceSet,
}

impl WhitespaceScanner {
    pub fn new() -> Self {
        WhitespaceScanner {
            set: WhitespaceSet::new(),
        }
    }

    /// Benchmark pass: visits every byte once in ascending order and
    /// classifies it. The result is discarded.
    #[inline(never)]
    pub fn scan(&self, bytes: &[u8]) {
        for &byte in bytes {
            black_box(self.set.contains(byte));
        }
    }

    /// Benchmark pass over the characters of a decoded string
    #[inline(never)]
    pub fn scan_chars(&self, text: &str) {
        for ch in text.chars() {
            black_box(self.set.contains_char(ch));
        }
    }

    /// Per-byte classification, same length as the input
    pub fn classify(&self, bytes: &[u8]) -> Vec<bool> {
        bytes.iter().map(|&b| self.set.contains(b)).collect()
    }

    /// Number of whitespace bytes
    pub fn count(&self, bytes: &[u8]) -> usize {
        bytes.iter().filter(|&&b| self.set.contains(b)).count()
    }

    /// Number of whitespace characters in a decoded string
    pub fn count_chars(&self, text: &str) -> usize {
        text.chars().filter(|&c| self.set.contains_char(c)).count()
    }

    /// Indices of every whitespace byte, ascending
    pub fn positions(&self, bytes: &[u8]) -> Vec<usize> {
        bytes
            .iter()
            .enumerate()
            .filter(|&(_, &b)| self.set.contains(b))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn summarize(&self, bytes: &[u8]) -> ScanSummary {
        ScanSummary::new(bytes.len(), self.count(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: [u8; 5] = [0x41, 0x20, 0x09, 0x5A, 0x0D];

    #[test]
    fn test_classify_sample() {
        let scanner = WhitespaceScanner::new();
        assert_eq!(
            scanner.classify(&SAMPLE),
            vec![false, true, true, false, true]
        );
    }

    #[test]
    fn test_count_and_positions() {
        let scanner = WhitespaceScanner::new();
        assert_eq!(scanner.count(&SAMPLE), 3);
        assert_eq!(scanner.positions(&SAMPLE), vec![1, 2, 4]);
        assert_eq!(scanner.summarize(&SAMPLE), ScanSummary::new(5, 3));
    }

    #[test]
    fn test_empty_input() {
        let scanner = WhitespaceScanner::new();
        scanner.scan(&[]);
        scanner.scan_chars("");
        assert!(scanner.classify(&[]).is_empty());
        assert_eq!(scanner.count(&[]), 0);
        assert!(scanner.positions(&[]).is_empty());
        assert_eq!(scanner.summarize(&[]), ScanSummary::default());
    }

    #[test]
    fn test_scan_leaves_input_untouched() {
        let scanner = WhitespaceScanner::new();
        let data = b"line one\r\nline\ttwo\n".to_vec();
        let before = scanner.classify(&data);

        scanner.scan(&data);
        scanner.scan(&data);

        assert_eq!(scanner.classify(&data), before);
        assert_eq!(data, b"line one\r\nline\ttwo\n".to_vec());
    }

    #[test]
    fn test_all_byte_values() {
        let scanner = WhitespaceScanner::new();
        let all: Vec<u8> = (0u8..=255).collect();
        assert_eq!(scanner.positions(&all), vec![0x09, 0x0A, 0x0D, 0x20]);
    }

    #[test]
    fn test_chars() {
        let scanner = WhitespaceScanner::new();
        assert_eq!(scanner.count_chars("a b\tc\r\nd"), 4);
        // Non-ASCII spaces are not members
        assert_eq!(scanner.count_chars("\u{00A0}\u{2003}\u{FFFD}"), 0);
    }

    #[test]
    fn test_chars_match_bytes_for_ascii() {
        let scanner = WhitespaceScanner::new();
        let text = "The quick\tbrown fox\r\njumps over\nthe lazy dog ";
        assert_eq!(scanner.count_chars(text), scanner.count(text.as_bytes()));
    }
}
