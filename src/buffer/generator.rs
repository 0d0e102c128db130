//! Random buffer generation

use super::ByteBuffer;
use crate::core::types::{ScanError, ScanResult};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Number of leading bytes shown in debug logs
const HEAD_PREVIEW_LEN: usize = 16;

/// Produces a buffer of random bytes of a fixed length
#[derive(Debug, Clone, Copy)]
pub struct BufferGenerator {
    length: usize,
}

impl BufferGenerator {
    /// Creates a generator for buffers of `length` bytes
    pub fn new(length: usize) -> Self {
        BufferGenerator { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Fills a buffer from the operating system's cryptographic source
    pub fn generate(&self) -> ScanResult<ByteBuffer> {
        info!("Generating {} byte buffer from OS entropy", self.length);
        self.generate_with(&mut OsRng)
    }

    /// Fills a buffer from a ChaCha8 stream seeded with `seed`.
    ///
    /// The same seed always yields the same bytes.
    pub fn generate_seeded(&self, seed: u64) -> ScanResult<ByteBuffer> {
        info!("Generating {} byte buffer from seed {}", self.length, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Fills a buffer from any random source
    pub fn generate_with<R: RngCore + ?Sized>(&self, rng: &mut R) -> ScanResult<ByteBuffer> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(self.length)
            .map_err(|e| ScanError::allocation(self.length, e))?;
        bytes.resize(self.length, 0);

        rng.try_fill_bytes(&mut bytes)
            .map_err(ScanError::random_source)?;

        let buffer = ByteBuffer::from_vec(bytes);
        debug!(
            len = buffer.len(),
            head = %buffer.head_hex(HEAD_PREVIEW_LEN),
            "Buffer ready"
        );
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Random source whose entropy is always unavailable
    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy unavailable"))
        }
    }

    #[test]
    fn test_generated_length() {
        for len in [0usize, 1, 7, 4096, 100_003] {
            let buffer = BufferGenerator::new(len).generate_seeded(1).unwrap();
            assert_eq!(buffer.len(), len);
        }
    }

    #[test]
    fn test_os_entropy_length() {
        let buffer = BufferGenerator::new(1024).generate().unwrap();
        assert_eq!(buffer.len(), 1024);
    }

    #[test]
    fn test_zero_length() {
        let buffer = BufferGenerator::new(0).generate().unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = BufferGenerator::new(10_000);
        let a = generator.generate_seeded(42).unwrap();
        let b = generator.generate_seeded(42).unwrap();
        let c = generator.generate_seeded(43).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_seeded_covers_byte_range() {
        let buffer = BufferGenerator::new(100_000).generate_seeded(9).unwrap();
        let mut seen = [false; 256];
        for &b in buffer.as_bytes() {
            seen[b as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_source_failure() {
        let result = BufferGenerator::new(64).generate_with(&mut DeadRng);
        match result {
            Err(ScanError::RandomSource(reason)) => {
                assert!(reason.contains("entropy unavailable"));
            }
            other => panic!("Expected RandomSource error, got {:?}", other),
        }
    }

    #[test]
    fn test_allocation_failure() {
        let result = BufferGenerator::new(usize::MAX).generate_seeded(0);
        match result {
            Err(ScanError::Allocation { requested, .. }) => assert_eq!(requested, usize::MAX),
            other => panic!("Expected Allocation error, got {:?}", other),
        }
    }
}
