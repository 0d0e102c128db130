//! Scan input buffers
//!
//! A [`ByteBuffer`] is produced once by the [`BufferGenerator`] and is never
//! mutated afterwards; every scan borrows it read-only.

mod generator;

pub use generator::BufferGenerator;

use std::borrow::Cow;
use std::ops::Deref;

/// Immutable, fixed-length sequence of bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    /// Takes ownership of `bytes`; the buffer is frozen from here on
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        ByteBuffer {
            bytes: bytes.into_boxed_slice(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// String view of the buffer, invalid UTF-8 sequences become U+FFFD
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Hex dump of at most `n` leading bytes
    pub fn head_hex(&self, n: usize) -> String {
        hex::encode(&self.bytes[..n.min(self.bytes.len())])
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        ByteBuffer::from_vec(bytes)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        ByteBuffer::from_vec(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_accessors() {
        let buffer = ByteBuffer::from(vec![0x41, 0x20, 0x09, 0x5A, 0x0D]);
        assert_eq!(buffer.len(), 5);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.as_bytes(), &[0x41, 0x20, 0x09, 0x5A, 0x0D]);
        assert_eq!(&buffer[..2], &[0x41, 0x20]);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = ByteBuffer::from_vec(Vec::new());
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.to_string_lossy(), "");
        assert_eq!(buffer.head_hex(16), "");
    }

    #[test]
    fn test_string_view() {
        let buffer = ByteBuffer::from(&b"a b\tc"[..]);
        assert_eq!(buffer.to_string_lossy(), "a b\tc");

        // Invalid UTF-8 is replaced, not rejected
        let invalid = ByteBuffer::from(vec![b'x', 0xFF, b'y']);
        assert_eq!(invalid.to_string_lossy(), "x\u{FFFD}y");
    }

    #[test]
    fn test_head_hex() {
        let buffer = ByteBuffer::from(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(buffer.head_hex(2), "dead");
        assert_eq!(buffer.head_hex(100), "deadbeef");
    }
}
