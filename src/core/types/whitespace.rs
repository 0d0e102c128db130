//! The whitespace byte set

/// Whitespace bytes in comparison order: space, tab, newline, carriage return
pub const WHITESPACE_BYTES: [u8; 4] = [b' ', b'\t', b'\n', b'\r'];

/// Returns true if `byte` is one of the four whitespace bytes.
///
/// Comparisons short-circuit on the first match. The order only affects
/// cost, never the answer.
#[inline(always)]
pub const fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || byte == b'\n' || byte == b'\r'
}

/// Constant set of whitespace bytes {0x20, 0x09, 0x0A, 0x0D}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WhitespaceSet;

impl WhitespaceSet {
    /// Creates the whitespace set
    pub const fn new() -> Self {
        WhitespaceSet
    }

    /// Checks byte membership
    #[inline(always)]
    pub const fn contains(&self, byte: u8) -> bool {
        is_whitespace(byte)
    }

    /// Checks membership of a decoded character
    #[inline]
    pub fn contains_char(&self, ch: char) -> bool {
        ch.is_ascii() && is_whitespace(ch as u8)
    }

    /// Returns the member bytes
    pub const fn bytes(&self) -> &'static [u8; 4] {
        &WHITESPACE_BYTES
    }

    /// Number of members
    pub const fn len(&self) -> usize {
        WHITESPACE_BYTES.len()
    }

    /// Always false, the set is fixed
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the member bytes
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        WHITESPACE_BYTES.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_are_whitespace() {
        for byte in [0x20u8, 0x09, 0x0A, 0x0D] {
            assert!(is_whitespace(byte), "0x{:02X} should be whitespace", byte);
        }
    }

    #[test]
    fn test_every_other_byte_is_not_whitespace() {
        let non_members = (0u8..=255)
            .filter(|b| !WHITESPACE_BYTES.contains(b))
            .collect::<Vec<_>>();
        assert_eq!(non_members.len(), 252);

        for byte in non_members {
            assert!(!is_whitespace(byte), "0x{:02X} should not be whitespace", byte);
        }
    }

    #[test]
    fn test_lookalikes_are_excluded() {
        // vertical tab, form feed, NUL, NBSP
        for byte in [0x0Bu8, 0x0C, 0x00, 0xA0] {
            assert!(!is_whitespace(byte));
        }
    }

    #[test]
    fn test_set_accessors() {
        let set = WhitespaceSet::new();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert_eq!(set.bytes(), &[b' ', b'\t', b'\n', b'\r']);
        assert_eq!(set.iter().collect::<Vec<_>>(), WHITESPACE_BYTES.to_vec());
        assert!(set.iter().all(|b| set.contains(b)));
    }

    #[test]
    fn test_contains_char() {
        let set = WhitespaceSet;
        assert!(set.contains_char(' '));
        assert!(set.contains_char('\t'));
        assert!(set.contains_char('\n'));
        assert!(set.contains_char('\r'));
        assert!(!set.contains_char('a'));
        // U+FFFD replacement character and non-ASCII spaces
        assert!(!set.contains_char('\u{FFFD}'));
        assert!(!set.contains_char('\u{00A0}'));
        assert!(!set.contains_char('\u{2003}'));
    }
}
