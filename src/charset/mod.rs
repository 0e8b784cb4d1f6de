//! 256-bit byte membership sets and the ASCII alphabet tables built on them.

use std::ops::{BitOr, Not};

mod alphas;

pub use alphas::*;

/// A set of byte values backed by a 256-bit table.
///
/// Membership tests, insertion, union, and inversion are all O(1) over four
/// machine words. Construction and lookup are `const`, so alphabet tables can
/// be built at compile time.
///
/// ## Examples
///
/// ```
/// # use twine::charset::CharSet;
/// const VOWELS: CharSet = CharSet::from_bytes(b"aeiou");
///
/// assert!(VOWELS.contains(b'e'));
/// assert!(!VOWELS.contains(b'z'));
/// assert!(VOWELS.inverted().contains(b'z'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharSet {
    pub(crate) bits: [u64; 4],
}

impl CharSet {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        CharSet { bits: [0; 4] }
    }

    /// Creates a set containing each byte of `bytes`.
    #[inline]
    #[must_use]
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = CharSet::new();
        let mut i = 0;
        while i < bytes.len() {
            set.add(bytes[i]);
            i += 1;
        }
        set
    }

    /// Adds `b` to the set.
    #[inline]
    pub const fn add(&mut self, b: u8) {
        self.bits[(b >> 6) as usize] |= 1u64 << (b & 63);
    }

    /// Tests whether `b` is a member.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        self.bits[(b >> 6) as usize] & (1u64 << (b & 63)) != 0
    }

    /// Returns the union of the two sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        CharSet {
            bits: [
                self.bits[0] | other.bits[0],
                self.bits[1] | other.bits[1],
                self.bits[2] | other.bits[2],
                self.bits[3] | other.bits[3],
            ],
        }
    }

    /// Returns the complement over all 256 byte values.
    #[inline]
    #[must_use]
    pub const fn inverted(self) -> Self {
        CharSet {
            bits: [!self.bits[0], !self.bits[1], !self.bits[2], !self.bits[3]],
        }
    }

    /// Number of member bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.bits[0].count_ones() + self.bits[1].count_ones() + self.bits[2].count_ones() + self.bits[3].count_ones())
            as usize
    }

    /// Returns `true` if no byte is a member.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits[0] == 0 && self.bits[1] == 0 && self.bits[2] == 0 && self.bits[3] == 0
    }
}

impl Default for CharSet {
    #[inline]
    fn default() -> Self {
        CharSet::new()
    }
}

impl BitOr for CharSet {
    type Output = CharSet;

    #[inline]
    fn bitor(self, rhs: CharSet) -> CharSet {
        self.union(rhs)
    }
}

impl Not for CharSet {
    type Output = CharSet;

    #[inline]
    fn not(self) -> CharSet {
        self.inverted()
    }
}

impl From<u8> for CharSet {
    #[inline]
    fn from(b: u8) -> Self {
        let mut set = CharSet::new();
        set.add(b);
        set
    }
}

impl From<&[u8]> for CharSet {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        CharSet::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for CharSet {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        CharSet::from_bytes(bytes)
    }
}

impl From<&str> for CharSet {
    #[inline]
    fn from(s: &str) -> Self {
        CharSet::from_bytes(s.as_bytes())
    }
}

impl FromIterator<u8> for CharSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CharSet::new();
        for b in iter {
            set.add(b);
        }
        set
    }
}
