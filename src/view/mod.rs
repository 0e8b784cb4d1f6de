//! Borrowed byte-string views and the operations defined over them.

use crate::{
    charset::{
        ALPHANUMERIC_SET, ASCII_SET, CharSet, DIGITS_SET, LETTERS_SET, LOWERCASE_SET, NEWLINES_SET, PRINTABLE_SET,
        UPPERCASE_SET, WHITESPACE_SET,
    },
    distance,
    err::MemoryError,
    hash::hash_bytes,
    matcher::{FirstNotOfMatcher, FirstOfMatcher, LastNotOfMatcher, LastOfMatcher, RSubstringMatcher, SubstringMatcher},
    ranges::{Matches, RMatches, RSplits, Splits},
    search,
    string::Twine,
};
use std::{ops::RangeBounds, slice::SliceIndex};

/// Range types accepted by [`ByteStr::get`] and [`ByteStr::slice`].
///
/// Implemented by the standard range types over `usize`, but not by bare
/// indices, so slicing a view always produces another view.
pub trait SliceRange: SliceIndex<[u8], Output = [u8]> + RangeBounds<usize> {}

impl<R: SliceIndex<[u8], Output = [u8]> + RangeBounds<usize>> SliceRange for R {}

/// [`ByteStr`] is a borrowed, immutable view over a byte string. It is two
/// machine words, freely copyable, and does not require valid UTF-8.
///
/// Beyond the slice basics it carries the full search surface: forward and
/// backward substring and character-set searches, trimming, partitioning,
/// lazy match and split ranges, and classification predicates.
///
/// ## Example
///
/// ```
/// # use twine::prelude::*;
/// let line = ByteStr::new(b"  name = value  ");
/// let Partition { before, matched, after } = line.trim().partition("=");
/// assert_eq!(before.trim(), "name");
/// assert_eq!(after.trim(), "value");
/// assert!(!matched.is_empty());
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByteStr<'a> {
    pub(crate) bytes: &'a [u8],
}

/// The three spans produced by [`ByteStr::partition`]: the bytes before the
/// match, the match itself, and the bytes after it. Concatenated in order
/// they reproduce the partitioned view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition<'a> {
    pub before:  ByteStr<'a>,
    pub matched: ByteStr<'a>,
    pub after:   ByteStr<'a>,
}

impl<'a> ByteStr<'a> {
    // std

    /// Creates a view over `bytes`.
    #[inline]
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        ByteStr { bytes }
    }

    /// The length of the viewed byte string.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The viewed bytes as a plain slice.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The first byte, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    /// The last byte, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.bytes.last().copied()
    }

    /// A sub-view for `range`, or [`None`] when out of bounds.
    #[inline]
    #[must_use]
    pub fn get<R: SliceRange>(&self, range: R) -> Option<ByteStr<'a>> {
        self.bytes.get(range).map(ByteStr::new)
    }

    /// A sub-view for `range`.
    ///
    /// # Panics
    ///
    /// Panics when `range` is out of bounds.
    #[inline]
    #[must_use]
    pub fn slice<R: SliceRange>(&self, range: R) -> ByteStr<'a> {
        ByteStr::new(&self.bytes[range])
    }

    /// Iterates over the viewed bytes.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'a, u8> {
        self.bytes.iter()
    }

    // Substring and byte search

    /// The offset of the first occurrence of `needle`.
    ///
    /// An empty needle is found at offset `0`.
    ///
    /// ## Example
    ///
    /// ```
    /// # use twine::prelude::*;
    /// let v = ByteStr::new(b"abracadabra");
    /// assert_eq!(v.find("abra"), Some(0));
    /// assert_eq!(v.rfind("abra"), Some(7));
    /// assert_eq!(v.find("zebra"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        search::substring_match_simd::<16>(self.bytes, needle.as_ref())
    }

    /// The offset of the last occurrence of `needle`.
    ///
    /// An empty needle is found at the end of the view.
    #[inline]
    #[must_use]
    pub fn rfind(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
        search::substring_rmatch_simd::<16>(self.bytes, needle.as_ref())
    }

    /// The offset of the first occurrence of `needle` at or after `start`.
    ///
    /// # Panics
    ///
    /// Panics when `start > self.len()`.
    #[must_use]
    pub fn find_from(&self, needle: impl AsRef<[u8]>, start: usize) -> Option<usize> {
        search::substring_match_simd::<16>(&self.bytes[start..], needle.as_ref()).map(|offset| offset + start)
    }

    /// The offset of the last occurrence of `needle` contained in
    /// `self[..end]`.
    ///
    /// # Panics
    ///
    /// Panics when `end > self.len()`.
    #[must_use]
    pub fn rfind_from(&self, needle: impl AsRef<[u8]>, end: usize) -> Option<usize> {
        search::substring_rmatch_simd::<16>(&self.bytes[..end], needle.as_ref())
    }

    /// The offset of the first occurrence of `byte`.
    #[inline]
    #[must_use]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        search::position_by_byte::<16>(self.bytes, byte)
    }

    /// The offset of the last occurrence of `byte`.
    #[inline]
    #[must_use]
    pub fn rfind_byte(&self, byte: u8) -> Option<usize> {
        search::rposition_by_byte::<16>(self.bytes, byte)
    }

    /// Whether `needle` occurs in the view.
    #[inline]
    #[must_use]
    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find(needle).is_some()
    }

    /// Whether `byte` occurs in the view.
    #[inline]
    #[must_use]
    pub fn contains_byte(&self, byte: u8) -> bool {
        self.find_byte(byte).is_some()
    }

    // Character-set search

    /// The offset of the first byte that is in `set`.
    #[inline]
    #[must_use]
    pub fn find_first_of(&self, set: impl Into<CharSet>) -> Option<usize> {
        search::position_in_set(self.bytes, &set.into())
    }

    /// The offset of the last byte that is in `set`.
    #[inline]
    #[must_use]
    pub fn find_last_of(&self, set: impl Into<CharSet>) -> Option<usize> {
        search::rposition_in_set(self.bytes, &set.into())
    }

    /// The offset of the first byte that is not in `set`.
    #[inline]
    #[must_use]
    pub fn find_first_not_of(&self, set: impl Into<CharSet>) -> Option<usize> {
        search::position_not_in_set(self.bytes, &set.into())
    }

    /// The offset of the last byte that is not in `set`.
    #[inline]
    #[must_use]
    pub fn find_last_not_of(&self, set: impl Into<CharSet>) -> Option<usize> {
        search::rposition_not_in_set(self.bytes, &set.into())
    }

    // Prefixes and suffixes

    /// Whether the view starts with `prefix`.
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(prefix.as_ref())
    }

    /// Whether the view ends with `suffix`.
    #[inline]
    #[must_use]
    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.bytes.ends_with(suffix.as_ref())
    }

    /// Whether the first byte is `byte`. Always `false` on an empty view.
    #[inline]
    #[must_use]
    pub fn starts_with_byte(&self, byte: u8) -> bool {
        self.first() == Some(byte)
    }

    /// Whether the last byte is `byte`. Always `false` on an empty view.
    #[inline]
    #[must_use]
    pub fn ends_with_byte(&self, byte: u8) -> bool {
        self.last() == Some(byte)
    }

    /// The view with `prefix` removed, or [`None`] when it does not start
    /// with `prefix`.
    #[inline]
    #[must_use]
    pub fn strip_prefix(&self, prefix: impl AsRef<[u8]>) -> Option<ByteStr<'a>> {
        self.bytes.strip_prefix(prefix.as_ref()).map(ByteStr::new)
    }

    /// The view with `suffix` removed, or [`None`] when it does not end with
    /// `suffix`.
    #[inline]
    #[must_use]
    pub fn strip_suffix(&self, suffix: impl AsRef<[u8]>) -> Option<ByteStr<'a>> {
        self.bytes.strip_suffix(suffix.as_ref()).map(ByteStr::new)
    }

    // Trimming

    /// The view without leading bytes drawn from `set`.
    #[must_use]
    pub fn lstrip(&self, set: impl Into<CharSet>) -> ByteStr<'a> {
        match search::position_not_in_set(self.bytes, &set.into()) {
            Some(start) => self.slice(start..),
            None => self.slice(self.len()..),
        }
    }

    /// The view without trailing bytes drawn from `set`.
    #[must_use]
    pub fn rstrip(&self, set: impl Into<CharSet>) -> ByteStr<'a> {
        match search::rposition_not_in_set(self.bytes, &set.into()) {
            Some(end) => self.slice(..=end),
            None => self.slice(..0),
        }
    }

    /// The view without leading or trailing bytes drawn from `set`.
    #[inline]
    #[must_use]
    pub fn strip(&self, set: impl Into<CharSet>) -> ByteStr<'a> {
        let set = set.into();
        self.lstrip(set).rstrip(set)
    }

    /// The view without leading or trailing ASCII whitespace.
    ///
    /// ## Example
    ///
    /// ```
    /// # use twine::prelude::*;
    /// assert_eq!(ByteStr::new(b" \t data \r\n").trim(), "data");
    /// ```
    #[inline]
    #[must_use]
    pub fn trim(&self) -> ByteStr<'a> {
        self.strip(WHITESPACE_SET)
    }

    // Partitioning

    /// Splits the view around the first occurrence of `needle`.
    ///
    /// When `needle` is absent, `before` is the whole view and `matched` and
    /// `after` are empty.
    #[must_use]
    pub fn partition(&self, needle: impl AsRef<[u8]>) -> Partition<'a> {
        let needle = needle.as_ref();
        match self.find(needle) {
            Some(start) => Partition {
                before:  self.slice(..start),
                matched: self.slice(start..start + needle.len()),
                after:   self.slice(start + needle.len()..),
            },
            None => Partition {
                before:  *self,
                matched: self.slice(self.len()..),
                after:   self.slice(self.len()..),
            },
        }
    }

    /// Splits the view around the last occurrence of `needle`.
    ///
    /// When `needle` is absent, `before` is the whole view and `matched` and
    /// `after` are empty, the same shape [`partition`](ByteStr::partition)
    /// reports.
    #[must_use]
    pub fn rpartition(&self, needle: impl AsRef<[u8]>) -> Partition<'a> {
        let needle = needle.as_ref();
        match self.rfind(needle) {
            Some(start) => Partition {
                before:  self.slice(..start),
                matched: self.slice(start..start + needle.len()),
                after:   self.slice(start + needle.len()..),
            },
            None => Partition {
                before:  *self,
                matched: self.slice(self.len()..),
                after:   self.slice(self.len()..),
            },
        }
    }

    // Lazy ranges

    /// Iterates over occurrences of `needle`, including overlapping ones.
    #[must_use]
    pub fn matches<'n>(&self, needle: &'n (impl AsRef<[u8]> + ?Sized)) -> Matches<'a, SubstringMatcher<'n>> {
        Matches::new(self.bytes, SubstringMatcher::new(needle.as_ref()))
    }

    /// Iterates over non-overlapping occurrences of `needle`.
    #[must_use]
    pub fn matches_disjoint<'n>(&self, needle: &'n (impl AsRef<[u8]> + ?Sized)) -> Matches<'a, SubstringMatcher<'n>> {
        Matches::new(self.bytes, SubstringMatcher::disjoint(needle.as_ref()))
    }

    /// Iterates over occurrences of `needle` from the end, including
    /// overlapping ones.
    #[must_use]
    pub fn rmatches<'n>(&self, needle: &'n (impl AsRef<[u8]> + ?Sized)) -> RMatches<'a, RSubstringMatcher<'n>> {
        RMatches::new(self.bytes, RSubstringMatcher::new(needle.as_ref()))
    }

    /// Iterates over non-overlapping occurrences of `needle` from the end.
    #[must_use]
    pub fn rmatches_disjoint<'n>(
        &self, needle: &'n (impl AsRef<[u8]> + ?Sized),
    ) -> RMatches<'a, RSubstringMatcher<'n>> {
        RMatches::new(self.bytes, RSubstringMatcher::disjoint(needle.as_ref()))
    }

    /// Iterates over bytes drawn from `set`.
    #[must_use]
    pub fn matches_of(&self, set: impl Into<CharSet>) -> Matches<'a, FirstOfMatcher> {
        Matches::new(self.bytes, FirstOfMatcher::new(set))
    }

    /// Iterates over bytes drawn from `set`, from the end.
    #[must_use]
    pub fn rmatches_of(&self, set: impl Into<CharSet>) -> RMatches<'a, LastOfMatcher> {
        RMatches::new(self.bytes, LastOfMatcher::new(set))
    }

    /// Iterates over bytes not drawn from `set`.
    #[must_use]
    pub fn matches_not_of(&self, set: impl Into<CharSet>) -> Matches<'a, FirstNotOfMatcher> {
        Matches::new(self.bytes, FirstNotOfMatcher::new(set))
    }

    /// Iterates over bytes not drawn from `set`, from the end.
    #[must_use]
    pub fn rmatches_not_of(&self, set: impl Into<CharSet>) -> RMatches<'a, LastNotOfMatcher> {
        RMatches::new(self.bytes, LastNotOfMatcher::new(set))
    }

    /// Iterates over the pieces between occurrences of `needle`.
    ///
    /// A view with `n` occurrences yields `n + 1` pieces, keeping empty ones,
    /// so an empty view yields a single empty piece.
    ///
    /// ## Example
    ///
    /// ```
    /// # use twine::prelude::*;
    /// let csv = ByteStr::new(b"a,b,,c");
    /// let fields: Vec<_> = csv.split(",").collect();
    /// assert_eq!(fields, ["a", "b", "", "c"]);
    /// ```
    #[must_use]
    pub fn split<'n>(&self, needle: &'n (impl AsRef<[u8]> + ?Sized)) -> Splits<'a, SubstringMatcher<'n>> {
        Splits::new(self.bytes, SubstringMatcher::new(needle.as_ref()))
    }

    /// Iterates over the pieces between occurrences of `needle`, last piece
    /// first.
    #[must_use]
    pub fn rsplit<'n>(&self, needle: &'n (impl AsRef<[u8]> + ?Sized)) -> RSplits<'a, RSubstringMatcher<'n>> {
        RSplits::new(self.bytes, RSubstringMatcher::new(needle.as_ref()))
    }

    /// Iterates over the pieces between bytes drawn from `set`.
    #[must_use]
    pub fn split_of(&self, set: impl Into<CharSet>) -> Splits<'a, FirstOfMatcher> {
        Splits::new(self.bytes, FirstOfMatcher::new(set))
    }

    /// Iterates over the pieces between bytes drawn from `set`, last piece
    /// first.
    #[must_use]
    pub fn rsplit_of(&self, set: impl Into<CharSet>) -> RSplits<'a, LastOfMatcher> {
        RSplits::new(self.bytes, LastOfMatcher::new(set))
    }

    /// Iterates over lines, treating every line-break byte as a terminator.
    #[inline]
    #[must_use]
    pub fn split_lines(&self) -> Splits<'a, FirstOfMatcher> {
        self.split_of(NEWLINES_SET)
    }

    /// Iterates over the pieces between ASCII whitespace bytes.
    #[inline]
    #[must_use]
    pub fn split_whitespace(&self) -> Splits<'a, FirstOfMatcher> {
        self.split_of(WHITESPACE_SET)
    }

    // Classification

    /// Whether every byte is drawn from `set`. Empty views qualify.
    #[must_use]
    pub fn contains_only(&self, set: impl Into<CharSet>) -> bool {
        let set = set.into();
        self.bytes.iter().all(|&b| set.contains(b))
    }

    /// Whether the view is non-empty and all ASCII letters.
    #[inline]
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        !self.is_empty() && self.contains_only(LETTERS_SET)
    }

    /// Whether the view is non-empty and all ASCII letters or digits.
    #[inline]
    #[must_use]
    pub fn is_alphanumeric(&self) -> bool {
        !self.is_empty() && self.contains_only(ALPHANUMERIC_SET)
    }

    /// Whether the view is non-empty and all ASCII digits.
    #[inline]
    #[must_use]
    pub fn is_digit(&self) -> bool {
        !self.is_empty() && self.contains_only(DIGITS_SET)
    }

    /// Whether the view is non-empty and all lowercase ASCII letters.
    #[inline]
    #[must_use]
    pub fn is_lowercase(&self) -> bool {
        !self.is_empty() && self.contains_only(LOWERCASE_SET)
    }

    /// Whether the view is non-empty and all ASCII whitespace.
    #[inline]
    #[must_use]
    pub fn is_space(&self) -> bool {
        !self.is_empty() && self.contains_only(WHITESPACE_SET)
    }

    /// Whether the view is non-empty and all uppercase ASCII letters.
    #[inline]
    #[must_use]
    pub fn is_uppercase(&self) -> bool {
        !self.is_empty() && self.contains_only(UPPERCASE_SET)
    }

    /// Whether every byte is ASCII. Empty views qualify.
    #[inline]
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.contains_only(ASCII_SET)
    }

    /// Whether every byte is printable ASCII, including whitespace. Empty
    /// views qualify.
    #[inline]
    #[must_use]
    pub fn is_printable(&self) -> bool {
        self.contains_only(PRINTABLE_SET)
    }

    // Derived values

    /// A 64-bit content hash of the viewed bytes.
    ///
    /// Stable across runs for equal content. Distinct from the [`Hash`]
    /// implementation, which feeds whatever hasher a map supplies.
    #[inline]
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        hash_bytes(self.bytes)
    }

    /// Copies the viewed bytes into an owned [`Twine`].
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AllocationFailed`] when the allocator cannot
    /// provide backing storage.
    #[inline]
    pub fn to_twine(&self) -> Result<Twine, MemoryError> {
        Twine::try_from(self.bytes)
    }

    /// The Levenshtein edit distance to `other`.
    #[inline]
    #[must_use]
    pub fn edit_distance(&self, other: impl AsRef<[u8]>) -> usize {
        distance::levenshtein(self.bytes, other.as_ref())
    }

    /// The Levenshtein edit distance to `other`, or [`None`] when it exceeds
    /// `bound`.
    #[inline]
    #[must_use]
    pub fn edit_distance_bounded(&self, other: impl AsRef<[u8]>, bound: usize) -> Option<usize> {
        distance::levenshtein_bounded(self.bytes, other.as_ref(), bound)
    }
}

#[cfg(test)]
mod test;

mod std_traits;

#[allow(unused_imports)]
pub use std_traits::*;
