//! Matcher strategies that drive the lazy match and split ranges.
//!
//! A matcher bundles a needle with a search direction. Given a haystack it
//! reports where the nearest match lies, how long the matched span is, and
//! how far the scan cursor advances once a match is consumed. The strategy
//! set is closed: two substring matchers (forward and backward) and four
//! character-set matchers covering both directions and both membership
//! polarities.

use crate::charset::CharSet;
use crate::search;

/// A search strategy over byte haystacks.
///
/// Forward matchers scan left to right, backward matchers right to left.
/// `skip_len` governs overlap: a skip shorter than the needle lets a scan
/// revisit bytes inside a previous match.
pub trait Matcher: Copy {
    /// Length of the span reported for each match.
    fn needle_len(&self) -> usize;

    /// Cursor advance past a match's start before the next scan.
    fn skip_len(&self) -> usize;

    /// Offset of the nearest match in `haystack`, or [`None`].
    fn locate(&self, haystack: &[u8]) -> Option<usize>;
}

/// Forward exact-substring matcher. The needle is borrowed, never copied.
#[derive(Clone, Copy, Debug)]
pub struct SubstringMatcher<'n> {
    needle:      &'n [u8],
    overlapping: bool,
}

impl<'n> SubstringMatcher<'n> {
    /// Creates a matcher that reports overlapping matches.
    #[inline]
    #[must_use]
    pub const fn new(needle: &'n [u8]) -> Self {
        SubstringMatcher { needle, overlapping: true }
    }

    /// Creates a matcher that skips past each whole match.
    #[inline]
    #[must_use]
    pub const fn disjoint(needle: &'n [u8]) -> Self {
        SubstringMatcher { needle, overlapping: false }
    }
}

impl Matcher for SubstringMatcher<'_> {
    #[inline]
    fn needle_len(&self) -> usize {
        self.needle.len()
    }

    #[inline]
    fn skip_len(&self) -> usize {
        // At least 1 so that an empty needle cannot stall a scan.
        if self.overlapping { 1 } else { self.needle.len().max(1) }
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::substring_match_simd::<16>(haystack, self.needle)
    }
}

/// Backward exact-substring matcher.
#[derive(Clone, Copy, Debug)]
pub struct RSubstringMatcher<'n> {
    needle:      &'n [u8],
    overlapping: bool,
}

impl<'n> RSubstringMatcher<'n> {
    /// Creates a matcher that reports overlapping matches.
    #[inline]
    #[must_use]
    pub const fn new(needle: &'n [u8]) -> Self {
        RSubstringMatcher { needle, overlapping: true }
    }

    /// Creates a matcher that skips past each whole match.
    #[inline]
    #[must_use]
    pub const fn disjoint(needle: &'n [u8]) -> Self {
        RSubstringMatcher { needle, overlapping: false }
    }
}

impl Matcher for RSubstringMatcher<'_> {
    #[inline]
    fn needle_len(&self) -> usize {
        self.needle.len()
    }

    #[inline]
    fn skip_len(&self) -> usize {
        if self.overlapping { 1 } else { self.needle.len().max(1) }
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::substring_rmatch_simd::<16>(haystack, self.needle)
    }
}

/// Forward matcher for the first byte inside a set.
#[derive(Clone, Copy, Debug)]
pub struct FirstOfMatcher {
    set: CharSet,
}

impl FirstOfMatcher {
    #[inline]
    #[must_use]
    pub fn new(set: impl Into<CharSet>) -> Self {
        FirstOfMatcher { set: set.into() }
    }
}

impl Matcher for FirstOfMatcher {
    #[inline]
    fn needle_len(&self) -> usize {
        1
    }

    #[inline]
    fn skip_len(&self) -> usize {
        1
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::position_in_set(haystack, &self.set)
    }
}

/// Backward matcher for the last byte inside a set.
#[derive(Clone, Copy, Debug)]
pub struct LastOfMatcher {
    set: CharSet,
}

impl LastOfMatcher {
    #[inline]
    #[must_use]
    pub fn new(set: impl Into<CharSet>) -> Self {
        LastOfMatcher { set: set.into() }
    }
}

impl Matcher for LastOfMatcher {
    #[inline]
    fn needle_len(&self) -> usize {
        1
    }

    #[inline]
    fn skip_len(&self) -> usize {
        1
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::rposition_in_set(haystack, &self.set)
    }
}

/// Forward matcher for the first byte outside a set.
#[derive(Clone, Copy, Debug)]
pub struct FirstNotOfMatcher {
    set: CharSet,
}

impl FirstNotOfMatcher {
    #[inline]
    #[must_use]
    pub fn new(set: impl Into<CharSet>) -> Self {
        FirstNotOfMatcher { set: set.into() }
    }
}

impl Matcher for FirstNotOfMatcher {
    #[inline]
    fn needle_len(&self) -> usize {
        1
    }

    #[inline]
    fn skip_len(&self) -> usize {
        1
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::position_not_in_set(haystack, &self.set)
    }
}

/// Backward matcher for the last byte outside a set.
#[derive(Clone, Copy, Debug)]
pub struct LastNotOfMatcher {
    set: CharSet,
}

impl LastNotOfMatcher {
    #[inline]
    #[must_use]
    pub fn new(set: impl Into<CharSet>) -> Self {
        LastNotOfMatcher { set: set.into() }
    }
}

impl Matcher for LastNotOfMatcher {
    #[inline]
    fn needle_len(&self) -> usize {
        1
    }

    #[inline]
    fn skip_len(&self) -> usize {
        1
    }

    #[inline]
    fn locate(&self, haystack: &[u8]) -> Option<usize> {
        search::rposition_not_in_set(haystack, &self.set)
    }
}
