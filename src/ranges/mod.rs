//! Lazy iterators over matches and the pieces between them.
//!
//! Each iterator borrows its haystack and a [`Matcher`], finds matches one at
//! a time, and yields [`ByteStr`] slices into the haystack. Match ranges
//! yield the matched spans; split ranges yield the gaps between matches, so a
//! haystack with `n` matches always splits into `n + 1` pieces and a split
//! range is never empty. An empty needle matches before every byte; scans
//! still advance at least one byte per step, so iteration always terminates.
//!
//! Equality between two ranges compares identity of the haystack and the
//! progress made through it. The matcher itself is not compared.

use crate::matcher::Matcher;
use crate::view::ByteStr;
use std::iter::FusedIterator;

/// Forward iterator over the spans a matcher finds in a haystack.
#[derive(Clone, Debug)]
pub struct Matches<'h, M: Matcher> {
    haystack: &'h [u8],
    cursor:   usize,
    matcher:  M,
}

impl<'h, M: Matcher> Matches<'h, M> {
    /// Creates the range and advances to the first match.
    #[must_use]
    pub fn new(haystack: &'h [u8], matcher: M) -> Self {
        let mut range = Matches { haystack, cursor: 0, matcher };
        range.seek();
        range
    }

    /// Moves `cursor` to the next match at or after it, or to the end of the
    /// haystack if none remains.
    fn seek(&mut self) {
        match self.matcher.locate(&self.haystack[self.cursor..]) {
            Some(offset) => self.cursor += offset,
            None => self.cursor = self.haystack.len(),
        }
    }
}

impl<'h, M: Matcher> Iterator for Matches<'h, M> {
    type Item = ByteStr<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.haystack.len() {
            return None;
        }
        let start = self.cursor;
        let item = ByteStr::new(&self.haystack[start..start + self.matcher.needle_len()]);
        self.cursor = (start + self.matcher.skip_len()).min(self.haystack.len());
        self.seek();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor >= self.haystack.len() {
            (0, Some(0))
        } else {
            (1, Some(self.haystack.len() - self.cursor))
        }
    }
}

impl<M: Matcher> FusedIterator for Matches<'_, M> {}

impl<M: Matcher> PartialEq for Matches<'_, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.haystack, other.haystack) && self.cursor == other.cursor
    }
}

impl<M: Matcher> Eq for Matches<'_, M> {}

/// Backward iterator over the spans a matcher finds in a haystack.
///
/// `end` is the offset one past the pending match; `0` means exhausted.
#[derive(Clone, Debug)]
pub struct RMatches<'h, M: Matcher> {
    haystack: &'h [u8],
    end:      usize,
    matcher:  M,
}

impl<'h, M: Matcher> RMatches<'h, M> {
    /// Creates the range and retreats to the last match.
    #[must_use]
    pub fn new(haystack: &'h [u8], matcher: M) -> Self {
        let mut range = RMatches { haystack, end: haystack.len(), matcher };
        range.seek();
        range
    }

    fn seek(&mut self) {
        match self.matcher.locate(&self.haystack[..self.end]) {
            Some(offset) => self.end = offset + self.matcher.needle_len(),
            None => self.end = 0,
        }
    }
}

impl<'h, M: Matcher> Iterator for RMatches<'h, M> {
    type Item = ByteStr<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end == 0 {
            return None;
        }
        let item = ByteStr::new(&self.haystack[self.end - self.matcher.needle_len()..self.end]);
        self.end = self.end.saturating_sub(self.matcher.skip_len());
        self.seek();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.end == 0 { (0, Some(0)) } else { (1, Some(self.end)) }
    }
}

impl<M: Matcher> FusedIterator for RMatches<'_, M> {}

impl<M: Matcher> PartialEq for RMatches<'_, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.haystack, other.haystack) && self.end == other.end
    }
}

impl<M: Matcher> Eq for RMatches<'_, M> {}

/// Forward iterator over the gaps between matches.
///
/// The piece before the first match, between any two matches, and after the
/// last match are all yielded, including when empty. An empty haystack
/// yields a single empty piece.
#[derive(Clone, Debug)]
pub struct Splits<'h, M: Matcher> {
    haystack: &'h [u8],
    cursor:   usize,
    gap_len:  usize,
    tail:     bool,
    done:     bool,
    matcher:  M,
}

impl<'h, M: Matcher> Splits<'h, M> {
    #[must_use]
    pub fn new(haystack: &'h [u8], matcher: M) -> Self {
        let mut range = Splits { haystack, cursor: 0, gap_len: 0, tail: false, done: false, matcher };
        range.relocate();
        range
    }

    /// Measures the gap starting at `cursor` and records whether it runs to
    /// the end of the haystack.
    fn relocate(&mut self) {
        if self.cursor >= self.haystack.len() {
            self.gap_len = 0;
            self.tail = true;
        } else {
            match self.matcher.locate(&self.haystack[self.cursor..]) {
                Some(offset) => {
                    self.gap_len = offset;
                    self.tail = false;
                }
                None => {
                    self.gap_len = self.haystack.len() - self.cursor;
                    self.tail = true;
                }
            }
        }
    }
}

impl<'h, M: Matcher> Iterator for Splits<'h, M> {
    type Item = ByteStr<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = ByteStr::new(&self.haystack[self.cursor..self.cursor + self.gap_len]);
        if self.tail {
            self.cursor += self.gap_len;
            self.gap_len = 0;
            self.done = true;
        } else {
            self.cursor += self.gap_len + self.matcher.needle_len().max(1);
            self.relocate();
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, Some(self.haystack.len() - self.cursor + 1))
        }
    }
}

impl<M: Matcher> FusedIterator for Splits<'_, M> {}

impl<M: Matcher> PartialEq for Splits<'_, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.haystack, other.haystack) && self.cursor == other.cursor && self.done == other.done
    }
}

impl<M: Matcher> Eq for Splits<'_, M> {}

/// Backward iterator over the gaps between matches, yielded last to first.
#[derive(Clone, Debug)]
pub struct RSplits<'h, M: Matcher> {
    haystack: &'h [u8],
    end:      usize,
    gap_len:  usize,
    tail:     bool,
    done:     bool,
    matcher:  M,
}

impl<'h, M: Matcher> RSplits<'h, M> {
    #[must_use]
    pub fn new(haystack: &'h [u8], matcher: M) -> Self {
        let mut range =
            RSplits { haystack, end: haystack.len(), gap_len: 0, tail: false, done: false, matcher };
        range.relocate();
        range
    }

    /// Measures the gap ending at `end` and records whether it runs to the
    /// start of the haystack.
    fn relocate(&mut self) {
        if self.end == 0 {
            self.gap_len = 0;
            self.tail = true;
        } else {
            match self.matcher.locate(&self.haystack[..self.end]) {
                Some(offset) => {
                    self.gap_len = self.end - (offset + self.matcher.needle_len());
                    self.tail = false;
                }
                None => {
                    self.gap_len = self.end;
                    self.tail = true;
                }
            }
        }
    }
}

impl<'h, M: Matcher> Iterator for RSplits<'h, M> {
    type Item = ByteStr<'h>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = ByteStr::new(&self.haystack[self.end - self.gap_len..self.end]);
        if self.tail {
            self.end -= self.gap_len;
            self.gap_len = 0;
            self.done = true;
        } else {
            self.end = (self.end - self.gap_len).saturating_sub(self.matcher.needle_len().max(1));
            self.relocate();
        }
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { (1, Some(self.end + 1)) }
    }
}

impl<M: Matcher> FusedIterator for RSplits<'_, M> {}

impl<M: Matcher> PartialEq for RSplits<'_, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.haystack, other.haystack) && self.end == other.end && self.done == other.done
    }
}

impl<M: Matcher> Eq for RSplits<'_, M> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matcher::{FirstOfMatcher, LastOfMatcher, RSubstringMatcher, SubstringMatcher};

    fn offset_in(haystack: &[u8], part: ByteStr<'_>) -> usize {
        part.as_bytes().as_ptr() as usize - haystack.as_ptr() as usize
    }

    fn collect_bytes<'h>(iter: impl Iterator<Item = ByteStr<'h>>) -> Vec<&'h [u8]> {
        iter.map(|part| part.as_bytes()).collect()
    }

    #[test]
    fn matches_overlapping_and_disjoint() {
        let haystack = b"aaaa";

        let starts: Vec<_> =
            Matches::new(haystack, SubstringMatcher::new(b"aa")).map(|m| offset_in(haystack, m)).collect();
        assert_eq!(starts, [0, 1, 2]);

        let starts: Vec<_> = Matches::new(haystack, SubstringMatcher::disjoint(b"aa"))
            .map(|m| offset_in(haystack, m))
            .collect();
        assert_eq!(starts, [0, 2]);
    }

    #[test]
    fn rmatches_overlapping_and_disjoint() {
        let haystack = b"aaaa";

        let starts: Vec<_> = RMatches::new(haystack, RSubstringMatcher::new(b"aa"))
            .map(|m| offset_in(haystack, m))
            .collect();
        assert_eq!(starts, [2, 1, 0]);

        let starts: Vec<_> = RMatches::new(haystack, RSubstringMatcher::disjoint(b"aa"))
            .map(|m| offset_in(haystack, m))
            .collect();
        assert_eq!(starts, [2, 0]);
    }

    #[test]
    fn matches_yield_the_needle() {
        let haystack = b"one, two, three";
        for m in Matches::new(haystack, SubstringMatcher::new(b", ")) {
            assert_eq!(m.as_bytes(), b", ");
        }
        assert_eq!(Matches::new(haystack, SubstringMatcher::new(b", ")).count(), 2);
        assert_eq!(RMatches::new(haystack, RSubstringMatcher::new(b", ")).count(), 2);
    }

    #[test]
    fn set_matches_both_directions_agree() {
        let haystack = b"a1b2c3";
        let forward: Vec<_> =
            Matches::new(haystack, FirstOfMatcher::new(b"123")).map(|m| offset_in(haystack, m)).collect();
        let mut backward: Vec<_> =
            RMatches::new(haystack, LastOfMatcher::new(b"123")).map(|m| offset_in(haystack, m)).collect();
        backward.reverse();
        assert_eq!(forward, [1, 3, 5]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn splits_basic() {
        let haystack = b"x,y,z";
        let parts = collect_bytes(Splits::new(haystack, SubstringMatcher::new(b",")));
        assert_eq!(parts, [b"x".as_slice(), b"y", b"z"]);
    }

    #[test]
    fn splits_empty_haystack_yields_one_empty_piece() {
        let parts = collect_bytes(Splits::new(b"", SubstringMatcher::new(b",")));
        assert_eq!(parts, [b"".as_slice()]);

        let parts = collect_bytes(RSplits::new(b"", RSubstringMatcher::new(b",")));
        assert_eq!(parts, [b"".as_slice()]);
    }

    #[test]
    fn splits_keep_boundary_empties() {
        let parts = collect_bytes(Splits::new(b"a,", SubstringMatcher::new(b",")));
        assert_eq!(parts, [b"a".as_slice(), b""]);

        let parts = collect_bytes(Splits::new(b",a", SubstringMatcher::new(b",")));
        assert_eq!(parts, [b"".as_slice(), b"a"]);

        let parts = collect_bytes(Splits::new(b",,", SubstringMatcher::new(b",")));
        assert_eq!(parts, [b"".as_slice(), b"", b""]);
    }

    #[test]
    fn rsplits_reverse_forward_order() {
        let haystack = b"a,b,,c";
        let mut forward = collect_bytes(Splits::new(haystack, SubstringMatcher::new(b",")));
        let backward = collect_bytes(RSplits::new(haystack, RSubstringMatcher::new(b",")));
        forward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(backward, [b"c".as_slice(), b"", b"b", b"a"]);
    }

    #[test]
    fn splits_count_is_matches_plus_one() {
        let haystack = b"the quick brown fox";
        let matches = Matches::new(haystack, SubstringMatcher::disjoint(b" ")).count();
        let pieces = Splits::new(haystack, SubstringMatcher::disjoint(b" ")).count();
        assert_eq!(pieces, matches + 1);
    }

    #[test]
    fn splits_on_multibyte_needle() {
        let haystack = b"ab--cd--ef";
        let parts = collect_bytes(Splits::new(haystack, SubstringMatcher::new(b"--")));
        assert_eq!(parts, [b"ab".as_slice(), b"cd", b"ef"]);
        let parts = collect_bytes(RSplits::new(haystack, RSubstringMatcher::new(b"--")));
        assert_eq!(parts, [b"ef".as_slice(), b"cd", b"ab"]);
    }

    #[test]
    fn empty_needle_terminates() {
        let parts = collect_bytes(Splits::new(b"ab", SubstringMatcher::new(b"")));
        assert_eq!(parts, [b"".as_slice(), b"", b""]);

        let parts = collect_bytes(RSplits::new(b"ab", RSubstringMatcher::new(b"")));
        assert_eq!(parts, [b"".as_slice(), b"", b""]);

        assert_eq!(Matches::new(b"ab", SubstringMatcher::new(b"")).count(), 2);
        assert_eq!(RMatches::new(b"ab", RSubstringMatcher::new(b"")).count(), 2);
    }

    #[test]
    fn split_pieces_index_into_the_haystack() {
        let haystack = b",ab,,c";
        let offsets: Vec<_> = Splits::new(haystack, SubstringMatcher::new(b","))
            .map(|p| (offset_in(haystack, p), p.len()))
            .collect();
        assert_eq!(offsets, [(0, 0), (1, 2), (4, 0), (5, 1)]);
    }

    #[test]
    fn ranges_compare_by_progress() {
        let haystack = b"a,b,c";
        let matcher = SubstringMatcher::new(b",");

        let mut left = Splits::new(haystack, matcher);
        let right = Splits::new(haystack, matcher);
        assert_eq!(left, right);

        left.next();
        assert_ne!(left, right);

        let mut caught_up = Splits::new(haystack, matcher);
        caught_up.next();
        assert_eq!(left, caught_up);

        // Same content elsewhere in memory is a different haystack.
        let copy = haystack.to_vec();
        assert_ne!(Splits::new(haystack, matcher), Splits::new(&copy, matcher));
    }

    #[test]
    fn exhausted_ranges_compare_equal_and_stay_fused() {
        let haystack = b"a,b";
        let matcher = SubstringMatcher::new(b",");

        let mut walked = Matches::new(haystack, matcher);
        while walked.next().is_some() {}
        let mut other = Matches::new(haystack, matcher);
        while other.next().is_some() {}
        assert_eq!(walked, other);
        assert_eq!(walked.next(), None);
        assert_eq!(walked.next(), None);

        let mut splits = Splits::new(haystack, matcher);
        while splits.next().is_some() {}
        assert_eq!(splits.next(), None);
        assert_eq!(splits.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hints_bound_the_walk() {
        let haystack = b"a,b,,c";
        let matcher = SubstringMatcher::new(b",");

        let mut range = Splits::new(haystack, matcher);
        loop {
            let (lower, upper) = range.size_hint();
            let remaining = range.clone().count();
            assert!(lower <= remaining);
            assert!(remaining <= upper.unwrap());
            if range.next().is_none() {
                break;
            }
        }
    }
}
