use std::simd::prelude::*;

/// Finds the `needle` byte substring in the `haystack`, returning the starting
/// index or [`None`] otherwise. An empty needle matches at offset 0.
///
/// ### Limitations
///
/// This is a naïve exact match implementation and should only be used for
/// small byte strings.
#[inline]
#[must_use]
pub fn substring_match(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Backward counterpart of [`substring_match`]: the starting index of the
/// last occurrence, or [`None`]. An empty needle matches at the end of the
/// haystack.
#[inline]
#[must_use]
pub fn substring_rmatch(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    if needle.len() > haystack.len() {
        return None;
    }

    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Returns the starting index of the first matched substring or [`None`]
/// otherwise. The const parameter `N` is used to specify the number of SIMD
/// lanes for the search. An empty needle matches at offset 0.
///
/// Candidate positions are filtered by comparing the needle's first and last
/// bytes in parallel, then verified with a full comparison.
///
/// ### Citation
///
/// 1. Muła, Wojciech (2018). "SIMD-friendly algorithms for substring searching".
///    Available at:
///    <http://0x80.pl/articles/simd-strfind.html#algorithm-1-generic-simd>.
///    Accessed September 3, 2024.
#[inline]
#[must_use]
pub fn substring_match_simd<const N: usize>(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    if needle.len() == 1 {
        return super::position_by_byte::<N>(haystack, needle[0]);
    }

    let last_offset = needle.len() - 1;
    let n1 = Simd::from_array([needle[0]; N]);
    let n2 = Simd::from_array([needle[last_offset]; N]);

    // Candidate starting positions; pairing each with the byte one needle
    // length later keeps every verification slice in bounds.
    let starts = &haystack[..=(haystack.len() - needle.len())];
    let chunks1 = starts.chunks_exact(N).map(Simd::from_slice);
    let chunks2 = haystack[last_offset..].chunks_exact(N).map(Simd::from_slice);

    let mut i = 0;
    for (c1, c2) in std::iter::zip(chunks1, chunks2) {
        let mut m = (n1.simd_eq(c1) & n2.simd_eq(c2)).to_bitmask();

        while m > 0 {
            let candidate = i + m.trailing_zeros() as usize;
            if &haystack[candidate..candidate + needle.len()] == needle {
                return Some(candidate);
            }
            m &= m - 1;
        }
        i += N;
    }

    substring_match(&haystack[i..], needle).map(|j| i + j)
}

/// Returns the starting index of the last matched substring or [`None`]
/// otherwise, scanning from the tail. The const parameter `N` specifies the
/// number of SIMD lanes. An empty needle matches at the end of the haystack.
#[inline]
#[must_use]
pub fn substring_rmatch_simd<const N: usize>(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(haystack.len());
    }
    if needle.len() > haystack.len() {
        return None;
    }
    if needle.len() == 1 {
        return super::rposition_by_byte::<N>(haystack, needle[0]);
    }

    let last_offset = needle.len() - 1;
    let n1 = Simd::from_array([needle[0]; N]);
    let n2 = Simd::from_array([needle[last_offset]; N]);

    let starts = &haystack[..=(haystack.len() - needle.len())];
    let chunks1 = starts.rchunks_exact(N).map(Simd::from_slice);
    let chunks2 = haystack[last_offset..].rchunks_exact(N).map(Simd::from_slice);

    let mut chunk_start = starts.len();
    for (c1, c2) in std::iter::zip(chunks1, chunks2) {
        chunk_start -= N;
        let mut m = (n1.simd_eq(c1) & n2.simd_eq(c2)).to_bitmask();

        while m > 0 {
            let bit = 63 - m.leading_zeros() as usize;
            let candidate = chunk_start + bit;
            if &haystack[candidate..candidate + needle.len()] == needle {
                return Some(candidate);
            }
            m &= !(1u64 << bit);
        }
    }

    // Candidate positions ahead of the last complete chunk pair.
    let rem = starts.len() % N;
    substring_rmatch(&haystack[..rem + needle.len() - 1], needle)
}
