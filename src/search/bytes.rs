use crate::charset::CharSet;
use crate::simd::SimdMaskFunctions;
use std::simd::prelude::*;

/// Finds the index of the byte `b` in the `haystack`. The const parameter `N`
/// specifies the number of SIMD lanes used.
///
/// See [`position_simd`] for the SIMD byte search leveraged internally.
#[must_use]
#[inline]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn position_by_byte<const N: usize>(haystack: &[u8], b: u8) -> Option<usize> {
    let (pre, mid, post) = haystack.as_simd();

    if let Some(p) = pre.iter().position(|x| *x == b) {
        Some(p)
    } else if let Some(p) = position_simd::<N, 4, _>(mid, |v| v.simd_eq(Simd::from_array([b; N]))) {
        Some(p + pre.len())
    } else {
        post.iter().position(|x| *x == b).map(|p| pre.len() + (mid.len() * N) + p)
    }
}

/// Finds the index of the last occurrence of the byte `b` in the `haystack`.
/// The const parameter `N` specifies the number of SIMD lanes used.
#[must_use]
#[inline]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn rposition_by_byte<const N: usize>(haystack: &[u8], b: u8) -> Option<usize> {
    let (pre, mid, post) = haystack.as_simd();

    if let Some(p) = post.iter().rposition(|x| *x == b) {
        Some(pre.len() + (mid.len() * N) + p)
    } else if let Some(p) = rposition_simd::<N, _>(mid, |v| v.simd_eq(Simd::from_array([b; N]))) {
        Some(p + pre.len())
    } else {
        pre.iter().rposition(|x| *x == b)
    }
}

/// Searches the `haystack` using the provided SIMD byte `predicate` returning
/// the index found, or [`None`] otherwise.
///
/// The SIMD lanes `N` and unroll factor `UF` are const parameters that can be
/// used to adjust performance characteristics.
///
/// ## Acknowledgements
///
/// The unrolling algorithm inspired from previous work in the excellent [memchr crate](https://crates.io/crates/memchr).
#[allow(clippy::needless_range_loop)]
#[must_use]
#[inline]
pub fn position_simd<const N: usize, const UF: usize, P>(haystack: &[Simd<u8, N>], predicate: P) -> Option<usize>
where
    P: Fn(Simd<u8, N>) -> Mask<i8, N>, {
    let chunk_size = N * UF;

    let chunks = haystack.chunks_exact(UF);
    let rem = chunks.remainder();
    let mut mask_buffer = [Mask::from_array([false; N]); UF];

    for (i, c) in chunks.enumerate() {
        mask_buffer[0] = predicate(c[0]);
        let mut mask = mask_buffer[0];
        for j in 1..UF {
            mask_buffer[j] = predicate(c[j]);
            mask |= mask_buffer[j];
        }

        if mask.any() {
            let offset = i * chunk_size;

            for j in 0..(UF - 1) {
                if mask_buffer[j].any() {
                    return Some(offset + j * N + mask_buffer[j].bitmask_offset());
                }
            }
            return Some(offset + (UF - 1) * N + mask_buffer[UF - 1].bitmask_offset());
        }
    }

    for (i, &v) in rem.iter().enumerate() {
        let mask = predicate(v);
        if mask.any() {
            return Some(N * (haystack.len() - rem.len()) + (i * N) + mask.bitmask_offset());
        }
    }

    None
}

/// Backward counterpart of [`position_simd`]: index of the last lane matching
/// the `predicate`, or [`None`].
#[must_use]
#[inline]
pub fn rposition_simd<const N: usize, P>(haystack: &[Simd<u8, N>], predicate: P) -> Option<usize>
where
    P: Fn(Simd<u8, N>) -> Mask<i8, N>, {
    for (i, &v) in haystack.iter().enumerate().rev() {
        let mask = predicate(v);
        if mask.any() {
            return Some(i * N + mask.bitmask_offset_from_end() - 1);
        }
    }

    None
}

/// Finds the index of the first byte belonging to `set`, or [`None`].
#[must_use]
#[inline]
pub fn position_in_set(haystack: &[u8], set: &CharSet) -> Option<usize> {
    haystack.iter().position(|b| set.contains(*b))
}

/// Finds the index of the last byte belonging to `set`, or [`None`].
#[must_use]
#[inline]
pub fn rposition_in_set(haystack: &[u8], set: &CharSet) -> Option<usize> {
    haystack.iter().rposition(|b| set.contains(*b))
}

/// Finds the index of the first byte outside `set`, or [`None`].
#[must_use]
#[inline]
pub fn position_not_in_set(haystack: &[u8], set: &CharSet) -> Option<usize> {
    haystack.iter().position(|b| !set.contains(*b))
}

/// Finds the index of the last byte outside `set`, or [`None`].
#[must_use]
#[inline]
pub fn rposition_not_in_set(haystack: &[u8], set: &CharSet) -> Option<usize> {
    haystack.iter().rposition(|b| !set.contains(*b))
}
