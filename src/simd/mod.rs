use std::simd::prelude::*;

/// Bit-scan helpers for SIMD comparison masks.
pub(crate) trait SimdMaskFunctions<const N: usize> {
    /// Index of the first set lane.
    fn bitmask_offset(&self) -> usize;
    /// One past the index of the last set lane.
    fn bitmask_offset_from_end(&self) -> usize;
}

impl<const N: usize> SimdMaskFunctions<N> for Mask<i8, N> {
    #[must_use]
    #[inline]
    fn bitmask_offset(&self) -> usize {
        self.to_bitmask().trailing_zeros() as usize
    }

    #[must_use]
    #[inline]
    fn bitmask_offset_from_end(&self) -> usize {
        (64 - self.to_bitmask().leading_zeros()) as usize
    }
}
