//! Owned byte strings with small-buffer optimization.

use crate::{distance, err::MemoryError, view::ByteStr};
use std::{
    marker::PhantomData,
    ops::{Bound, RangeBounds},
    ptr::{self, NonNull},
};

/// Bytes storable without touching the allocator.
const INLINE_CAP: usize = 23;

/// Storage for [`Twine`].
///
/// Invariants: an inline `len` never exceeds [`INLINE_CAP`]; a heap `ptr`
/// always refers to a live block of `cap` bytes obtained from the configured
/// allocator, with `len < cap` so one spare byte always trails the contents.
enum Repr {
    Inline { len: u8, buf: [u8; INLINE_CAP] },
    Heap { ptr: NonNull<u8>, len: usize, cap: usize },
}

/// [`Twine`] is an owned, mutable byte string occupying four machine words.
/// Strings up to [`INLINE_CAPACITY`](Twine::INLINE_CAPACITY) bytes live
/// directly inside the value; longer ones move to a single heap block.
///
/// Every operation that may allocate is fallible and reports a
/// [`MemoryError`] instead of aborting, leaving the string unchanged on
/// failure. Once a string has moved to the heap it stays there: shortening
/// operations never migrate contents back inline, so pointers obtained after
/// a shrink remain stable.
///
/// The allocator is a type parameter with a stateless contract, so the
/// string stores no allocator handle at runtime.
///
/// ## Example
///
/// ```
/// # use twine::prelude::*;
/// # fn main() -> Result<(), MemoryError> {
/// let mut s = Twine::new();
/// s.try_append("small")?;
/// assert!(s.is_inline());
/// s.try_append(" string that now spills onto the heap")?;
/// assert!(s.is_heap());
/// assert!(s.as_view().contains("spills"));
/// # Ok(())
/// # }
/// ```
pub struct Twine<A: Alloc = Global> {
    repr:  Repr,
    alloc: PhantomData<A>,
}

#[cfg(target_pointer_width = "64")]
const _: () = assert!(size_of::<Twine>() == 32);

// SAFETY: the heap block is uniquely owned by the value and only reachable
// through it.
unsafe impl<A: Alloc + Send> Send for Twine<A> {}
unsafe impl<A: Alloc + Sync> Sync for Twine<A> {}

impl Twine {
    /// Largest length stored without heap allocation.
    pub const INLINE_CAPACITY: usize = INLINE_CAP;

    /// Creates an empty string using the global allocator.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::empty()
    }

    /// Creates an empty string able to hold at least `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when the backing block cannot be allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, MemoryError> {
        let mut new = Self::empty();
        new.grow(capacity)?;
        Ok(new)
    }

    /// Creates a string of `length` bytes sampled uniformly from `alphabet`,
    /// derived from `seed`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when the backing block cannot be allocated.
    ///
    /// # Panics
    ///
    /// Panics when `alphabet` is empty.
    #[cfg(feature = "rand")]
    pub fn try_random(length: usize, alphabet: impl AsRef<[u8]>, seed: u64) -> Result<Self, MemoryError> {
        use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

        let mut new = Self::empty();
        new.try_resize(length, 0)?;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        crate::generate::fill_random(new.as_bytes_mut(), alphabet.as_ref(), &mut rng);
        Ok(new)
    }
}

impl<A: Alloc> Twine<A> {
    const fn empty() -> Self {
        Twine {
            repr:  Repr::Inline { len: 0, buf: [0; INLINE_CAP] },
            alloc: PhantomData,
        }
    }

    // std

    /// The length of the stored string in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len as usize,
            Repr::Heap { len, .. } => *len,
        }
    }

    /// Whether the string is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the contents live inside the value itself.
    #[inline]
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline { .. })
    }

    /// Whether the contents live in an allocated block.
    #[inline]
    #[must_use]
    pub const fn is_heap(&self) -> bool {
        matches!(self.repr, Repr::Heap { .. })
    }

    /// Bytes the string can hold before the next allocation.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => INLINE_CAP,
            Repr::Heap { cap, .. } => *cap - 1,
        }
    }

    /// Size of the current backing block, counting the spare byte.
    const fn block_size(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => INLINE_CAP + 1,
            Repr::Heap { cap, .. } => *cap,
        }
    }

    /// Pointer to the first stored byte.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const u8 {
        match &self.repr {
            Repr::Inline { buf, .. } => buf.as_ptr(),
            Repr::Heap { ptr, .. } => ptr.as_ptr(),
        }
    }

    /// Mutable pointer to the first stored byte.
    #[inline]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        match &mut self.repr {
            Repr::Inline { buf, .. } => buf.as_mut_ptr(),
            Repr::Heap { ptr, .. } => ptr.as_ptr(),
        }
    }

    /// The stored bytes as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.repr {
            Repr::Inline { len, buf } => &buf[..*len as usize],
            // SAFETY: the heap invariant keeps len bytes initialized and live.
            Repr::Heap { ptr, len, .. } => unsafe { std::slice::from_raw_parts(ptr.as_ptr(), *len) },
        }
    }

    /// The stored bytes as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        match &mut self.repr {
            Repr::Inline { len, buf } => &mut buf[..*len as usize],
            // SAFETY: the heap invariant keeps len bytes initialized and live,
            // and &mut self grants exclusive access.
            Repr::Heap { ptr, len, .. } => unsafe { std::slice::from_raw_parts_mut(ptr.as_ptr(), *len) },
        }
    }

    /// A borrowed [`ByteStr`] over the stored bytes, carrying the full
    /// search and classification surface.
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> ByteStr<'_> {
        ByteStr::new(self.as_bytes())
    }

    /// Sets the stored length without touching contents.
    ///
    /// # Safety
    ///
    /// `new_len` must not exceed the capacity of the current representation,
    /// and bytes below it must be initialized.
    #[allow(clippy::cast_possible_truncation)]
    unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        match &mut self.repr {
            Repr::Inline { len, .. } => *len = new_len as u8,
            Repr::Heap { len, .. } => *len = new_len,
        }
    }

    // Growth

    /// Ensures capacity for at least `additional` bytes beyond the current
    /// length. On failure the string is untouched.
    fn grow(&mut self, additional: usize) -> Result<(), MemoryError> {
        let required = self.len().checked_add(additional).ok_or(MemoryError::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let minimum = required.checked_add(1).ok_or(MemoryError::CapacityOverflow)?;
        let block = minimum.max(self.block_size().saturating_mul(2));
        let new_ptr = A::default().allocate(block).ok_or(MemoryError::AllocationFailed { size: block })?;
        // SAFETY: the new block holds at least len + 1 bytes and cannot
        // overlap the old storage.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), new_ptr.as_ptr(), self.len());
        }
        let len = self.len();
        self.release();
        self.repr = Repr::Heap { ptr: new_ptr, len, cap: block };
        Ok(())
    }

    /// Returns any heap block to the allocator without updating `repr`; the
    /// caller must overwrite or discard `self.repr` afterwards.
    fn release(&mut self) {
        if let Repr::Heap { ptr, cap, .. } = &self.repr {
            // SAFETY: the block came from A::allocate(cap) and is released
            // exactly once.
            unsafe {
                A::default().deallocate(*ptr, *cap);
            }
        }
    }

    /// Ensures spare capacity for at least `additional` more bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when the larger block cannot be allocated.
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), MemoryError> {
        self.grow(additional)
    }

    // Mutation

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when growth is needed and fails; the string
    /// is unchanged in that case.
    pub fn try_push(&mut self, byte: u8) -> Result<(), MemoryError> {
        self.grow(1)?;
        let len = self.len();
        // SAFETY: grow reserved at least one writable byte past len.
        unsafe {
            self.as_mut_ptr().add(len).write(byte);
            self.set_len(len + 1);
        }
        Ok(())
    }

    /// Appends a byte string.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when growth is needed and fails; the string
    /// is unchanged in that case.
    pub fn try_append(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), MemoryError> {
        let bytes = bytes.as_ref();
        self.grow(bytes.len())?;
        let len = self.len();
        // SAFETY: grow reserved bytes.len() writable bytes past len, and a
        // borrowed source cannot alias the writable region.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.as_mut_ptr().add(len), bytes.len());
            self.set_len(len + bytes.len());
        }
        Ok(())
    }

    /// Replaces the contents with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when growth is needed and fails; the string
    /// is unchanged in that case.
    pub fn try_assign(&mut self, bytes: impl AsRef<[u8]>) -> Result<(), MemoryError> {
        let bytes = bytes.as_ref();
        self.grow(bytes.len().saturating_sub(self.len()))?;
        // SAFETY: capacity now covers bytes.len(), and a borrowed source
        // cannot alias the writable region.
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), self.as_mut_ptr(), bytes.len());
            self.set_len(bytes.len());
        }
        Ok(())
    }

    /// Grows or shrinks to `new_len`, filling fresh bytes with `fill`.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when growth is needed and fails; the string
    /// is unchanged in that case.
    pub fn try_resize(&mut self, new_len: usize, fill: u8) -> Result<(), MemoryError> {
        let len = self.len();
        if new_len <= len {
            // SAFETY: shrinking stays within initialized bytes.
            unsafe { self.set_len(new_len) };
        } else {
            self.grow(new_len - len)?;
            // SAFETY: grow reserved new_len - len writable bytes past len.
            unsafe {
                self.as_mut_ptr().add(len).write_bytes(fill, new_len - len);
                self.set_len(new_len);
            }
        }
        Ok(())
    }

    /// Copies the contents into a fresh string.
    ///
    /// # Errors
    ///
    /// Returns a [`MemoryError`] when the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, MemoryError> {
        let mut copy = Self::empty();
        copy.try_assign(self.as_bytes())?;
        Ok(copy)
    }

    /// Removes the bytes in `range`, shifting any tail left. Capacity is
    /// retained.
    ///
    /// # Panics
    ///
    /// Panics when the range falls outside the string or is decreasing.
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.checked_add(1).unwrap_or(usize::MAX),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.checked_add(1).unwrap_or(usize::MAX),
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => len,
        };
        assert!(start <= end && end <= len, "erase range out of bounds");
        if start == end {
            return;
        }
        // SAFETY: start..end lies within the initialized region; the tail
        // move stays in bounds and ptr::copy permits overlap.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base.add(end), base.add(start), len - end);
            self.set_len(len - (end - start));
        }
    }

    /// Shortens to `new_len`; does nothing when already shorter. Capacity is
    /// retained.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            // SAFETY: shrinking stays within initialized bytes.
            unsafe { self.set_len(new_len) };
        }
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let byte = self.as_bytes()[len - 1];
        // SAFETY: shrinking by one initialized byte.
        unsafe { self.set_len(len - 1) };
        Some(byte)
    }

    /// Removes all bytes. Capacity is retained.
    pub fn clear(&mut self) {
        // SAFETY: zero is always a valid length.
        unsafe { self.set_len(0) };
    }

    /// Overwrites every stored byte with one sampled uniformly from
    /// `alphabet`. The length does not change.
    ///
    /// # Panics
    ///
    /// Panics when `alphabet` is empty.
    #[cfg(feature = "rand")]
    pub fn randomize(&mut self, alphabet: impl AsRef<[u8]>, rng: &mut impl rand_xoshiro::rand_core::RngCore) {
        crate::generate::fill_random(self.as_bytes_mut(), alphabet.as_ref(), rng);
    }

    // Derived values

    /// The Levenshtein edit distance to `other`.
    #[inline]
    #[must_use]
    pub fn edit_distance(&self, other: impl AsRef<[u8]>) -> usize {
        distance::levenshtein(self.as_bytes(), other.as_ref())
    }

    /// The Levenshtein edit distance to `other`, or [`None`] when it exceeds
    /// `bound`.
    #[inline]
    #[must_use]
    pub fn edit_distance_bounded(&self, other: impl AsRef<[u8]>, bound: usize) -> Option<usize> {
        distance::levenshtein_bounded(self.as_bytes(), other.as_ref(), bound)
    }
}

impl<A: Alloc> Drop for Twine<A> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<A: Alloc> Clone for Twine<A> {
    /// # Panics
    ///
    /// Panics when the allocator cannot provide a block for the copy; use
    /// [`try_clone`](Twine::try_clone) to keep the failure recoverable.
    fn clone(&self) -> Self {
        self.try_clone().expect("allocation failed while cloning")
    }
}

impl<A: Alloc> Default for Twine<A> {
    fn default() -> Self {
        Self::empty()
    }
}

mod alloc;
#[cfg(test)]
mod bench;

mod std_traits;

pub use alloc::*;
#[allow(unused_imports)]
pub use std_traits::*;
