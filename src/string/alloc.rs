//! Allocation sources for heap-backed string storage.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// An allocation source for [`Twine`](super::Twine) backing blocks.
///
/// Implementations are stateless handles: a fresh `A::default()` must be
/// interchangeable with the instance that performed the original allocation,
/// since blocks may outlive the handle that produced them. Both methods are
/// only called with nonzero sizes.
pub trait Alloc: Default {
    /// Allocates a block of `size` bytes, or [`None`] when the allocator
    /// cannot provide one.
    fn allocate(&self, size: usize) -> Option<NonNull<u8>>;

    /// Releases a block previously produced by [`allocate`](Alloc::allocate)
    /// with this same `size`.
    ///
    /// # Safety
    ///
    /// `ptr` must come from a call to `allocate(size)` on an interchangeable
    /// allocator, and must not be released more than once.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize);
}

/// The process-global allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

impl Alloc for Global {
    #[inline]
    fn allocate(&self, size: usize) -> Option<NonNull<u8>> {
        let layout = Layout::array::<u8>(size).ok()?;
        // SAFETY: callers pass nonzero sizes, so the layout is nonzero-sized.
        NonNull::new(unsafe { alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, size: usize) {
        // SAFETY: the layout matches the one used to allocate, and u8 blocks
        // have alignment 1.
        unsafe {
            alloc::dealloc(ptr.as_ptr(), Layout::from_size_align_unchecked(size, 1));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn global_round_trip() {
        let block = Global.allocate(64).unwrap();
        unsafe {
            block.as_ptr().write_bytes(0xAB, 64);
            assert_eq!(*block.as_ptr().add(63), 0xAB);
            Global.deallocate(block, 64);
        }
    }

    #[test]
    fn global_rejects_absurd_sizes() {
        assert!(Global.allocate(usize::MAX).is_none());
    }
}
