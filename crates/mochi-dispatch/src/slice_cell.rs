//! Shared slice with disjoint-index mutation.
//!
//! The simulation passes mutate per-vertex arrays from several workers at
//! once, but each index is touched by exactly one worker (chunks from
//! [`crate::chunk_ranges`] never overlap). `SliceCell` encodes that
//! contract: it is `Sync`, and handing out `&mut T` for an index is unsafe
//! with exactly that disjointness obligation on the caller.

use std::marker::PhantomData;

/// A borrowed slice that multiple threads may mutate at disjoint indices.
pub struct SliceCell<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: access is only possible through the unsafe index methods, whose
// contract forbids two threads touching the same index.
unsafe impl<T: Send> Sync for SliceCell<'_, T> {}
unsafe impl<T: Send> Send for SliceCell<'_, T> {}

impl<'a, T> SliceCell<'a, T> {
    /// Wraps a mutable slice for disjoint multi-threaded access.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Slice length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the underlying slice is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds, and no other thread may access the same
    /// index while the returned reference is live.
    #[inline]
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn get_mut(&self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        unsafe { &mut *self.ptr.add(index) }
    }

    /// Returns a shared reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds, and no other thread may mutate the same
    /// index while the returned reference is live.
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { &*self.ptr.add(index) }
    }
}
