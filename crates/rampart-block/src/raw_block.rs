// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RawBlock - exclusive owner of uninitialized element slots.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::BlockError;

/// A contiguous region of uninitialized memory for exactly `capacity` slots of `T`.
///
/// `RawBlock` knows nothing about which slots hold live values. Dropping it
/// releases the memory without running any element destructor, so the owner
/// must drop or move out live elements first.
///
/// When no memory is held (capacity 0, zero-sized `T`, or after [`take`]),
/// the pointer is a dangling, well-aligned sentinel that is never
/// dereferenced nor passed to the allocator.
///
/// [`take`]: RawBlock::take
pub struct RawBlock<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: RawBlock owns its allocation exclusively, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawBlock<T> {}
unsafe impl<T: Sync> Sync for RawBlock<T> {}

impl<T> RawBlock<T> {
    /// Creates an empty block. Allocates nothing.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for `capacity` slots.
    ///
    /// `capacity == 0` and zero-sized `T` succeed without allocating.
    ///
    /// # Errors
    ///
    /// - [`BlockError::CapacityOverflow`] if `capacity * size_of::<T>()` does not
    ///   fit a valid [`Layout`].
    /// - [`BlockError::AllocationFailure`] if the global allocator returns null.
    ///
    /// On error nothing has been allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, BlockError> {
        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size (checked above).
        let raw = unsafe { alloc(layout) };

        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            #[cfg(feature = "log")]
            log::debug!(
                target: "rampart_block",
                "allocation of {} bytes failed",
                layout.size()
            );
            return Err(BlockError::AllocationFailure { layout });
        };

        trace!("allocated {} slots ({} bytes)", capacity, layout.size());

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the layout used to back `capacity` slots of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockError::CapacityOverflow`] if the size overflows.
    pub fn layout_for(capacity: usize) -> Result<Layout, BlockError> {
        Layout::array::<T>(capacity).map_err(|_| BlockError::CapacityOverflow { capacity })
    }

    /// Number of slots backed by this block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if this block holds memory obtained from the allocator.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0 && core::mem::size_of::<T>() != 0
    }

    /// Layout of the held allocation, or `None` if nothing is held.
    pub fn layout(&self) -> Option<Layout> {
        if !self.is_allocated() {
            return None;
        }

        // The same layout was accepted when the block was allocated.
        Layout::array::<T>(self.capacity).ok()
    }

    /// Base address of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable base address of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `index`.
    ///
    /// `index == capacity` returns the one-past-end address, which must not be
    /// dereferenced. `index > capacity` is a contract violation (debug assert).
    #[inline]
    pub fn slot(&self, index: usize) -> *const T {
        debug_assert!(
            index <= self.capacity,
            "RawBlock::slot: index {index} out of bounds (capacity {})",
            self.capacity
        );

        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Mutable address of slot `index`. Same contract as [`RawBlock::slot`].
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.capacity,
            "RawBlock::slot_mut: index {index} out of bounds (capacity {})",
            self.capacity
        );

        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Returns a reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must hold an initialized `T`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.capacity,
            "RawBlock::get_unchecked: index {index} out of bounds (capacity {})",
            self.capacity
        );

        // SAFETY: caller guarantees the slot is in bounds and initialized.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must hold an initialized `T`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.capacity,
            "RawBlock::get_unchecked_mut: index {index} out of bounds (capacity {})",
            self.capacity
        );

        // SAFETY: caller guarantees the slot is in bounds and initialized.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Moves the allocation out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    /// Exchanges allocations with `other`. Never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.ptr, &mut other.ptr);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawBlock<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout() {
            trace!("released {} slots ({} bytes)", self.capacity, layout.size());

            // SAFETY: ptr came from `alloc` with this exact layout, and ownership is
            // exclusive so it has not been released elsewhere.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> Default for RawBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawBlock<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawBlock")
            .field("capacity", &self.capacity)
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
