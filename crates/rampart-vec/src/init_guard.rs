// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unwind guard for sequential construction into uninitialized slots.

use core::ptr;

use rampart_block::RawBlock;

/// Tracks elements written into `block[start..start + initialized]`.
///
/// If construction unwinds before [`InitGuard::finish`], the guard drops every
/// element it wrote, leaving those slots uninitialized again. The block itself
/// is not released here: its owner does that.
pub(crate) struct InitGuard<'a, T> {
    block: &'a mut RawBlock<T>,
    start: usize,
    initialized: usize,
}

impl<'a, T> InitGuard<'a, T> {
    /// Starts tracking at `start`. Slots `start..` must be uninitialized.
    pub(crate) fn new(block: &'a mut RawBlock<T>, start: usize) -> Self {
        Self {
            block,
            start,
            initialized: 0,
        }
    }

    /// Writes `value` into the next uninitialized slot.
    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        let index = self.start + self.initialized;

        debug_assert!(
            index < self.block.capacity(),
            "InitGuard::push: slot {index} beyond capacity {}",
            self.block.capacity()
        );

        // SAFETY: callers size the block so every tracked slot is in bounds, and
        // each slot past `start` is written exactly once.
        unsafe { self.block.slot_mut(index).write(value) }
        self.initialized += 1;
    }

    /// Commits the written elements and returns how many there are.
    ///
    /// Ownership of those elements passes to the caller, who must account for
    /// them in its length.
    #[inline]
    pub(crate) fn finish(self) -> usize {
        let initialized = self.initialized;
        core::mem::forget(self);
        initialized
    }
}

impl<T> Drop for InitGuard<'_, T> {
    fn drop(&mut self) {
        let written = ptr::slice_from_raw_parts_mut(self.block.slot_mut(self.start), self.initialized);

        // SAFETY: exactly `initialized` slots from `start` were written by `push`
        // and nothing else owns them.
        unsafe { ptr::drop_in_place(written) }
    }
}
