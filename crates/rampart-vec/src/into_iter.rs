// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use rampart_block::RawBlock;

/// Owning iterator over the elements of a [`RampartVec`](crate::RampartVec).
///
/// Elements in `[start, end)` of the block are still live. Whatever has not
/// been yielded is dropped together with the iterator.
pub struct IntoIter<T> {
    block: RawBlock<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(block: RawBlock<T>, len: usize) -> Self {
        debug_assert!(len <= block.capacity());

        Self {
            block,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) is live; start <= end <= capacity.
        unsafe { slice::from_raw_parts(self.block.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;

        // SAFETY: slot `index` was live and is no longer in the tracked range,
        // so ownership moves to the caller.
        Some(unsafe { ptr::read(self.block.slot(index)) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        // SAFETY: slot `end` was live and is no longer in the tracked range.
        Some(unsafe { ptr::read(self.block.slot(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(self.block.slot_mut(self.start), self.end - self.start);

        // SAFETY: [start, end) is live and owned only by this iterator. The
        // block field releases the memory afterwards.
        unsafe { ptr::drop_in_place(remaining) }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
