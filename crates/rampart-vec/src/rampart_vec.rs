// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut};
use core::ptr;
use core::slice;

use rampart_block::{BlockError, RawBlock};

use crate::error::{VecError, handle_reserve};
use crate::init_guard::InitGuard;
use crate::into_iter::IntoIter;

/// Test behaviour for injecting failures in `RampartVec` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use rampart_vec::{RampartVec, VecBehaviour, VecError};
///
///     #[test]
///     fn test_handles_allocation_failure() -> Result<(), VecError> {
///         let mut vec = RampartVec::new();
///         vec.change_behaviour(VecBehaviour::FailAtAllocate);
///
///         // Growing needs a new block, which now fails
///         assert!(vec.push(1u8).is_err());
///
///         vec.change_behaviour(VecBehaviour::None);
///         vec.push(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every operation that needs a new block fails with
    /// [`BlockError::AllocationFailure`].
    FailAtAllocate,
}

/// A growable array built directly on a [`RawBlock`].
///
/// Slots `[0, len)` hold live elements and slots `[len, capacity)` are
/// uninitialized. Appending grows capacity geometrically (1, 2, 4, 8, ...).
/// Capacity never shrinks on its own.
///
/// # Failure model
///
/// Operations that may need a new block return `Result<_, VecError>`. Element
/// code (`Default`, `Clone`, constructor closures) may panic. In both cases the
/// vector is left as it was before the call: partially built elements are
/// dropped and a freshly allocated block is released before the failure
/// propagates.
///
/// # Example
///
/// ```rust
/// use rampart_vec::{RampartVec, VecError};
///
/// fn example() -> Result<(), VecError> {
///     let mut vec = RampartVec::new();
///     vec.push(1u32)?;
///     vec.push(2)?;
///     vec.push(3)?;
///
///     assert_eq!(vec.len(), 3);
///     assert_eq!(vec.capacity(), 4);
///     assert_eq!(vec.as_slice(), &[1, 2, 3]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct RampartVec<T> {
    block: RawBlock<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: VecBehaviour,
}

impl<T> RampartVec<T> {
    fn from_parts(block: RawBlock<T>, len: usize) -> Self {
        debug_assert!(len <= block.capacity());

        Self {
            block,
            len,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: VecBehaviour::None,
        }
    }

    fn allocate(&self, capacity: usize) -> Result<RawBlock<T>, VecError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, VecBehaviour::FailAtAllocate) {
            let layout = RawBlock::<T>::layout_for(capacity)?;
            return Err(BlockError::AllocationFailure { layout }.into());
        }

        Ok(RawBlock::try_with_capacity(capacity)?)
    }

    /// Capacity for the next geometric growth step: doubled, or 1 when empty.
    fn grown_capacity(&self) -> Result<usize, VecError> {
        let capacity = self.capacity();
        let grown = if capacity == 0 {
            1
        } else {
            capacity.saturating_mul(2)
        };

        // Only reachable for zero-sized T at usize::MAX elements.
        if grown <= self.len {
            return Err(BlockError::CapacityOverflow { capacity: grown }.into());
        }

        Ok(grown)
    }

    /// Moves every live element into the same index of `block`, then adopts it.
    fn relocate_into(&mut self, mut block: RawBlock<T>) {
        debug_assert!(block.capacity() >= self.len);

        trace!(
            "relocating {} elements: capacity {} -> {}",
            self.len,
            self.capacity(),
            block.capacity()
        );

        // SAFETY: [0, len) is live in the current block; the first len slots of
        // `block` are uninitialized and belong to a different allocation.
        unsafe { ptr::copy_nonoverlapping(self.block.as_ptr(), block.as_mut_ptr(), self.len) }

        // The old block now only holds moved-from bits; dropping it frees memory.
        self.block.swap(&mut block);
    }

    /// Like `relocate_into`, but leaves slot `gap` of `block` untouched and
    /// shifts `[gap, len)` one slot up.
    fn relocate_around(&mut self, mut block: RawBlock<T>, gap: usize) {
        debug_assert!(gap < self.len);
        debug_assert!(block.capacity() > self.len);

        trace!(
            "relocating {} elements around slot {}: capacity {} -> {}",
            self.len,
            gap,
            self.capacity(),
            block.capacity()
        );

        let src = self.block.as_ptr();
        let dst = block.as_mut_ptr();

        // SAFETY: both ranges are live in the source and land in uninitialized,
        // non-overlapping slots of `block` (slot `gap` is skipped).
        unsafe {
            ptr::copy_nonoverlapping(src, dst, gap);
            ptr::copy_nonoverlapping(src.add(gap), dst.add(gap + 1), self.len - gap);
        }

        self.block.swap(&mut block);
    }

    /// Clones `src` into a new vector whose block comes from `self`'s allocator path.
    fn clone_slice(&self, src: &[T]) -> Result<Self, VecError>
    where
        T: Clone,
    {
        let mut block = self.allocate(src.len())?;

        let mut guard = InitGuard::new(&mut block, 0);
        for item in src {
            guard.push(item.clone());
        }
        guard.finish();

        Ok(Self::from_parts(block, src.len()))
    }

    /// Creates a new empty `RampartVec`. Allocates nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_vec::RampartVec;
    ///
    /// let vec: RampartVec<u8> = RampartVec::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            block: RawBlock::new(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: VecBehaviour::None,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if the storage cannot be acquired.
    pub fn with_capacity(capacity: usize) -> Result<Self, VecError> {
        let block = Self::new().allocate(capacity)?;
        Ok(Self::from_parts(block, 0))
    }

    /// Creates a vector of `len` default-valued elements.
    ///
    /// Both `len()` and `capacity()` equal `len` afterwards. If `T::default()`
    /// panics partway, the elements built so far are dropped and the block is
    /// released before the panic continues.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if the storage cannot be acquired.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_vec::{RampartVec, VecError};
    ///
    /// fn example() -> Result<(), VecError> {
    ///     let vec = RampartVec::<u16>::with_len(3)?;
    ///
    ///     assert_eq!(vec.as_slice(), &[0, 0, 0]);
    ///     assert_eq!(vec.capacity(), 3);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn with_len(len: usize) -> Result<Self, VecError>
    where
        T: Default,
    {
        let mut block = Self::new().allocate(len)?;

        let mut guard = InitGuard::new(&mut block, 0);
        for _ in 0..len {
            guard.push(T::default());
        }
        guard.finish();

        Ok(Self::from_parts(block, len))
    }

    /// Creates a vector holding clones of `src`, with capacity `src.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if the storage cannot be acquired.
    pub fn try_from_slice(src: &[T]) -> Result<Self, VecError>
    where
        T: Clone,
    {
        Self::new().clone_slice(src)
    }

    /// Clones the vector into a new block sized to `len()`.
    ///
    /// A panic in `T::clone` drops the clones made so far and releases the new
    /// block; `self` is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if the storage cannot be acquired.
    pub fn try_clone(&self) -> Result<Self, VecError>
    where
        T: Clone,
    {
        self.clone_slice(self.as_slice())
    }

    /// Replaces the contents with clones of `rhs`.
    ///
    /// - If `rhs` does not fit the current capacity, a complete clone is built
    ///   first and swapped in; on failure `self` is unchanged.
    /// - Otherwise live elements are overwritten with `clone_from`, the extra
    ///   elements of `rhs` are cloned into the uninitialized tail, and surplus
    ///   elements of `self` are dropped.
    ///
    /// Capacity never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if a larger block is needed and cannot be
    /// acquired.
    pub fn try_clone_from(&mut self, rhs: &Self) -> Result<(), VecError>
    where
        T: Clone,
    {
        self.try_clone_from_slice(rhs.as_slice())
    }

    /// Slice form of [`RampartVec::try_clone_from`].
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if a larger block is needed and cannot be
    /// acquired.
    pub fn try_clone_from_slice(&mut self, rhs: &[T]) -> Result<(), VecError>
    where
        T: Clone,
    {
        if rhs.len() > self.capacity() {
            let mut fresh = self.clone_slice(rhs)?;
            self.swap(&mut fresh);
            // `fresh` now holds the previous contents and drops them here.
            return Ok(());
        }

        if rhs.len() < self.len {
            self.as_mut_slice()[..rhs.len()].clone_from_slice(rhs);
            self.truncate(rhs.len());
            return Ok(());
        }

        let (overlap, tail) = rhs.split_at(self.len);
        self.as_mut_slice().clone_from_slice(overlap);

        let start = self.len;
        let mut guard = InitGuard::new(&mut self.block, start);
        for item in tail {
            guard.push(item.clone());
        }
        self.len += guard.finish();

        Ok(())
    }

    /// Moves the contents out, leaving `self` with length and capacity 0.
    ///
    /// Constant time; no element is touched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_vec::{RampartVec, VecError};
    ///
    /// fn example() -> Result<(), VecError> {
    ///     let mut a = RampartVec::new();
    ///     a.push(7u8)?;
    ///
    ///     let b = a.take();
    ///
    ///     assert_eq!(b.as_slice(), &[7]);
    ///     assert_eq!(a.len(), 0);
    ///     assert_eq!(a.capacity(), 0);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn take(&mut self) -> Self {
        let len = core::mem::replace(&mut self.len, 0);
        Self::from_parts(self.block.take(), len)
    }

    /// Exchanges contents (block and length) with `other`. Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.block.swap(&mut other.block);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Ensures capacity for at least `new_capacity` elements.
    ///
    /// Does nothing if the current capacity suffices. Otherwise allocates
    /// exactly `new_capacity` slots and moves every element there.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if the storage cannot be acquired; the
    /// vector is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), VecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let block = self.allocate(new_capacity)?;
        self.relocate_into(block);

        Ok(())
    }

    /// Resizes to `new_len` elements.
    ///
    /// Shrinking drops the trailing elements and keeps capacity. Growing
    /// reserves exactly `new_len` slots if needed and appends default values;
    /// if `T::default()` panics, the appended elements are dropped again and
    /// the length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if growing needs storage that cannot be
    /// acquired.
    pub fn resize(&mut self, new_len: usize) -> Result<(), VecError>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        self.reserve(new_len)?;

        let start = self.len;
        let mut guard = InitGuard::new(&mut self.block, start);
        for _ in start..new_len {
            guard.push(T::default());
        }
        self.len += guard.finish();

        Ok(())
    }

    /// Drops every element past `new_len`. Capacity is kept.
    ///
    /// Does nothing if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(self.block.slot_mut(new_len), self.len - new_len);
        self.len = new_len;

        // SAFETY: the tail was live and is no longer counted by `len`, so a
        // panicking destructor cannot lead to a second drop.
        unsafe { ptr::drop_in_place(tail) }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if growth is needed and fails; the vector
    /// is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<&mut T, VecError> {
        self.emplace_back(|| value)
    }

    /// Constructs a value with `f` directly at the end and returns a reference to it.
    ///
    /// When full, the vector grows to twice its capacity (1 when empty). The
    /// new element is constructed in its final slot of the new block before
    /// anything is relocated, so a failing allocation or a panic in `f` leaves
    /// the vector unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if growth is needed and fails. `f` is not
    /// called in that case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_vec::{RampartVec, VecError};
    ///
    /// fn example() -> Result<(), VecError> {
    ///     let mut vec: RampartVec<String> = RampartVec::new();
    ///
    ///     let s = vec.emplace_back(|| String::from("rampart"))?;
    ///     s.push('!');
    ///
    ///     assert_eq!(vec[0], "rampart!");
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn emplace_back<F>(&mut self, f: F) -> Result<&mut T, VecError>
    where
        F: FnOnce() -> T,
    {
        let index = self.len;

        if self.len == self.capacity() {
            let mut block = self.allocate(self.grown_capacity()?)?;

            // SAFETY: index < new capacity and the slot is uninitialized. If `f`
            // panics, `block` is released and `self` is untouched.
            unsafe { block.slot_mut(index).write(f()) }

            self.relocate_into(block);
        } else {
            // SAFETY: len < capacity, so slot `index` exists and is uninitialized.
            unsafe { self.block.slot_mut(index).write(f()) }
        }

        self.len += 1;

        // SAFETY: slot `index` was initialized above and index < len.
        Ok(unsafe { self.block.get_unchecked_mut(index) })
    }

    /// Drops the last element.
    ///
    /// The vector must not be empty; this is checked by a debug assertion
    /// only. In release builds, calling it on an empty vector does nothing.
    /// Never reallocates.
    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "RampartVec::pop_back: vector is empty");

        if self.len == 0 {
            return;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is no longer counted.
        unsafe { ptr::drop_in_place(self.block.slot_mut(self.len)) }
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is no longer counted, so ownership
        // moves to the caller.
        Some(unsafe { ptr::read(self.block.slot(self.len)) })
    }

    /// Inserts `value` at `index`, shifting later elements up by one.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if growth is needed and fails; the vector
    /// is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, VecError> {
        self.emplace(index, || value)
    }

    /// Constructs a value with `f` at `index`, shifting later elements up by one.
    ///
    /// `index == len()` is an append. Otherwise:
    ///
    /// - when full, a block of twice the capacity is allocated, the new value
    ///   is constructed in its final slot, and the elements before and after
    ///   `index` are moved around it;
    /// - when there is room, the value is built first, then the tail is
    ///   shifted and the value is written into the gap.
    ///
    /// Either way a failure leaves the vector unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VecError::Block`] if growth is needed and fails.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart_vec::{RampartVec, VecError};
    ///
    /// fn example() -> Result<(), VecError> {
    ///     let mut vec = RampartVec::try_from_slice(&['a', 'b', 'c'])?;
    ///
    ///     vec.emplace(0, || 'v')?;
    ///     vec.emplace(0, || 'w')?;
    ///
    ///     assert_eq!(vec.as_slice(), &['w', 'v', 'a', 'b', 'c']);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, VecError>
    where
        F: FnOnce() -> T,
    {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        if index == self.len {
            return self.emplace_back(f);
        }

        if self.len == self.capacity() {
            let mut block = self.allocate(self.grown_capacity()?)?;

            // SAFETY: index < len < new capacity and the slot is uninitialized.
            // If `f` panics, `block` is released and `self` is untouched.
            unsafe { block.slot_mut(index).write(f()) }

            self.relocate_around(block, index);
        } else {
            let value = f();
            let count = self.len - index;
            let gap = self.block.slot_mut(index);

            // SAFETY: len < capacity, so `[index + 1, len + 1)` is in bounds.
            // The overlapping copy moves the live tail up by one; `gap` is then
            // logically uninitialized and receives `value`.
            unsafe {
                ptr::copy(gap, gap.add(1), count);
                gap.write(value);
            }
        }

        self.len += 1;

        // SAFETY: slot `index` was initialized above and index < len.
        Ok(unsafe { self.block.get_unchecked_mut(index) })
    }

    /// Removes and returns the element at `index`, shifting later elements down.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );

        let count = self.len - index - 1;
        let hole = self.block.slot_mut(index);

        // SAFETY: index < len, so the slot is live. After reading it out the
        // slot is logically uninitialized and the overlapping copy closes the
        // hole; the last slot then holds a stale duplicate excluded by `len`.
        unsafe {
            let value = ptr::read(hole);
            ptr::copy(hole.add(1), hole, count);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at `index` and closes the gap.
    ///
    /// Returns the index now holding the element that followed the erased
    /// one, which equals `len()` if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots backed by storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live and the pointer is non-null and aligned even
        // when nothing is allocated.
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }

    /// Returns a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr(), self.len) }
    }

    /// Base pointer of the storage block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }

    /// Mutable base pointer of the storage block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr()
    }

    /// Returns a reference to the element at `index` without bounds checking
    /// in release builds.
    ///
    /// # Safety
    ///
    /// `index < len()`. Violations are caught by a debug assertion only.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "RampartVec::get_unchecked: index {index} out of bounds (len {})",
            self.len
        );

        // SAFETY: caller guarantees index < len, so the slot is live.
        unsafe { self.block.get_unchecked(index) }
    }

    /// Mutable counterpart of [`RampartVec::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `index < len()`. Violations are caught by a debug assertion only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "RampartVec::get_unchecked_mut: index {index} out of bounds (len {})",
            self.len
        );

        // SAFETY: caller guarantees index < len, so the slot is live.
        unsafe { self.block.get_unchecked_mut(index) }
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: VecBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> Drop for RampartVec<T> {
    fn drop(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.block.as_mut_ptr(), self.len);

        // SAFETY: [0, len) is live and dropped exactly once; the block field
        // releases the memory afterwards, even if a destructor panics.
        unsafe { ptr::drop_in_place(live) }
    }
}

impl<T> Default for RampartVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RampartVec<T> {
    fn clone(&self) -> Self {
        handle_reserve(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        handle_reserve(self.try_clone_from(source))
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for RampartVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RampartVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for RampartVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for RampartVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for RampartVec<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for RampartVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Deref for RampartVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for RampartVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for RampartVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for RampartVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for RampartVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower, _) = iter.size_hint();
        if lower > self.capacity() - self.len {
            handle_reserve(self.reserve(self.len.saturating_add(lower)));
        }

        for item in iter {
            handle_reserve(self.push(item));
        }
    }
}

impl<T> FromIterator<T> for RampartVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&[T]> for RampartVec<T> {
    fn from(src: &[T]) -> Self {
        handle_reserve(Self::try_from_slice(src))
    }
}

impl<T> IntoIterator for RampartVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = core::mem::replace(&mut self.len, 0);
        IntoIter::new(self.block.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a RampartVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RampartVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
