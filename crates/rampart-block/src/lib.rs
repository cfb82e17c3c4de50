// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw, element-agnostic storage for growable containers.
//!
//! This crate provides [`RawBlock<T>`], the owner of one contiguous region of
//! uninitialized memory sized for a fixed number of `T` slots. It allocates,
//! releases, swaps and hands out slot addresses. It never constructs or drops
//! elements: that is the job of the container built on top of it.
//!
//! # Ownership
//!
//! - A block is move-only. There is no `Clone`: copying raw bytes without
//!   knowing which slots are live would duplicate ownership of elements.
//! - [`RawBlock::take`] and [`RawBlock::swap`] transfer ownership in constant
//!   time. A block that has been taken from holds no memory, so dropping it is
//!   a no-op and a double release cannot happen.
//! - A block with capacity 0, or over a zero-sized `T`, never allocates.
//!
//! # Slot access
//!
//! [`RawBlock::slot`] and [`RawBlock::slot_mut`] return the address of a slot.
//! `index == capacity` is allowed and yields the one-past-end sentinel, which
//! must never be dereferenced. Larger indices are a contract violation caught
//! by `debug_assert!` only.
//!
//! # Example
//!
//! ```rust
//! use rampart_block::{BlockError, RawBlock};
//!
//! fn example() -> Result<(), BlockError> {
//!     let mut block = RawBlock::<u32>::try_with_capacity(4)?;
//!     assert_eq!(block.capacity(), 4);
//!
//!     unsafe {
//!         // SAFETY: slot 0 is in bounds and uninitialized; u32 needs no drop.
//!         block.slot_mut(0).write(7);
//!         assert_eq!(*block.get_unchecked(0), 7);
//!     }
//!
//!     let moved = block.take();
//!     assert_eq!(moved.capacity(), 4);
//!     assert_eq!(block.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! With the `log` feature enabled, allocations and releases are reported as
//! `trace` records under the `rampart_block` target.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!(target: "rampart_block", $($arg)+);
    };
}

mod error;
mod raw_block;

#[cfg(test)]
mod tests;

pub use error::BlockError;
pub use raw_block::RawBlock;
