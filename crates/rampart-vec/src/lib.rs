// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array over manually managed storage.
//!
//! `RampartVec<T>` owns exactly one [`RawBlock<T>`](rampart_block::RawBlock)
//! plus a count of live elements. It takes care of everything the block does
//! not: constructing, cloning, moving and dropping elements, and deciding when
//! to grow.
//!
//! # Core Guarantees
//!
//! - **Geometric growth**: appending to a full vector doubles its capacity
//!   (1 when empty), giving amortized O(1) `push`.
//! - **Strong guarantee on growth and clone paths**: an allocation failure is
//!   returned as [`VecError`] and a panic in element code (`Default`, `Clone`,
//!   constructor closures) is unwound; in both cases the vector is exactly as
//!   it was before the call and nothing leaks.
//! - **Construct in place**: `emplace_back` / `emplace` build the new element in
//!   its final slot before relocating the others, so it is never moved twice.
//! - **No implicit shrink**: capacity only grows. Taking the contents
//!   ([`RampartVec::take`]) is the only way to give storage back.
//!
//! # Bounds policy
//!
//! Indexing through the slice API (`vec[i]`, `get`, iterators) is always
//! bounds-checked. `get_unchecked` and `pop_back` on an empty vector are
//! checked by debug assertions only.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use rampart_vec::{RampartVec, VecError};
//!
//! fn example() -> Result<(), VecError> {
//!     let mut vec = RampartVec::new();
//!
//!     for i in 1u32..=3 {
//!         vec.push(i)?;
//!     }
//!     assert_eq!(vec.capacity(), 4);
//!
//!     vec.insert(0, 0)?;
//!     assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
//!
//!     vec.erase(1);
//!     assert_eq!(vec.as_slice(), &[0, 2, 3]);
//!
//!     vec.resize(5)?;
//!     assert_eq!(vec.as_slice(), &[0, 2, 3, 0, 0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Clone Semantics
//!
//! ```rust
//! use rampart_vec::{RampartVec, VecError};
//!
//! fn example() -> Result<(), VecError> {
//!     let a = RampartVec::try_from_slice(&[1u8, 2, 3])?;
//!     let mut b = RampartVec::with_len(8)?;
//!
//!     // Fits the existing capacity: overwrites in place, capacity is kept.
//!     b.try_clone_from(&a)?;
//!     assert_eq!(b, a);
//!     assert_eq!(b.capacity(), 8);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject failures for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! rampart-vec = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`VecBehaviour`] to make the next allocations fail.
//!
//! # Logging
//!
//! With the `log` feature enabled, relocations are reported as `trace`
//! records under the `rampart_vec` target.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!(target: "rampart_vec", $($arg)+);
    };
}

mod error;
mod init_guard;
mod into_iter;
mod rampart_vec;

#[cfg(test)]
mod tests;

pub use error::VecError;
pub use into_iter::IntoIter;
pub use rampart_vec::RampartVec;

#[cfg(any(test, feature = "test_utils"))]
pub use rampart_vec::VecBehaviour;
