// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable arrays that stay intact when things go wrong.</em></p>
//!
//! ---
//!
//! Rampart is a growable array built directly on raw storage blocks. Every
//! operation that can fail, whether the allocator refuses or element code
//! panics, leaves the container exactly as it was.
//!
//! # Features
//!
//! - 🧱 **Two layers**: [`RawBlock`] owns uninitialized slots, [`RampartVec`] owns elements
//! - 🛡️ **Strong guarantee**: growth, insertion and cloning roll back on failure
//! - 📈 **Geometric growth**: capacity doubles (1, 2, 4, 8, ...), amortized O(1) append
//! - 🎯 **Construct in place**: `emplace` / `emplace_back` build in the final slot
//! - 📦 **`no_std` compatible**: only needs `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{RampartVec, VecError};
//!
//! fn main() -> Result<(), VecError> {
//!     let mut names: RampartVec<String> = RampartVec::new();
//!
//!     names.push(String::from("keep"))?;
//!     names.emplace(0, || String::from("moat"))?;
//!     names.emplace_back(|| String::from("wall"))?;
//!     assert_eq!(names.as_slice(), ["moat", "keep", "wall"]);
//!
//!     // Copy-assign reuses storage when it fits.
//!     let mut copy = RampartVec::with_capacity(8)?;
//!     copy.try_clone_from(&names)?;
//!     assert_eq!(copy.capacity(), 8);
//!
//!     names.erase(1);
//!     assert_eq!(names.as_slice(), ["moat", "wall"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Layers
//!
//! - [`block`]: [`RawBlock<T>`](block::RawBlock), a fixed-capacity block of
//!   uninitialized slots. It never constructs or drops elements.
//! - [`vec`]: [`RampartVec<T>`](vec::RampartVec), which tracks how many slots
//!   are live and implements growth, insertion, erasure and cloning.
//!
//! # Failure model
//!
//! Allocation failures are returned as [`VecError`]. Panics raised by
//! `Default`, `Clone` or constructor closures unwind through the container
//! after partially built elements are dropped and new blocks are released.
//!
//! # Testing
//!
//! The `test_utils` feature exposes `VecBehaviour`, which makes a vector's
//! allocations fail on demand:
//!
//! ```toml
//! [dev-dependencies]
//! rampart = { version = "0.1", features = ["test_utils"] }
//! ```
//!
//! # Logging
//!
//! The `log` feature emits `trace` records for every allocation and
//! relocation under the `rampart_block` and `rampart_vec` targets.
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use rampart_block as block;
pub use rampart_vec as vec;

pub use rampart_block::{BlockError, RawBlock};
pub use rampart_vec::{IntoIter, RampartVec, VecError};

#[cfg(feature = "test_utils")]
pub use rampart_vec::VecBehaviour;
