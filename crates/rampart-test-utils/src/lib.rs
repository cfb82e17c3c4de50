// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Rampart crates.
//!
//! - [`DropLedger`] / [`Tracked`]: count constructions, clones and drops, and
//!   optionally panic on clone.
//! - [`Fused`]: an element whose `Default` panics after a per-thread budget.
//! - [`NoClone`]: a move-only element.
//! - [`index_permutations`]: exhaustive orderings for order-sensitive tests.
//!
//! ## License
//!
//! GPL-3.0-only

mod fused;
mod permutations;
mod tracked;

pub use fused::Fused;
pub use permutations::index_permutations;
pub use tracked::{DropLedger, Tracked};

/// Element type with no `Clone` implementation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NoClone(pub u32);
