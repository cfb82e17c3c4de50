// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-block.

use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur while acquiring raw storage.
///
/// Both variants are resource exhaustion: the block that was being created
/// does not exist, and nothing was allocated.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BlockError {
    /// The requested slot count cannot be expressed as an allocation size
    /// (byte size overflows `isize::MAX`).
    #[error("capacity overflow: {capacity} slots exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of slots that was requested.
        capacity: usize,
    },

    /// The global allocator could not satisfy the request.
    #[error(
        "allocation failure: {} bytes with alignment {}",
        .layout.size(),
        .layout.align()
    )]
    AllocationFailure {
        /// Layout of the failed request.
        layout: Layout,
    },
}
