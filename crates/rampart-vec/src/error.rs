// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-vec.

use rampart_block::BlockError;
use thiserror::Error;

/// Error type for `RampartVec` operations that acquire storage.
///
/// Whenever one of these is returned, the vector is exactly as it was before
/// the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VecError {
    /// Acquiring a new storage block failed.
    #[error("BlockError: {0}")]
    Block(#[from] BlockError),
}

/// Unwraps the result of an allocating operation for infallible APIs
/// (`Clone`, `Extend`, `FromIterator`, `From`).
///
/// Allocation failures go to [`alloc::alloc::handle_alloc_error`]; capacity
/// overflow panics.
pub(crate) fn handle_reserve<R>(result: Result<R, VecError>) -> R {
    match result {
        Ok(value) => value,
        Err(VecError::Block(BlockError::AllocationFailure { layout })) => {
            alloc::alloc::handle_alloc_error(layout)
        }
        Err(VecError::Block(BlockError::CapacityOverflow { capacity })) => {
            panic!("capacity overflow: {capacity} slots")
        }
    }
}
