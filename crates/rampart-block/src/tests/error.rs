// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::error::BlockError;

#[test]
fn test_capacity_overflow_display() {
    let error = BlockError::CapacityOverflow { capacity: 42 };

    assert_eq!(
        error.to_string(),
        "capacity overflow: 42 slots exceed the maximum allocation size"
    );
}

#[test]
fn test_allocation_failure_display() {
    let layout = Layout::array::<u32>(4).expect("Failed to Layout::array");
    let error = BlockError::AllocationFailure { layout };

    assert_eq!(
        error.to_string(),
        "allocation failure: 16 bytes with alignment 4"
    );
}
