// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element code that panics must leave the vector as it was and leak nothing.

use std::panic::{AssertUnwindSafe, catch_unwind};

use rampart_test_utils::{DropLedger, Fused, Tracked};

use crate::RampartVec;

fn tracked(ledger: &DropLedger, values: &[u32]) -> RampartVec<Tracked<u32>> {
    values.iter().map(|v| ledger.track(*v)).collect()
}

fn values(vec: &RampartVec<Tracked<u32>>) -> Vec<u32> {
    vec.iter().map(|t| *t.value()).collect()
}

// =============================================================================
// Default panics
// =============================================================================

#[test]
fn test_with_len_default_panic_drops_partial() {
    let before = Fused::live();
    Fused::arm(3);

    let result = catch_unwind(|| RampartVec::<Fused>::with_len(5));
    Fused::disarm();

    assert!(result.is_err());
    assert_eq!(Fused::live(), before);
}

#[test]
fn test_resize_default_panic_keeps_len() {
    let before = Fused::live();
    let mut vec = RampartVec::new();
    vec.push(Fused::new(1)).expect("Failed to push(..)");
    vec.push(Fused::new(2)).expect("Failed to push(..)");

    Fused::arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| vec.resize(6)));
    Fused::disarm();

    assert!(result.is_err());
    assert_eq!(vec.as_slice(), [Fused::new(1), Fused::new(2)]);
    assert_eq!(Fused::live(), before + 2);
}

// =============================================================================
// Clone panics
// =============================================================================

#[test]
fn test_try_clone_panic_leaves_source_intact() {
    let ledger = DropLedger::new();
    let mut vec = tracked(&ledger, &[1, 2]);
    vec.push(ledger.track_fragile(3)).expect("Failed to push(..)");

    let result = catch_unwind(AssertUnwindSafe(|| vec.try_clone()));

    assert!(result.is_err());
    assert_eq!(values(&vec), [1, 2, 3]);
    assert_eq!(ledger.live(), 3);
}

#[test]
fn test_try_clone_from_panic_on_growth_path() {
    let ledger = DropLedger::new();
    let mut src = tracked(&ledger, &[1, 2]);
    src.push(ledger.track_fragile(3)).expect("Failed to push(..)");
    let mut dst = tracked(&ledger, &[9]);

    let result = catch_unwind(AssertUnwindSafe(|| dst.try_clone_from(&src)));

    assert!(result.is_err());
    assert_eq!(values(&dst), [9]);
    assert_eq!(dst.capacity(), 1);
    assert_eq!(ledger.live(), 4);
}

#[test]
fn test_try_clone_from_panic_in_tail_drops_partial() {
    let ledger = DropLedger::new();
    let mut src = tracked(&ledger, &[1, 2]);
    src.push(ledger.track_fragile(3)).expect("Failed to push(..)");

    let mut dst = RampartVec::with_capacity(8).expect("Failed to with_capacity(..)");
    dst.push(ledger.track(9)).expect("Failed to push(..)");

    let result = catch_unwind(AssertUnwindSafe(|| dst.try_clone_from(&src)));

    assert!(result.is_err());
    // The overlapping prefix was already assigned; the tail is rolled back.
    assert_eq!(values(&dst), [1]);
    assert_eq!(ledger.live(), 4);
}

// =============================================================================
// Constructor closure panics
// =============================================================================

#[test]
fn test_emplace_back_panic_on_growth() {
    let ledger = DropLedger::new();
    let mut vec = tracked(&ledger, &[1, 2]);
    let base = vec.as_ptr();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = vec.emplace_back(|| panic!("constructor failed"));
    }));

    assert!(result.is_err());
    assert_eq!(values(&vec), [1, 2]);
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec.as_ptr(), base);
    assert_eq!(ledger.live(), 2);
}

#[test]
fn test_emplace_panic_within_capacity() {
    let ledger = DropLedger::new();
    let mut vec = RampartVec::with_capacity(4).expect("Failed to with_capacity(..)");
    vec.push(ledger.track(1)).expect("Failed to push(..)");
    vec.push(ledger.track(2)).expect("Failed to push(..)");

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = vec.emplace(0, || panic!("constructor failed"));
    }));

    assert!(result.is_err());
    assert_eq!(values(&vec), [1, 2]);
    assert_eq!(ledger.live(), 2);
}

#[test]
fn test_emplace_panic_on_growth() {
    let ledger = DropLedger::new();
    let mut vec = tracked(&ledger, &[1, 2, 3]);

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = vec.emplace(1, || panic!("constructor failed"));
    }));

    assert!(result.is_err());
    assert_eq!(values(&vec), [1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
    assert_eq!(ledger.live(), 3);
}

#[test]
fn test_vec_usable_after_panic() {
    let ledger = DropLedger::new();
    let mut vec = tracked(&ledger, &[1]);

    let _ = catch_unwind(AssertUnwindSafe(|| {
        let _ = vec.emplace_back(|| panic!("constructor failed"));
    }));

    vec.push(ledger.track(2)).expect("Failed to push(..)");
    assert_eq!(values(&vec), [1, 2]);

    drop(vec);
    assert_eq!(ledger.live(), 0);
}
