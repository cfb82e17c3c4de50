// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_test_utils::DropLedger;

use crate::RampartVec;

#[test]
fn test_into_iter_yields_in_order() {
    let vec: RampartVec<u8> = (1..=4).collect();

    let collected: Vec<u8> = vec.into_iter().collect();

    assert_eq!(collected, [1, 2, 3, 4]);
}

#[test]
fn test_into_iter_both_ends() {
    let vec: RampartVec<u8> = (1..=4).collect();
    let mut iter = vec.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_empty() {
    let vec = RampartVec::<String>::new();
    let mut iter = vec.into_iter();

    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_drops_remaining() {
    let ledger = DropLedger::new();
    let vec: RampartVec<_> = (0..5).map(|i| ledger.track(i)).collect();

    let mut iter = vec.into_iter();
    let first = iter.next().expect("Failed to get next()");
    assert_eq!(ledger.live(), 5);

    drop(iter);
    assert_eq!(ledger.live(), 1);

    drop(first);
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_into_iter_debug() {
    let vec: RampartVec<u8> = (7..9).collect();

    assert_eq!(format!("{:?}", vec.into_iter()), "IntoIter([7, 8])");
}
