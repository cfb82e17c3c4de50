// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Lifecycle accounting for container tests.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Shared record of how many [`Tracked`] values were created and dropped.
///
/// Every `track`/`track_fragile` call and every successful clone counts as a
/// creation. A container that neither leaks nor double-drops ends with
/// `live() == 0` once all its values are gone.
///
/// # Example
/// ```
/// use rampart_test_utils::DropLedger;
///
/// let ledger = DropLedger::new();
/// let a = ledger.track(1);
/// let b = a.clone();
/// assert_eq!(ledger.live(), 2);
///
/// drop(a);
/// drop(b);
/// assert_eq!(ledger.live(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DropLedger {
    counts: Rc<Counts>,
}

impl DropLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so its lifecycle is recorded here.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.created();
        Tracked {
            value,
            fragile: false,
            ledger: self.clone(),
        }
    }

    /// Like [`DropLedger::track`], but cloning the result panics.
    pub fn track_fragile<T>(&self, value: T) -> Tracked<T> {
        self.created();
        Tracked {
            value,
            fragile: true,
            ledger: self.clone(),
        }
    }

    fn created(&self) {
        self.counts.created.set(self.counts.created.get() + 1);
    }

    /// Total creations so far.
    pub fn creations(&self) -> usize {
        self.counts.created.get()
    }

    /// Total drops so far.
    pub fn drops(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.creations() - self.drops()
    }
}

/// A value whose creation, clone and drop are recorded in a [`DropLedger`].
pub struct Tracked<T> {
    value: T,
    fragile: bool,
    ledger: DropLedger,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns `true` if cloning this value panics.
    pub fn is_fragile(&self) -> bool {
        self.fragile
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        if self.fragile {
            panic!("Tracked::clone: fragile value");
        }

        self.ledger.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let dropped = &self.ledger.counts.dropped;
        dropped.set(dropped.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
