// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element type with a failing `Default`.

use std::cell::Cell;

thread_local! {
    static BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Element whose `Default` panics once the current thread's budget is spent.
///
/// Budget and live count are per thread, so tests running in parallel do not
/// interfere with each other.
///
/// # Example
/// ```
/// use rampart_test_utils::Fused;
///
/// Fused::arm(1);
/// let first = Fused::default();
/// assert!(std::panic::catch_unwind(Fused::default).is_err());
/// Fused::disarm();
///
/// assert_eq!(Fused::live(), 1);
/// drop(first);
/// assert_eq!(Fused::live(), 0);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Fused(pub u32);

impl Fused {
    /// Creates a value outside of any budget.
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self(value)
    }

    /// Allows `successes` more calls to `Default` before the next one panics.
    pub fn arm(successes: usize) {
        BUDGET.with(|budget| budget.set(Some(successes)));
    }

    /// Removes the budget; `Default` never panics again on this thread.
    pub fn disarm() {
        BUDGET.with(|budget| budget.set(None));
    }

    /// `Fused` values alive on the current thread.
    pub fn live() -> usize {
        LIVE.with(Cell::get)
    }
}

impl Default for Fused {
    fn default() -> Self {
        BUDGET.with(|budget| match budget.get() {
            Some(0) => panic!("Fused::default: budget exhausted"),
            Some(n) => budget.set(Some(n - 1)),
            None => {}
        });

        Self::new(0)
    }
}

impl Clone for Fused {
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl Drop for Fused {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}
