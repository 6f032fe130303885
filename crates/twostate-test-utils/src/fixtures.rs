//! Reusable array fixtures.

use std::cell::Cell;

use twostate_array::{Elevation, FlaggedArray};

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
}

/// A value that counts how many instances are alive on the current thread.
///
/// Every construction (including `Clone` and `Default`) increments the
/// count and every drop decrements it, so a leak or a double release
/// shows up as a wrong [`Tracked::live`] total. The count is per thread;
/// each libtest test runs on its own thread.
#[derive(Debug, PartialEq, Eq)]
pub struct Tracked(u32);

impl Tracked {
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Instances currently alive on this thread.
    pub fn live() -> usize {
        LIVE.with(Cell::get)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// `capacity` slots holding `0..capacity`, all low.
pub fn ramp(capacity: u32) -> FlaggedArray<u32> {
    (0..capacity).map(|i| (i, Elevation::Low)).collect()
}

/// `capacity` slots holding `0..capacity`, even positions high.
pub fn alternating(capacity: u32) -> FlaggedArray<u32> {
    (0..capacity)
        .map(|i| (i, Elevation::from(i % 2 == 0)))
        .collect()
}
