//! Benchmark profiles for twostate containers.
//!
//! - [`reference_array`]: 10K slots with a deterministic elevation pattern
//! - [`probe_positions`]: deterministic pseudo-random slot positions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use twostate_array::{Elevation, FlaggedArray};

/// Slot count of the reference profile.
pub const REFERENCE_CAPACITY: usize = 10_000;

/// Build the reference benchmark array: [`REFERENCE_CAPACITY`] slots
/// holding their own index, roughly one in three elevated.
pub fn reference_array(seed: u64) -> FlaggedArray<u64> {
    (0..REFERENCE_CAPACITY as u64)
        .map(|i| {
            let mixed = (i ^ seed).wrapping_mul(6364136223846793007);
            (i, Elevation::from((mixed >> 33) % 3 == 0))
        })
        .collect()
}

/// Generate `n` deterministic positions in `[0, capacity)`.
pub fn probe_positions(n: usize, capacity: usize, seed: u64) -> Vec<usize> {
    assert!(capacity > 0, "capacity must be > 0");
    (0..n as u64)
        .map(|i| {
            let mixed = (i.wrapping_add(seed)).wrapping_mul(1442695040888963407);
            ((mixed >> 17) % capacity as u64) as usize
        })
        .collect()
}
