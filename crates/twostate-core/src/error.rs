//! Error types for two-state containers.
//!
//! Checked accessors report [`TwoStateError::OutOfRange`]; the fallible
//! allocation paths report [`TwoStateError::AllocationFailed`]; config
//! validation reports [`TwoStateError::CapacityExceeded`].

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TwoStateError {
    /// A checked access named a position that is not a valid slot index
    /// (`position >= capacity`).
    OutOfRange {
        /// The requested position.
        position: usize,
        /// Capacity of the container at the time of the access.
        capacity: usize,
    },
    /// The allocator refused a buffer of the requested size.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
    },
    /// A configured capacity exceeds the configured upper bound.
    CapacityExceeded {
        /// Number of slots requested.
        requested: usize,
        /// Largest accepted slot count.
        max: usize,
    },
}

impl fmt::Display for TwoStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, capacity } => {
                write!(
                    f,
                    "cannot access element at position {position}: capacity is {capacity}"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} slots, max {max} slots"
                )
            }
        }
    }
}

impl Error for TwoStateError {}
