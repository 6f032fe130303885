//! twostate: fixed-capacity arrays whose slots carry an independent
//! high/low flag.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the twostate sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use twostate::prelude::*;
//!
//! let mut array = FlaggedArray::<i32>::with_capacity(10);
//! assert!(array.is_low(5));
//!
//! assert_eq!(array.elevate(5), Ok(true));
//! assert_eq!(array.elevate(5), Ok(false));
//! assert!(array.is_high(5));
//!
//! array.set(3, 42, true).unwrap();
//! assert_eq!(array.at(3), Ok(&42));
//!
//! // Checked access rejects position == capacity.
//! assert!(matches!(
//!     array.at(10),
//!     Err(TwoStateError::OutOfRange { position: 10, capacity: 10 })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `twostate-array` | `FlaggedArray`, `Cursor`, `ArrayConfig` |
//! | [`types`] | `twostate-core` | `Elevation`, `TwoStateError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Flagged array container, cursor, and config (`twostate-array`).
pub use twostate_array as array;

/// Core types (`twostate-core`).
pub use twostate_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use twostate::prelude::*;
/// ```
pub mod prelude {
    pub use twostate_array::{ArrayConfig, Cursor, FlaggedArray};
    pub use twostate_core::{Elevation, TwoStateError};
}
