//! Fixed-capacity arrays whose slots carry a high/low elevation flag.
//!
//! A [`FlaggedArray<T>`] owns one contiguous buffer of slots. Each slot
//! pairs a value of type `T` with an [`Elevation`]. Values and flags are
//! independent: writing a value never moves its flag, and flag operations
//! never touch the value.
//!
//! # Layout
//!
//! ```text
//! FlaggedArray<T>
//! └── Box<[Slot<T>]>   (length == capacity, reallocated exactly on resize)
//!     └── Slot { value: T, state: Elevation }
//! ```
//!
//! # Access tiers
//!
//! - **Checked:** [`FlaggedArray::at`], [`FlaggedArray::at_mut`],
//!   [`FlaggedArray::set`], [`FlaggedArray::elevate`] and
//!   [`FlaggedArray::decrease`] return [`TwoStateError::OutOfRange`] for
//!   any `position >= capacity`.
//! - **Unchecked:** indexing, [`FlaggedArray::state`],
//!   [`FlaggedArray::is_high`] and [`FlaggedArray::is_low`] have no error
//!   path and panic on a bad index. The `*_unchecked` variants skip the
//!   bounds check entirely and are `unsafe`.
//!
//! Only the private `raw` module may contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
mod raw;

// Public re-exports for the primary API surface.
pub use array::FlaggedArray;
pub use config::ArrayConfig;
pub use cursor::Cursor;
pub use twostate_core::{Elevation, TwoStateError};
