//! Core types for two-state flagged containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-slot [`Elevation`] flag and the [`TwoStateError`] taxonomy
//! shared by every container in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod elevation;
pub mod error;

pub use elevation::Elevation;
pub use error::TwoStateError;
