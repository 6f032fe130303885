//! Test fixtures for twostate development.
//!
//! - [`Tracked`] — a value type that counts its live instances, for
//!   checking that copies are deep and every slot is released once.
//! - [`ramp`] / [`alternating`] — deterministic array patterns.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{alternating, ramp, Tracked};
