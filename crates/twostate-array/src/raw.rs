//! Unchecked slot access.
//!
//! The only module in this crate allowed to contain `unsafe` code. Every
//! function here trusts the caller to pass an in-bounds position.

#![allow(unsafe_code)]

use twostate_core::Elevation;

use crate::array::{FlaggedArray, Slot};

/// Borrow the slot at `position` without a bounds check.
///
/// # Safety
///
/// `position` must be less than `slots.len()`.
unsafe fn slot_unchecked<T>(slots: &[Slot<T>], position: usize) -> &Slot<T> {
    debug_assert!(position < slots.len());
    // SAFETY: the caller guarantees `position < slots.len()`.
    unsafe { slots.get_unchecked(position) }
}

impl<T> FlaggedArray<T> {
    /// Value at `position` with no bounds check.
    ///
    /// # Safety
    ///
    /// `position` must be less than [`FlaggedArray::capacity`]. Any other
    /// position is undefined behavior.
    pub unsafe fn get_unchecked(&self, position: usize) -> &T {
        // SAFETY: forwarded from this function's contract.
        unsafe { &slot_unchecked(self.slots(), position).value }
    }

    /// Elevation at `position` with no bounds check.
    ///
    /// # Safety
    ///
    /// `position` must be less than [`FlaggedArray::capacity`]. Any other
    /// position is undefined behavior.
    pub unsafe fn state_unchecked(&self, position: usize) -> Elevation {
        // SAFETY: forwarded from this function's contract.
        unsafe { slot_unchecked(self.slots(), position).state }
    }
}
