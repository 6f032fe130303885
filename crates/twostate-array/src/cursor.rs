//! Minimal forward cursor over an array's values.

use std::iter::FusedIterator;

use crate::array::Slot;

/// A forward-only position within a [`FlaggedArray`](crate::FlaggedArray).
///
/// Yields values only; elevations are not reachable through a cursor. Two
/// cursors are equal when they point at the same slot of the same array.
/// Stepping past the last slot is allowed and leaves the cursor exhausted.
pub struct Cursor<'a, T> {
    slots: &'a [Slot<T>],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>]) -> Self {
        Self { slots, position: 0 }
    }

    /// Slot index the cursor points at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Value under the cursor, or `None` once past the last slot.
    pub fn get(&self) -> Option<&'a T> {
        self.slots.get(self.position).map(|slot| &slot.value)
    }

    /// Step forward by one slot.
    pub fn advance(&mut self) -> &mut Self {
        self.advance_by(1)
    }

    /// Step forward by `step` slots.
    pub fn advance_by(&mut self, step: usize) -> &mut Self {
        self.position = self.position.saturating_add(step);
        self
    }

    /// `true` once the cursor has moved past the last slot.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.slots.len()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slots, other.slots) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.get()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}
