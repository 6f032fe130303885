//! The flagged array container.
//!
//! [`FlaggedArray`] stores its slots in a single `Box<[Slot<T>]>`. The
//! boxed slice has no spare capacity, so the slot count and the buffer
//! length cannot drift apart, and every [`FlaggedArray::resize`]
//! reallocates to exactly the requested size.

use std::fmt;
use std::ops::{Index, IndexMut};

use twostate_core::{Elevation, TwoStateError};

use crate::config::ArrayConfig;
use crate::cursor::Cursor;

/// One (value, flag) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Slot<T> {
    pub(crate) value: T,
    pub(crate) state: Elevation,
}

/// A fixed-capacity array whose slots each carry an [`Elevation`].
///
/// The capacity only changes through [`FlaggedArray::resize`] or
/// [`FlaggedArray::try_resize`]; there is no push/pop and no amortized
/// growth. Cloning produces a fully independent deep copy.
///
/// Checked operations return [`TwoStateError::OutOfRange`] for any
/// `position >= capacity`. Indexing and the flag queries are the fast
/// tier: no error path, and they panic on a bad index.
#[derive(PartialEq, Eq)]
pub struct FlaggedArray<T> {
    slots: Box<[Slot<T>]>,
}

impl<T> FlaggedArray<T> {
    /// Create an empty array. Allocates nothing.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Create an array of `capacity` slots, each holding `T::default()`
    /// and starting [`Elevation::Low`].
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Slot::default);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    /// Fallible [`FlaggedArray::with_capacity`].
    ///
    /// Returns [`TwoStateError::AllocationFailed`] if the allocator
    /// refuses the buffer.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TwoStateError>
    where
        T: Default,
    {
        let mut slots = reserve_slots(capacity)?;
        slots.resize_with(capacity, Slot::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Create an array of `capacity` slots, each holding a clone of
    /// `initializer`, all elevated if `elevate_all` is set.
    pub fn filled(capacity: usize, initializer: T, elevate_all: bool) -> Self
    where
        T: Clone,
    {
        let slot = Slot {
            value: initializer,
            state: Elevation::from(elevate_all),
        };
        Self {
            slots: vec![slot; capacity].into_boxed_slice(),
        }
    }

    /// Fallible [`FlaggedArray::filled`].
    ///
    /// Returns [`TwoStateError::AllocationFailed`] if the allocator
    /// refuses the buffer.
    pub fn try_filled(
        capacity: usize,
        initializer: T,
        elevate_all: bool,
    ) -> Result<Self, TwoStateError>
    where
        T: Clone,
    {
        let mut slots = reserve_slots(capacity)?;
        slots.resize(
            capacity,
            Slot {
                value: initializer,
                state: Elevation::from(elevate_all),
            },
        );
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Validate `config` and build a filled array from it.
    ///
    /// Fails with [`TwoStateError::CapacityExceeded`] if the config is
    /// rejected, or [`TwoStateError::AllocationFailed`] if the buffer
    /// cannot be allocated.
    pub fn from_config(config: &ArrayConfig, initializer: T) -> Result<Self, TwoStateError>
    where
        T: Clone,
    {
        config.validate()?;
        Self::try_filled(config.capacity, initializer, config.elevate_all)
    }
}

/// Reserve room for exactly `capacity` slots, reporting allocator refusal.
fn reserve_slots<T>(capacity: usize) -> Result<Vec<Slot<T>>, TwoStateError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| TwoStateError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(slots)
}

impl<T> FlaggedArray<T> {
    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `true` when the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bytes held by the slot buffer.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Slot<T>>()
    }

    pub(crate) fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    fn slot(&self, position: usize) -> Result<&Slot<T>, TwoStateError> {
        self.slots.get(position).ok_or(TwoStateError::OutOfRange {
            position,
            capacity: self.slots.len(),
        })
    }

    fn slot_mut(&mut self, position: usize) -> Result<&mut Slot<T>, TwoStateError> {
        let capacity = self.slots.len();
        self.slots
            .get_mut(position)
            .ok_or(TwoStateError::OutOfRange { position, capacity })
    }
}

impl<T> FlaggedArray<T> {
    /// Value at `position`.
    ///
    /// Fails with [`TwoStateError::OutOfRange`] if `position >= capacity`.
    pub fn at(&self, position: usize) -> Result<&T, TwoStateError> {
        self.slot(position).map(|slot| &slot.value)
    }

    /// Mutable value at `position`. The slot's elevation is untouched.
    ///
    /// Fails with [`TwoStateError::OutOfRange`] if `position >= capacity`.
    pub fn at_mut(&mut self, position: usize) -> Result<&mut T, TwoStateError> {
        self.slot_mut(position).map(|slot| &mut slot.value)
    }

    /// Overwrite both the value and the elevation at `position`.
    ///
    /// Fails with [`TwoStateError::OutOfRange`] if `position >= capacity`;
    /// the array is unchanged on failure.
    pub fn set(
        &mut self,
        position: usize,
        value: T,
        is_elevated: bool,
    ) -> Result<(), TwoStateError> {
        let slot = self.slot_mut(position)?;
        *slot = Slot {
            value,
            state: Elevation::from(is_elevated),
        };
        Ok(())
    }

    /// Raise the slot at `position` to [`Elevation::High`].
    ///
    /// Returns `Ok(true)` if the slot was low, `Ok(false)` if it was
    /// already high. Fails with [`TwoStateError::OutOfRange`] if
    /// `position >= capacity`.
    pub fn elevate(&mut self, position: usize) -> Result<bool, TwoStateError> {
        let slot = self.slot_mut(position)?;
        if slot.state.is_high() {
            return Ok(false);
        }
        slot.state = Elevation::High;
        Ok(true)
    }

    /// Drop the slot at `position` to [`Elevation::Low`].
    ///
    /// Returns `Ok(true)` if the slot was high, `Ok(false)` if it was
    /// already low. Fails with [`TwoStateError::OutOfRange`] if
    /// `position >= capacity`.
    pub fn decrease(&mut self, position: usize) -> Result<bool, TwoStateError> {
        let slot = self.slot_mut(position)?;
        if slot.state.is_low() {
            return Ok(false);
        }
        slot.state = Elevation::Low;
        Ok(true)
    }
}

impl<T> FlaggedArray<T> {
    /// Elevation at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= capacity`.
    pub fn state(&self, position: usize) -> Elevation {
        self.slots[position].state
    }

    /// `true` if the slot at `position` is high.
    ///
    /// # Panics
    ///
    /// Panics if `position >= capacity`.
    pub fn is_high(&self, position: usize) -> bool {
        self.state(position).is_high()
    }

    /// `true` if the slot at `position` is low.
    ///
    /// # Panics
    ///
    /// Panics if `position >= capacity`.
    pub fn is_low(&self, position: usize) -> bool {
        self.state(position).is_low()
    }
}

impl<T> Index<usize> for FlaggedArray<T> {
    type Output = T;

    fn index(&self, position: usize) -> &T {
        &self.slots[position].value
    }
}

impl<T> IndexMut<usize> for FlaggedArray<T> {
    fn index_mut(&mut self, position: usize) -> &mut T {
        &mut self.slots[position].value
    }
}

impl<T: Default> FlaggedArray<T> {
    /// Reallocate to exactly `new_capacity` slots.
    ///
    /// Shrinking drops the trailing slots. Growing keeps every existing
    /// slot and fills the new ones with `T::default()` at
    /// [`Elevation::Low`].
    pub fn resize(&mut self, new_capacity: usize) {
        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.reserve_exact(new_capacity.saturating_sub(slots.len()));
        slots.resize_with(new_capacity, Slot::default);
        self.slots = slots.into_boxed_slice();
    }

    /// Fallible [`FlaggedArray::resize`].
    ///
    /// Returns [`TwoStateError::AllocationFailed`] if growing cannot be
    /// satisfied; the array is unchanged on failure.
    pub fn try_resize(&mut self, new_capacity: usize) -> Result<(), TwoStateError> {
        let mut slots = std::mem::take(&mut self.slots).into_vec();
        let additional = new_capacity.saturating_sub(slots.len());
        if slots.try_reserve_exact(additional).is_err() {
            self.slots = slots.into_boxed_slice();
            return Err(TwoStateError::AllocationFailed {
                requested: new_capacity,
            });
        }
        slots.resize_with(new_capacity, Slot::default);
        self.slots = slots.into_boxed_slice();
        Ok(())
    }
}

impl<T> FlaggedArray<T> {
    /// Forward cursor over the values, starting at slot 0.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.slots)
    }

    /// Iterate over the values in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.slots.iter().map(|slot| &slot.value)
    }

    /// Iterate mutably over the values in index order. Flags are not
    /// reachable through this iterator.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut T> + '_ {
        self.slots.iter_mut().map(|slot| &mut slot.value)
    }

    /// Iterate over the elevations in index order.
    pub fn states(&self) -> impl ExactSizeIterator<Item = Elevation> + '_ {
        self.slots.iter().map(|slot| slot.state)
    }

    /// Number of high slots.
    pub fn count_high(&self) -> usize {
        self.states().filter(|state| state.is_high()).count()
    }

    /// Number of low slots.
    pub fn count_low(&self) -> usize {
        self.capacity() - self.count_high()
    }
}

impl<'a, T> IntoIterator for &'a FlaggedArray<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.cursor()
    }
}

impl<T> FromIterator<(T, Elevation)> for FlaggedArray<T> {
    fn from_iter<I: IntoIterator<Item = (T, Elevation)>>(iter: I) -> Self {
        Self {
            slots: iter
                .into_iter()
                .map(|(value, state)| Slot { value, state })
                .collect(),
        }
    }
}

impl<T> Default for FlaggedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for FlaggedArray<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }

    /// Deep-copy `source` into `self`, reusing the existing buffer when
    /// the capacities already match.
    fn clone_from(&mut self, source: &Self) {
        if self.slots.len() == source.slots.len() {
            self.slots.clone_from_slice(&source.slots);
        } else {
            self.slots = source.slots.clone();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FlaggedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| (&slot.value, slot.state)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_and_unallocated() {
        let array = FlaggedArray::<u32>::new();
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
        assert_eq!(array.memory_bytes(), 0);
    }

    #[test]
    fn with_capacity_defaults_every_slot_low() {
        let array = FlaggedArray::<i32>::with_capacity(10);
        assert_eq!(array.capacity(), 10);
        for i in 0..10 {
            assert_eq!(array[i], 0);
            assert!(array.is_low(i));
            assert!(!array.is_high(i));
        }
    }

    #[test]
    fn filled_broadcasts_value_and_elevation() {
        let array = FlaggedArray::filled(5, "x".to_string(), true);
        assert!(array.iter().all(|v| v == "x"));
        assert!(array.states().all(Elevation::is_high));
    }

    #[test]
    fn set_overwrites_value_and_flag() {
        let mut array = FlaggedArray::<i32>::with_capacity(4);
        array.set(3, 42, true).unwrap();
        assert_eq!(array.at(3), Ok(&42));
        assert!(array.is_high(3));
        assert!(!array.is_low(3));

        array.set(3, 7, false).unwrap();
        assert_eq!(array[3], 7);
        assert!(array.is_low(3));
    }

    #[test]
    fn elevate_then_decrease_reports_changes() {
        let mut array = FlaggedArray::<i32>::with_capacity(6);
        assert_eq!(array.elevate(5), Ok(true));
        assert_eq!(array.elevate(5), Ok(false));
        assert!(array.is_high(5));
        assert_eq!(array.decrease(5), Ok(true));
        assert_eq!(array.decrease(5), Ok(false));
        assert!(array.is_low(5));
    }

    #[test]
    fn checked_access_rejects_position_equal_to_capacity() {
        let mut array = FlaggedArray::<i32>::with_capacity(3);
        let err = TwoStateError::OutOfRange {
            position: 3,
            capacity: 3,
        };
        assert_eq!(array.at(3), Err(err.clone()));
        assert_eq!(array.at_mut(3), Err(err.clone()));
        assert_eq!(array.set(3, 1, true), Err(err.clone()));
        assert_eq!(array.elevate(3), Err(err.clone()));
        assert_eq!(array.decrease(3), Err(err));
        assert_eq!(array.at(2), Ok(&0));
    }

    #[test]
    fn checked_access_on_empty_array_fails() {
        let mut array = FlaggedArray::<i32>::new();
        assert!(array.at(0).is_err());
        assert!(array.elevate(0).is_err());
    }

    #[test]
    fn failed_set_leaves_array_unchanged() {
        let mut array = FlaggedArray::filled(2, 1, false);
        let before = array.clone();
        assert!(array.set(2, 9, true).is_err());
        assert_eq!(array, before);
    }

    #[test]
    fn mutating_value_keeps_flag() {
        let mut array = FlaggedArray::filled(3, 0, false);
        array.elevate(1).unwrap();
        *array.at_mut(1).unwrap() = 11;
        array[2] = 22;
        assert!(array.is_high(1));
        assert!(array.is_low(2));
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 11, 22]);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let array = FlaggedArray::<i32>::with_capacity(2);
        let _value = array[2];
    }

    #[test]
    #[should_panic]
    fn state_past_end_panics() {
        let array = FlaggedArray::<i32>::with_capacity(2);
        array.state(2);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = FlaggedArray::filled(4, vec![1, 2], false);
        a.elevate(0).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.at_mut(0).unwrap().push(3);
        b.decrease(0).unwrap();
        b.elevate(1).unwrap();
        assert_eq!(a[0], vec![1, 2]);
        assert!(a.is_high(0));
        assert!(a.is_low(1));
    }

    #[test]
    fn clone_from_replaces_contents_of_any_size() {
        let source = FlaggedArray::filled(3, 5u8, true);

        let mut same = FlaggedArray::filled(3, 0u8, false);
        same.clone_from(&source);
        assert_eq!(same, source);

        let mut bigger = FlaggedArray::<u8>::with_capacity(10);
        bigger.clone_from(&source);
        assert_eq!(bigger, source);
        assert_eq!(bigger.capacity(), 3);
    }

    #[test]
    fn resize_shrink_keeps_prefix() {
        let mut array: FlaggedArray<i32> =
            (0..6).map(|i| (i, Elevation::from(i % 2 == 0))).collect();
        array.resize(3);
        assert_eq!(array.capacity(), 3);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(
            array.states().collect::<Vec<_>>(),
            vec![Elevation::High, Elevation::Low, Elevation::High]
        );
    }

    #[test]
    fn resize_grow_defaults_new_slots_low() {
        let mut array = FlaggedArray::filled(2, 9, true);
        array.resize(5);
        assert_eq!(array.capacity(), 5);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![9, 9, 0, 0, 0]);
        assert!(array.is_high(0) && array.is_high(1));
        assert!((2..5).all(|i| array.is_low(i)));
    }

    #[test]
    fn resize_to_zero_empties() {
        let mut array = FlaggedArray::<u64>::with_capacity(4);
        array.resize(0);
        assert!(array.is_empty());
        assert!(array.at(0).is_err());
    }

    #[test]
    fn try_resize_matches_resize() {
        let mut a = FlaggedArray::filled(3, 1, true);
        let mut b = a.clone();
        a.resize(7);
        b.try_resize(7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn try_with_capacity_reports_impossible_allocation() {
        let result = FlaggedArray::<u64>::try_with_capacity(usize::MAX);
        assert_eq!(
            result.err(),
            Some(TwoStateError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn try_resize_failure_leaves_array_unchanged() {
        let mut array = FlaggedArray::filled(2, 3u64, true);
        let before = array.clone();
        assert_eq!(
            array.try_resize(usize::MAX),
            Err(TwoStateError::AllocationFailed {
                requested: usize::MAX
            })
        );
        assert_eq!(array, before);
    }

    #[test]
    fn try_resize_grow_defaults_new_slots_low() {
        let mut array = FlaggedArray::filled(2, 5u64, true);
        array.try_resize(4).unwrap();
        assert_eq!(array.at(1), Ok(&5));
        assert!(array.is_high(1));
        assert_eq!(array.at(3), Ok(&0));
        assert!(array.is_low(3));
    }

    #[test]
    fn try_filled_reports_impossible_allocation() {
        assert_eq!(
            FlaggedArray::try_filled(usize::MAX, 0u64, true).err(),
            Some(TwoStateError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn from_config_reports_impossible_allocation() {
        let config = ArrayConfig {
            max_capacity: usize::MAX,
            ..ArrayConfig::new(usize::MAX)
        };
        assert_eq!(
            FlaggedArray::from_config(&config, 0u64).err(),
            Some(TwoStateError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn iter_mut_updates_values_and_keeps_flags() {
        let mut array: FlaggedArray<i32> = (0..5).map(|i| (i, Elevation::Low)).collect();
        array.elevate(2).unwrap();
        array.elevate(4).unwrap();
        let states_before: Vec<_> = array.states().collect();

        for value in array.iter_mut() {
            *value += 10;
        }

        assert_eq!(
            array.iter().copied().collect::<Vec<_>>(),
            vec![10, 11, 12, 13, 14]
        );
        assert_eq!(array.states().collect::<Vec<_>>(), states_before);
        assert!(array.is_low(0));
        assert!(array.is_high(2));
    }

    #[test]
    fn from_config_applies_elevate_all() {
        let config = ArrayConfig {
            elevate_all: true,
            ..ArrayConfig::new(4)
        };
        let array = FlaggedArray::from_config(&config, 'a').unwrap();
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.count_high(), 4);
    }

    #[test]
    fn from_config_rejects_oversized_capacity() {
        let config = ArrayConfig {
            max_capacity: 2,
            ..ArrayConfig::new(3)
        };
        assert_eq!(
            FlaggedArray::from_config(&config, 0).err(),
            Some(TwoStateError::CapacityExceeded {
                requested: 3,
                max: 2
            })
        );
    }

    #[test]
    fn counts_track_flag_changes() {
        let mut array = FlaggedArray::<i32>::with_capacity(5);
        array.elevate(0).unwrap();
        array.elevate(4).unwrap();
        assert_eq!(array.count_high(), 2);
        assert_eq!(array.count_low(), 3);
    }

    #[test]
    fn memory_bytes_scales_with_capacity() {
        let array = FlaggedArray::<u64>::with_capacity(8);
        assert_eq!(array.memory_bytes(), 8 * std::mem::size_of::<Slot<u64>>());
    }

    #[test]
    fn debug_lists_value_and_state() {
        let mut array = FlaggedArray::filled(2, 1, false);
        array.elevate(1).unwrap();
        assert_eq!(format!("{array:?}"), "[(1, Low), (1, High)]");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_array() -> impl Strategy<Value = FlaggedArray<i32>> {
            proptest::collection::vec((any::<i32>(), any::<bool>()), 0..64).prop_map(|slots| {
                slots
                    .into_iter()
                    .map(|(v, e)| (v, Elevation::from(e)))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn filled_sets_every_slot(c in 0usize..128, v in any::<i32>(), e in any::<bool>()) {
                let array = FlaggedArray::filled(c, v, e);
                prop_assert_eq!(array.capacity(), c);
                for i in 0..c {
                    prop_assert_eq!(array[i], v);
                    prop_assert_eq!(array.is_high(i), e);
                }
            }

            #[test]
            fn high_and_low_are_exclusive(array in arb_array()) {
                for i in 0..array.capacity() {
                    prop_assert_ne!(array.is_high(i), array.is_low(i));
                }
            }

            #[test]
            fn out_of_range_from_capacity_upwards(array in arb_array(), k in 0usize..1000) {
                let c = array.capacity();
                let is_out_of_range = matches!(
                    array.at(c + k),
                    Err(TwoStateError::OutOfRange { .. })
                );
                prop_assert!(is_out_of_range);
                if c > 0 {
                    prop_assert!(array.at(c - 1).is_ok());
                }
            }

            #[test]
            fn clone_then_mutate_leaves_source(array in arb_array(), pos in any::<prop::sample::Index>()) {
                prop_assume!(!array.is_empty());
                let i = pos.index(array.capacity());
                let mut copy = array.clone();
                prop_assert_eq!(&copy, &array);

                let old_value = array[i];
                let old_state = array.state(i);
                copy.set(i, old_value.wrapping_add(1), !bool::from(old_state)).unwrap();
                prop_assert_eq!(array[i], old_value);
                prop_assert_eq!(array.state(i), old_state);
            }

            #[test]
            fn elevate_is_idempotent(array in arb_array(), pos in any::<prop::sample::Index>()) {
                prop_assume!(!array.is_empty());
                let i = pos.index(array.capacity());
                let mut array = array;
                array.decrease(i).unwrap();
                prop_assert_eq!(array.elevate(i), Ok(true));
                prop_assert!(array.is_high(i));
                prop_assert_eq!(array.elevate(i), Ok(false));
                prop_assert!(array.is_high(i));
                prop_assert_eq!(array.decrease(i), Ok(true));
                prop_assert_eq!(array.decrease(i), Ok(false));
                prop_assert!(array.is_low(i));
            }

            #[test]
            fn resize_preserves_common_prefix(array in arb_array(), c2 in 0usize..96) {
                let before = array.clone();
                let mut array = array;
                array.resize(c2);
                prop_assert_eq!(array.capacity(), c2);
                let kept = c2.min(before.capacity());
                for i in 0..kept {
                    prop_assert_eq!(array[i], before[i]);
                    prop_assert_eq!(array.state(i), before.state(i));
                }
                for i in kept..c2 {
                    prop_assert_eq!(array[i], 0);
                    prop_assert!(array.is_low(i));
                }
            }
        }
    }
}
