//! Array construction parameters.

use twostate_core::TwoStateError;

/// Configuration for building a [`FlaggedArray`](crate::FlaggedArray).
///
/// Plain data; checked by [`ArrayConfig::validate`] when handed to
/// [`FlaggedArray::from_config`](crate::FlaggedArray::from_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots to allocate.
    pub capacity: usize,

    /// Initial elevation of every slot.
    ///
    /// Default: `false` (all slots start low).
    pub elevate_all: bool,

    /// Largest capacity [`ArrayConfig::validate`] accepts.
    ///
    /// Default: [`ArrayConfig::DEFAULT_MAX_CAPACITY`].
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default upper bound on the slot count: the largest value a 32-bit
    /// capacity can hold, clamped to `usize::MAX` on narrower targets.
    pub const DEFAULT_MAX_CAPACITY: usize = if usize::BITS >= u32::BITS {
        u32::MAX as usize
    } else {
        usize::MAX
    };

    /// Create a config for the given capacity with all other parameters
    /// at their defaults.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            elevate_all: false,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Check that `capacity` does not exceed `max_capacity`.
    pub fn validate(&self) -> Result<(), TwoStateError> {
        if self.capacity > self.max_capacity {
            return Err(TwoStateError::CapacityExceeded {
                requested: self.capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
