//! The two-valued flag carried by every slot.

use std::fmt;
use std::ops::Not;

/// Elevation state of a single slot.
///
/// Isomorphic to `bool`: `High` is `true`, `Low` is `false`. A slot's
/// elevation is independent of its value and only changes through the
/// flag operations of the owning container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elevation {
    /// Not elevated. Freshly constructed slots start here unless the
    /// container was asked to elevate everything.
    #[default]
    Low,
    /// Elevated.
    High,
}

impl Elevation {
    /// Returns `true` for [`Elevation::High`].
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Returns `true` for [`Elevation::Low`].
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for Elevation {
    fn from(elevated: bool) -> Self {
        if elevated {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<Elevation> for bool {
    fn from(state: Elevation) -> Self {
        state.is_high()
    }
}

impl Not for Elevation {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Low => write!(f, "low"),
        }
    }
}
