use std::fmt;
use std::ops::Add;

/// Shortest-path distance from a source node.
///
/// `Unreachable` orders above every finite distance, so `min` and sorting
/// behave as with an infinite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Reachable at the given total cost.
    Finite(u64),
    /// No path from the source.
    Unreachable,
}

impl Distance {
    /// Returns `true` for a finite distance.
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }
}

impl Add<u64> for Distance {
    type Output = Self;

    fn add(self, cost: u64) -> Self {
        match self {
            Self::Finite(d) => d.checked_add(cost).map_or(Self::Unreachable, Self::Finite),
            Self::Unreachable => Self::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}
