use std::fmt;

use crate::error::GraphError;

/// Weight carried by an edge.
///
/// Weights are entered one digit at a time, so a weight can be `Empty` while
/// the user is mid-edit. Algorithms read weights only through [`Weight::cost`],
/// which treats `Empty` as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    /// No digits typed yet.
    Empty,
    /// A confirmed numeric weight.
    Value(u32),
}

impl Default for Weight {
    fn default() -> Self {
        Self::Value(1)
    }
}

impl Weight {
    /// Returns the cost used by algorithms.
    #[must_use]
    pub fn cost(self) -> u64 {
        match self {
            Self::Empty => 1,
            Self::Value(v) => u64::from(v),
        }
    }

    /// Returns the weight obtained by replacing the buffer with `digit`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidDigit`] if `digit` is not `0`-`9`.
    pub fn from_digit(digit: char) -> Result<Self, GraphError> {
        Ok(Self::Value(parse_digit(digit)?))
    }

    /// Returns the weight obtained by appending `digit`.
    ///
    /// Appending to `Empty` replaces the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidDigit`] for a non-digit and
    /// [`GraphError::WeightOverflow`] if the result does not fit in `u32`.
    pub fn push_digit(self, digit: char) -> Result<Self, GraphError> {
        let d = parse_digit(digit)?;
        match self {
            Self::Empty => Ok(Self::Value(d)),
            Self::Value(v) => v
                .checked_mul(10)
                .and_then(|v| v.checked_add(d))
                .map(Self::Value)
                .ok_or(GraphError::WeightOverflow),
        }
    }

    /// Returns the weight with its last digit removed.
    ///
    /// A single-digit weight becomes `Empty`, never `0`.
    #[must_use]
    pub fn pop_digit(self) -> Self {
        match self {
            Self::Value(v) if v >= 10 => Self::Value(v / 10),
            _ => Self::Empty,
        }
    }
}

fn parse_digit(digit: char) -> Result<u32, GraphError> {
    digit.to_digit(10).ok_or(GraphError::InvalidDigit(digit))
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}
