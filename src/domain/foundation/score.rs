//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// One hundred points.
    pub const MAX: Self = Self(100);

    /// Creates a new Score, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Score from an unbounded intermediate total.
    ///
    /// Negative totals become zero, totals above 100 become 100.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value widened for arithmetic.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
