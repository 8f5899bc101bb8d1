//! Intensity value object (1-7 pairwise preference scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A preference intensity between 1 (no preference) and 7 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Intensity(f64);

impl Intensity {
    /// Lower bound of the scale; also the neutral value.
    pub const MIN_VALUE: f64 = 1.0;

    /// Upper bound of the scale.
    pub const MAX_VALUE: f64 = 7.0;

    /// No preference either way.
    pub const NEUTRAL: Self = Self(Self::MIN_VALUE);

    /// Strongest preference.
    pub const MAX: Self = Self(Self::MAX_VALUE);

    /// Creates an Intensity, clamping to the valid range.
    ///
    /// Non-finite input collapses to neutral.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(Self::MIN_VALUE, Self::MAX_VALUE))
    }

    /// Creates an Intensity, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            return Err(ValidationError::out_of_range(
                "intensity",
                Self::MIN_VALUE,
                Self::MAX_VALUE,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value used for the losing side of a comparison.
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.0
    }

    /// Returns true if this is the neutral value.
    pub fn is_neutral(&self) -> bool {
        self.0 == Self::MIN_VALUE
    }
}

impl TryFrom<f64> for Intensity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Intensity> for f64 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
