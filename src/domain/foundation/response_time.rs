//! Response time value object (elapsed seconds between presentation and choice).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Non-negative elapsed time in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseTime(f64);

impl ResponseTime {
    /// Zero elapsed time.
    pub const ZERO: Self = Self(0.0);

    /// Creates a ResponseTime, returning error for negative or non-finite input.
    pub fn try_from_seconds(seconds: f64) -> Result<Self, ValidationError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ValidationError::out_of_range(
                "response_time",
                0.0,
                f64::MAX,
                seconds,
            ));
        }
        Ok(Self(seconds))
    }

    /// Computes the elapsed time between two millisecond clock readings.
    ///
    /// A click reading earlier than the load reading yields zero.
    pub fn from_millis_span(load_ms: f64, click_ms: f64) -> Self {
        let seconds = (click_ms - load_ms) / 1000.0;
        if seconds.is_finite() && seconds > 0.0 {
            Self(seconds)
        } else {
            Self::ZERO
        }
    }

    /// Returns the value in seconds.
    pub fn as_seconds(&self) -> f64 {
        self.0
    }

    /// Formats with four decimals, as shown in the raw data sheet.
    pub fn display_fixed(&self) -> String {
        format!("{:.4}", self.0)
    }
}

impl fmt::Display for ResponseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.display_fixed())
    }
}
