//! Pair - two distinct items presented side by side.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// An unordered pair of distinct item labels.
///
/// `first` is shown on the left and `second` on the right; the order carries
/// no meaning for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Creates a pair, rejecting an item paired with itself.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, ValidationError> {
        let first = first.into();
        let second = second.into();

        if first == second {
            return Err(ValidationError::invalid_format(
                "pair",
                format!("'{}' cannot be compared with itself", first),
            ));
        }

        Ok(Self { first, second })
    }

    /// Creates a pair from labels already known to be distinct.
    pub(crate) fn from_distinct(first: &str, second: &str) -> Self {
        debug_assert_ne!(first, second);
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// The left-hand item.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The right-hand item.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns true if `label` is one of the two items.
    pub fn contains(&self, label: &str) -> bool {
        self.first == label || self.second == label
    }

    /// Returns the item that is not `label`, if `label` is in the pair.
    pub fn other(&self, label: &str) -> Option<&str> {
        if self.first == label {
            Some(&self.second)
        } else if self.second == label {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Order-independent key, identical for (a, b) and (b, a).
    pub fn unordered_key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}
