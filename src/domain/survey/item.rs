//! Item sets - ordered, distinct labels of one survey domain.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The domain an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemDomain {
    /// Top-level criteria compared in the first round.
    Keyword,
    /// Options (images) compared once per keyword.
    Option,
}

impl fmt::Display for ItemDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemDomain::Keyword => write!(f, "keyword"),
            ItemDomain::Option => write!(f, "option"),
        }
    }
}

/// Ordered list of distinct item labels from a single domain.
///
/// The position of a label is its row/column index in every comparison
/// matrix built over this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemSetRecord")]
pub struct ItemSet {
    domain: ItemDomain,
    labels: Vec<String>,
}

/// Unchecked wire form of an item set.
#[derive(Deserialize)]
struct ItemSetRecord {
    domain: ItemDomain,
    labels: Vec<String>,
}

impl TryFrom<ItemSetRecord> for ItemSet {
    type Error = ValidationError;

    fn try_from(record: ItemSetRecord) -> Result<Self, Self::Error> {
        Self::new(record.domain, record.labels)
    }
}

impl ItemSet {
    /// Creates an item set, rejecting blank or repeated labels.
    pub fn new(
        domain: ItemDomain,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut seen = HashSet::with_capacity(labels.len());

        for label in &labels {
            if label.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("{} label", domain)));
            }
            if !seen.insert(label.as_str()) {
                return Err(ValidationError::duplicate_item(label.clone()));
            }
        }

        Ok(Self { domain, labels })
    }

    /// Creates an empty item set.
    pub fn empty(domain: ItemDomain) -> Self {
        Self {
            domain,
            labels: Vec::new(),
        }
    }

    /// Parses a comma-delimited text resource, trimming every entry.
    ///
    /// Blank entries (e.g. from a trailing comma) are dropped.
    pub fn parse_delimited(domain: ItemDomain, text: &str) -> Result<Self, ValidationError> {
        let labels = text
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty());
        Self::new(domain, labels)
    }

    /// Returns the domain of this set.
    pub fn domain(&self) -> ItemDomain {
        self.domain
    }

    /// Returns the labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Identity lookup of a label's position.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns true if the label is part of the set.
    pub fn contains(&self, label: &str) -> bool {
        self.index_of(label).is_some()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the set has no items.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
