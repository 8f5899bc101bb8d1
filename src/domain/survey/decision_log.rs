//! Decision Log - append-only sequence of decisions for one survey round.

use serde::{Deserialize, Serialize};

use super::{KeywordDecision, OptionDecision};

/// Append-only log of decisions, in the order they were made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionLog<D> {
    entries: Vec<D>,
}

impl<D> DecisionLog<D> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Wraps previously persisted entries.
    pub fn from_entries(entries: Vec<D>) -> Self {
        Self { entries }
    }

    /// Returns the entries in recording order.
    pub fn entries(&self) -> &[D] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D> Default for DecisionLog<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionLog<KeywordDecision> {
    /// Appends a keyword decision unless the same choice on the same pair is
    /// already in the log.
    ///
    /// Returns true if the decision was appended.
    pub fn record(&mut self, decision: KeywordDecision) -> bool {
        if self.entries.iter().any(|d| d.is_same_choice(&decision)) {
            return false;
        }
        self.entries.push(decision);
        true
    }
}

impl DecisionLog<OptionDecision> {
    /// Appends an option decision. Repeats are kept.
    pub fn record(&mut self, decision: OptionDecision) -> bool {
        self.entries.push(decision);
        true
    }

    /// Returns the decisions made under `keyword`, in recording order.
    pub fn for_keyword(&self, keyword: &str) -> Vec<OptionDecision> {
        self.entries
            .iter()
            .filter(|d| d.keyword == keyword)
            .cloned()
            .collect()
    }
}
