//! Pair Deck - hands out the pairs of one survey round, one at a time.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{ItemSet, Pair};
use crate::domain::analysis::PairingGenerator;
use crate::domain::foundation::ValidationError;

/// The pairs of a round in presentation order, with a cursor.
///
/// The cursor never passes the end of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PairDeckRecord")]
pub struct PairDeck {
    pairs: Vec<Pair>,
    position: usize,
}

/// Unchecked wire form of a deck.
#[derive(Deserialize)]
struct PairDeckRecord {
    pairs: Vec<Pair>,
    position: usize,
}

impl TryFrom<PairDeckRecord> for PairDeck {
    type Error = ValidationError;

    fn try_from(record: PairDeckRecord) -> Result<Self, Self::Error> {
        if record.position > record.pairs.len() {
            return Err(ValidationError::out_of_range(
                "position",
                0.0,
                record.pairs.len() as f64,
                record.position as f64,
            ));
        }
        Ok(Self {
            pairs: record.pairs,
            position: record.position,
        })
    }
}

impl PairDeck {
    /// Creates a deck that presents `pairs` in the given order.
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs, position: 0 }
    }

    /// Creates a deck holding every pair of `items` in random order.
    pub fn shuffled<R: Rng + ?Sized>(items: &ItemSet, rng: &mut R) -> Self {
        Self::new(PairingGenerator::shuffled(items, rng))
    }

    /// Returns true while pairs remain to be presented.
    pub fn has_next(&self) -> bool {
        self.position < self.pairs.len()
    }

    /// Returns the next pair and advances the cursor.
    pub fn next_pair(&mut self) -> Option<&Pair> {
        let pair = self.pairs.get(self.position)?;
        self.position += 1;
        Some(pair)
    }

    /// Number of pairs already handed out.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of pairs still to be handed out.
    pub fn remaining(&self) -> usize {
        self.pairs.len().saturating_sub(self.position)
    }

    /// Total number of pairs in the round.
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// All pairs in presentation order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }
}

impl Iterator for PairDeck {
    type Item = Pair;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().cloned()
    }
}
