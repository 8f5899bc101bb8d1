//! Pairing Generator - every unordered pair of an item set, in random order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::survey::{ItemSet, Pair};

/// Pair generation for a survey round.
pub struct PairingGenerator;

impl PairingGenerator {
    /// Returns every unordered pair of `items` exactly once, in index order.
    ///
    /// For n items this is n·(n−1)/2 pairs; fewer than two items yield none.
    pub fn all_pairs(items: &ItemSet) -> Vec<Pair> {
        let labels = items.labels();
        let n = labels.len();
        if n < 2 {
            return Vec::new();
        }

        let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n - 1 {
            for j in i + 1..n {
                pairs.push(Pair::from_distinct(&labels[i], &labels[j]));
            }
        }
        pairs
    }

    /// Returns every pair of `items` in a uniformly random order.
    ///
    /// Uses a Fisher-Yates shuffle driven by `rng`.
    pub fn shuffled<R: Rng + ?Sized>(items: &ItemSet, rng: &mut R) -> Vec<Pair> {
        let mut pairs = Self::all_pairs(items);
        pairs.shuffle(rng);
        pairs
    }
}
