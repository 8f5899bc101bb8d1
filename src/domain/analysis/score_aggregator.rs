//! Score Aggregator - combines per-keyword option weights into one score per option.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::WeightVector;
use crate::domain::survey::ItemSet;

/// One keyword's share of an option's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContribution {
    pub category: String,
    /// The option's weight within the keyword.
    pub value: f64,
    /// The keyword's top-level weight.
    pub weight: f64,
}

/// Final score of one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    pub option: String,
    pub score: f64,
    pub contributions: Vec<CategoryContribution>,
}

/// Scores of every option, aligned with the option item set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateScores {
    scores: Vec<OptionScore>,
}

impl AggregateScores {
    /// Returns the per-option scores in option order.
    pub fn scores(&self) -> &[OptionScore] {
        &self.scores
    }

    /// Returns just the score values in option order.
    pub fn values(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.score).collect()
    }

    /// Returns the score of `option`.
    pub fn score_of(&self, option: &str) -> Option<f64> {
        self.scores.iter().find(|s| s.option == option).map(|s| s.score)
    }

    /// Returns the number of options scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no options were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the scores from highest to lowest.
    pub fn ranked(&self) -> Vec<&OptionScore> {
        let mut ranked: Vec<&OptionScore> = self.scores.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Finds the best option by score.
    /// Returns None if empty or if there's a tie for best.
    pub fn best(&self) -> Option<&str> {
        let ranked = self.ranked();
        match ranked.as_slice() {
            [] => None,
            [only] => Some(only.option.as_str()),
            [first, second, ..] if first.score > second.score => Some(first.option.as_str()),
            _ => None,
        }
    }
}

/// Weighted-sum aggregation of category weight vectors.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Computes score(option) = Σ_k top[k] · per_category[k][option].
    ///
    /// Categories are taken from `top` in order; an option's value within a
    /// category is read by its position in `options`.
    ///
    /// # Edge Cases
    /// - Category missing from `per_category`: contributes 0
    /// - Option index past the end of a category vector: contributes 0
    /// - Non-finite weights or values: treated as 0
    pub fn aggregate(
        top: &WeightVector,
        per_category: &HashMap<String, WeightVector>,
        options: &ItemSet,
    ) -> AggregateScores {
        let scores = options
            .labels()
            .iter()
            .enumerate()
            .map(|(option_index, option)| {
                let contributions: Vec<CategoryContribution> = top
                    .labels()
                    .iter()
                    .enumerate()
                    .map(|(category_index, category)| CategoryContribution {
                        category: category.clone(),
                        value: finite_or_zero(
                            per_category
                                .get(category)
                                .and_then(|weights| weights.get(option_index)),
                        ),
                        weight: finite_or_zero(top.get(category_index)),
                    })
                    .collect();

                let score = contributions.iter().map(|c| c.value * c.weight).sum();

                OptionScore {
                    option: option.clone(),
                    score,
                    contributions,
                }
            })
            .collect();

        AggregateScores { scores }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
