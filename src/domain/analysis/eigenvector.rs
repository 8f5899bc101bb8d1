//! Eigenvector Estimator - geometric-mean approximation of the principal eigenvector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ComparisonMatrix;
use crate::domain::foundation::ValidationError;

/// Normalized weights, one per item, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightVectorRecord")]
pub struct WeightVector {
    labels: Vec<String>,
    weights: Vec<f64>,
}

/// Unchecked wire form of a weight vector.
#[derive(Deserialize)]
struct WeightVectorRecord {
    labels: Vec<String>,
    weights: Vec<f64>,
}

impl TryFrom<WeightVectorRecord> for WeightVector {
    type Error = ValidationError;

    fn try_from(record: WeightVectorRecord) -> Result<Self, Self::Error> {
        if record.labels.len() != record.weights.len() {
            return Err(ValidationError::invalid_format(
                "weights",
                format!(
                    "{} weights for {} labels",
                    record.weights.len(),
                    record.labels.len()
                ),
            ));
        }
        if record.weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ValidationError::invalid_format(
                "weights",
                "weights must be finite and non-negative",
            ));
        }
        Ok(Self {
            labels: record.labels,
            weights: record.weights,
        })
    }
}

impl WeightVector {
    /// Creates the uniform vector (1/n each) over `labels`.
    pub fn uniform(labels: &[String]) -> Self {
        let n = labels.len();
        Self {
            labels: labels.to_vec(),
            weights: vec![1.0 / n as f64; n],
        }
    }

    /// Returns the item labels, aligned with `weights()`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the weight at `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    /// Returns the weight of the item labelled `label`.
    pub fn weight_of(&self, label: &str) -> Option<f64> {
        let index = self.labels.iter().position(|l| l == label)?;
        self.get(index)
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns (label, weight) pairs from highest to lowest weight.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .labels
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Derives weight vectors from comparison matrices.
pub struct EigenvectorEstimator;

impl EigenvectorEstimator {
    /// Estimates the normalized principal eigenvector of `matrix`.
    ///
    /// # Algorithm
    /// For each row: w[i] = (Π_j M[i][j])^(1/n), then w is scaled to sum to 1.
    /// The n-th root of the product is taken as exp(mean(ln M[i][j])) so large
    /// products cannot overflow.
    ///
    /// No consistency check is made; any reciprocal matrix yields a vector.
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns an empty vector
    /// - All-1s matrix: Returns 1/n for every item
    /// - Entries that are not positive and finite: Returns the uniform vector
    pub fn estimate(matrix: &ComparisonMatrix) -> WeightVector {
        let means = Self::row_geometric_means(matrix);
        let sum: f64 = means.iter().sum();

        if means.is_empty() || !sum.is_finite() || sum <= 0.0 {
            return WeightVector::uniform(matrix.labels());
        }

        let weights: Vec<f64> = means.iter().map(|m| m / sum).collect();
        debug!(size = weights.len(), "Estimated weight vector");

        WeightVector {
            labels: matrix.labels().to_vec(),
            weights,
        }
    }

    /// Geometric mean of each row.
    pub fn row_geometric_means(matrix: &ComparisonMatrix) -> Vec<f64> {
        let n = matrix.size();
        matrix
            .rows()
            .iter()
            .map(|row| {
                let log_sum: f64 = row.iter().map(|v| v.ln()).sum();
                (log_sum / n as f64).exp()
            })
            .collect()
    }
}
