//! Comparison Matrix - reciprocal pairwise preference matrix over one item set.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Intensity, ValidationError};
use crate::domain::survey::ItemSet;

/// Largest drift from 1 allowed in `M[i][j] * M[j][i]` when loading a matrix.
const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// Square matrix where entry (i, j) is how strongly item i is preferred over j.
///
/// Invariants: `M[i][i] = 1` and `M[i][j] = 1 / M[j][i]`. A fresh matrix holds
/// 1 everywhere, meaning no preference has been observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComparisonMatrixRecord")]
pub struct ComparisonMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<f64>>,
}

/// Unchecked wire form of a matrix.
#[derive(Deserialize)]
struct ComparisonMatrixRecord {
    labels: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl TryFrom<ComparisonMatrixRecord> for ComparisonMatrix {
    type Error = ValidationError;

    fn try_from(record: ComparisonMatrixRecord) -> Result<Self, Self::Error> {
        let n = record.labels.len();
        if record.cells.len() != n || record.cells.iter().any(|row| row.len() != n) {
            return Err(ValidationError::invalid_format(
                "cells",
                format!("expected a {}x{} matrix", n, n),
            ));
        }
        if let Some(v) = record
            .cells
            .iter()
            .flatten()
            .find(|v| !v.is_finite() || **v <= 0.0)
        {
            return Err(ValidationError::invalid_format(
                "cells",
                format!("entry {} is not positive and finite", v),
            ));
        }

        let matrix = Self {
            labels: record.labels,
            cells: record.cells,
        };
        if !matrix.is_reciprocal(RECIPROCAL_TOLERANCE) {
            return Err(ValidationError::invalid_format(
                "cells",
                "diagonal must be 1 and opposite entries reciprocal",
            ));
        }
        Ok(matrix)
    }
}

impl ComparisonMatrix {
    /// Creates the all-1s matrix over `items`.
    pub fn neutral(items: &ItemSet) -> Self {
        let n = items.len();
        Self {
            labels: items.labels().to_vec(),
            cells: vec![vec![1.0; n]; n],
        }
    }

    /// Records that `winner` is preferred over `loser` with `intensity`,
    /// overwriting any earlier value for the pair.
    pub(crate) fn record_preference(&mut self, winner: usize, loser: usize, intensity: Intensity) {
        if winner == loser {
            return;
        }
        self.cells[winner][loser] = intensity.value();
        self.cells[loser][winner] = intensity.reciprocal();
    }

    /// Returns the matrix dimension.
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Returns the row/column labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns entry (i, j).
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        self.cells.get(i)?.get(j).copied()
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.cells
    }

    /// Returns true if no preference has been recorded.
    pub fn is_neutral(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 1.0)
    }

    /// Checks the diagonal and reciprocal invariants within `tolerance`.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        let n = self.size();
        for i in 0..n {
            if (self.cells[i][i] - 1.0).abs() > tolerance {
                return false;
            }
            for j in i + 1..n {
                if (self.cells[i][j] * self.cells[j][i] - 1.0).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
