//! Analysis Module - Pure scoring services for response-time surveys.
//!
//! This module contains stateless functions that turn timed pairwise choices
//! into rankings.
//!
//! # Components
//!
//! - `PairingGenerator` - Every unordered pair of an item set, shuffled
//! - `ResponseNormalizer` - Response times onto the 1-7 intensity scale
//! - `ComparisonMatrixBuilder` - Decisions folded into a reciprocal matrix
//! - `EigenvectorEstimator` - Geometric-mean weights from a matrix
//! - `ScoreAggregator` - Keyword weights × option weights → option scores
//! - `SurveyAnalyzer` - The whole pipeline over a finished survey
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies.

mod comparison_matrix;
mod eigenvector;
mod matrix_builder;
mod normalizer;
mod pairing;
mod score_aggregator;
mod survey_analyzer;

pub use comparison_matrix::ComparisonMatrix;
pub use eigenvector::{EigenvectorEstimator, WeightVector};
pub use matrix_builder::{
    BuildStatus, ComparisonMatrixBuilder, DecisionKind, DegradedReason, FieldMapping,
    FieldSource, MatrixBuild, UnknownDecisionKind,
};
pub use normalizer::ResponseNormalizer;
pub use pairing::PairingGenerator;
pub use score_aggregator::{AggregateScores, CategoryContribution, OptionScore, ScoreAggregator};
pub use survey_analyzer::{AnalysisError, Dataset, SurveyAnalyzer, SurveyData, SurveyResults};
