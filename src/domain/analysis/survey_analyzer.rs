//! Survey Analyzer - turns a finished survey's decisions into weights and scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

use super::{
    AggregateScores, ComparisonMatrix, ComparisonMatrixBuilder, DecisionKind,
    EigenvectorEstimator, ScoreAggregator, WeightVector,
};
use crate::domain::survey::{DecisionLog, ItemSet, KeywordDecision, OptionDecision};

/// The datasets a finished survey consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    Keywords,
    Options,
    KeywordDecisions,
    OptionDecisions,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dataset::Keywords => "keywords",
            Dataset::Options => "options",
            Dataset::KeywordDecisions => "keyword decisions",
            Dataset::OptionDecisions => "option decisions",
        };
        write!(f, "{}", s)
    }
}

/// Errors that stop a survey from being analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Dataset '{dataset}' is missing or empty")]
    MissingData { dataset: Dataset },
}

/// Everything collected during one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyData {
    pub keywords: ItemSet,
    pub options: ItemSet,
    pub keyword_decisions: DecisionLog<KeywordDecision>,
    pub option_decisions: DecisionLog<OptionDecision>,
}

impl SurveyData {
    /// Returns the first dataset that has no entries.
    pub fn first_missing(&self) -> Option<Dataset> {
        if self.keywords.is_empty() {
            Some(Dataset::Keywords)
        } else if self.keyword_decisions.is_empty() {
            Some(Dataset::KeywordDecisions)
        } else if self.option_decisions.is_empty() {
            Some(Dataset::OptionDecisions)
        } else if self.options.is_empty() {
            Some(Dataset::Options)
        } else {
            None
        }
    }
}

/// Matrices, weights, and scores computed from a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResults {
    pub keyword_matrix: ComparisonMatrix,
    pub keyword_weights: WeightVector,
    /// Option matrix per keyword.
    pub option_matrices: HashMap<String, ComparisonMatrix>,
    /// Option weights per keyword.
    pub option_weights: HashMap<String, WeightVector>,
    pub scores: AggregateScores,
}

/// Runs the full scoring pipeline over a finished survey.
pub struct SurveyAnalyzer;

impl SurveyAnalyzer {
    /// Analyzes a finished survey.
    ///
    /// # Algorithm
    /// 1. Keyword decisions → keyword matrix → keyword weights
    /// 2. For each keyword, the option decisions made under it → option
    ///    matrix → option weights
    /// 3. Option weights combined with keyword weights → aggregate scores
    ///
    /// # Errors
    /// Returns `AnalysisError::MissingData` if any dataset is empty; nothing
    /// is computed in that case.
    pub fn analyze(data: &SurveyData) -> Result<SurveyResults, AnalysisError> {
        if let Some(dataset) = data.first_missing() {
            warn!(%dataset, "One or more data sets are missing");
            return Err(AnalysisError::MissingData { dataset });
        }

        let keyword_build = ComparisonMatrixBuilder::build_kind(
            data.keyword_decisions.entries(),
            &data.keywords,
            DecisionKind::Keyword,
        );
        let keyword_weights = EigenvectorEstimator::estimate(&keyword_build.matrix);

        let mut option_matrices = HashMap::with_capacity(data.keywords.len());
        let mut option_weights = HashMap::with_capacity(data.keywords.len());

        for keyword in data.keywords.labels() {
            let decisions = data.option_decisions.for_keyword(keyword);
            let build =
                ComparisonMatrixBuilder::build_kind(&decisions, &data.options, DecisionKind::Option);
            if build.skipped > 0 {
                warn!(keyword = %keyword, skipped = build.skipped, "Skipped option decisions");
            }

            option_weights.insert(keyword.clone(), EigenvectorEstimator::estimate(&build.matrix));
            option_matrices.insert(keyword.clone(), build.matrix);
        }

        let scores = ScoreAggregator::aggregate(&keyword_weights, &option_weights, &data.options);

        debug!(
            keywords = data.keywords.len(),
            options = data.options.len(),
            "Survey analysis complete"
        );

        Ok(SurveyResults {
            keyword_matrix: keyword_build.matrix,
            keyword_weights,
            option_matrices,
            option_weights,
            scores,
        })
    }
}
