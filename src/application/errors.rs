//! Survey application errors.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{ExportError, KeywordSourceError, StoreError};

/// Errors returned by the survey handlers.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("No keywords found")]
    NoKeywords,

    #[error("Survey has no option to compare for keyword index {index}")]
    NoCurrentKeyword { index: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Keyword source error: {0}")]
    KeywordSource(#[from] KeywordSourceError),
}

impl SurveyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SurveyError::NoKeywords => ErrorCode::NoKeywords,
            SurveyError::NoCurrentKeyword { .. } => ErrorCode::OutOfRange,
            SurveyError::Validation(_) => ErrorCode::ValidationFailed,
            SurveyError::Analysis(_) => ErrorCode::MissingDataset,
            SurveyError::Store(_) => ErrorCode::StorageError,
            SurveyError::Export(_) => ErrorCode::ExportError,
            SurveyError::KeywordSource(_) => ErrorCode::InternalError,
        }
    }
}

impl From<SurveyError> for DomainError {
    fn from(err: SurveyError) -> Self {
        let detail = match &err {
            SurveyError::Validation(e) => return DomainError::from(e.clone()),
            SurveyError::Analysis(AnalysisError::MissingData { dataset }) => {
                Some(("dataset", dataset.to_string()))
            }
            SurveyError::NoCurrentKeyword { index } => Some(("index", index.to_string())),
            _ => None,
        };

        let domain = DomainError::new(err.code(), err.to_string());
        match detail {
            Some((key, value)) => domain.with_detail(key, value),
            None => domain,
        }
    }
}
