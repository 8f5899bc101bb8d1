//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod errors;
pub mod handlers;
mod survey_repository;

pub use errors::SurveyError;
pub use handlers::{
    AdvanceKeywordHandler, CompleteSurveyHandler, CompleteSurveyResult, KeywordProgress,
    PrepareSurveyCommand, PrepareSurveyHandler, RecordKeywordDecisionCommand,
    RecordKeywordDecisionHandler, RecordKeywordDecisionResult, RecordOptionDecisionCommand,
    RecordOptionDecisionHandler, RecordOptionDecisionResult, ResetSurveyHandler, SurveyPlan,
};
pub use survey_repository::SurveyRepository;
