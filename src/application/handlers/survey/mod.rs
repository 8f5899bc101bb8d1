//! Survey command handlers.

mod advance_keyword;
mod complete_survey;
mod prepare_survey;
mod record_keyword_decision;
mod record_option_decision;
mod reset_survey;

pub use advance_keyword::{AdvanceKeywordHandler, KeywordProgress};
pub use complete_survey::{CompleteSurveyHandler, CompleteSurveyResult};
pub use prepare_survey::{PrepareSurveyCommand, PrepareSurveyHandler, SurveyPlan};
pub use record_keyword_decision::{
    RecordKeywordDecisionCommand, RecordKeywordDecisionHandler, RecordKeywordDecisionResult,
};
pub use record_option_decision::{
    RecordOptionDecisionCommand, RecordOptionDecisionHandler, RecordOptionDecisionResult,
};
pub use reset_survey::ResetSurveyHandler;
