//! RecordKeywordDecisionHandler - Appends one keyword choice to the log.

use std::sync::Arc;
use tracing::debug;

use crate::application::{SurveyError, SurveyRepository};
use crate::domain::foundation::{ResponseTime, ValidationError};
use crate::domain::survey::{KeywordDecision, Pair};
use crate::ports::ResponseStore;

/// Command to record a keyword choice.
#[derive(Debug, Clone)]
pub struct RecordKeywordDecisionCommand {
    pub pair: Pair,
    pub selected: String,
    pub response_time: ResponseTime,
}

/// Result of recording a keyword choice.
#[derive(Debug, Clone)]
pub struct RecordKeywordDecisionResult {
    pub decision: KeywordDecision,
    /// False when the same pair and choice were already logged.
    pub recorded: bool,
    pub total: usize,
}

/// Handler for keyword choices.
pub struct RecordKeywordDecisionHandler {
    repository: SurveyRepository,
}

impl RecordKeywordDecisionHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            repository: SurveyRepository::new(store),
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordKeywordDecisionCommand,
    ) -> Result<RecordKeywordDecisionResult, SurveyError> {
        let keywords = self.repository.keywords().await?;
        for item in [cmd.pair.first(), cmd.pair.second()] {
            if !keywords.is_empty() && !keywords.contains(item) {
                return Err(ValidationError::invalid_format(
                    "pair",
                    format!("'{}' is not a survey keyword", item),
                )
                .into());
            }
        }

        let decision = KeywordDecision::new(&cmd.pair, cmd.selected, cmd.response_time)?;

        let mut log = self.repository.keyword_decisions().await?;
        let recorded = log.record(decision.clone());
        if recorded {
            self.repository.save_keyword_decisions(&log).await?;
        }

        debug!(
            selected = %decision.selected,
            response_time = %decision.response_time,
            recorded,
            "Keyword decision"
        );

        Ok(RecordKeywordDecisionResult {
            decision,
            recorded,
            total: log.len(),
        })
    }
}
