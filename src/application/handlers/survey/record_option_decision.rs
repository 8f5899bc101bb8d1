//! RecordOptionDecisionHandler - Appends one option choice, tagged with its keyword.

use std::sync::Arc;
use tracing::debug;

use crate::application::{SurveyError, SurveyRepository};
use crate::domain::foundation::{ResponseTime, ValidationError};
use crate::domain::survey::{OptionDecision, Pair};
use crate::ports::ResponseStore;

/// Command to record an option choice.
#[derive(Debug, Clone)]
pub struct RecordOptionDecisionCommand {
    pub pair: Pair,
    pub selected: String,
    pub response_time: ResponseTime,
    /// Keyword being judged. `None` uses the survey's current keyword.
    pub keyword: Option<String>,
}

/// Result of recording an option choice.
#[derive(Debug, Clone)]
pub struct RecordOptionDecisionResult {
    pub decision: OptionDecision,
    pub total: usize,
}

/// Handler for option choices.
pub struct RecordOptionDecisionHandler {
    repository: SurveyRepository,
}

impl RecordOptionDecisionHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            repository: SurveyRepository::new(store),
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordOptionDecisionCommand,
    ) -> Result<RecordOptionDecisionResult, SurveyError> {
        let keywords = self.repository.keywords().await?;

        let keyword = match cmd.keyword {
            Some(keyword) => {
                if !keywords.is_empty() && !keywords.contains(&keyword) {
                    return Err(ValidationError::invalid_format(
                        "keyword",
                        format!("'{}' is not a survey keyword", keyword),
                    )
                    .into());
                }
                keyword
            }
            None => {
                let index = self.repository.current_keyword_index().await?;
                keywords
                    .get(index)
                    .map(str::to_string)
                    .ok_or(SurveyError::NoCurrentKeyword { index })?
            }
        };

        let options = self.repository.options().await?;
        for item in [cmd.pair.first(), cmd.pair.second()] {
            if !options.is_empty() && !options.contains(item) {
                return Err(ValidationError::invalid_format(
                    "pair",
                    format!("'{}' is not a survey option", item),
                )
                .into());
            }
        }

        let decision = OptionDecision::new(keyword, &cmd.pair, cmd.selected, cmd.response_time)?;

        let mut log = self.repository.option_decisions().await?;
        log.record(decision.clone());
        self.repository.save_option_decisions(&log).await?;

        debug!(
            keyword = %decision.keyword,
            selected = %decision.selected,
            response_time = %decision.response_time,
            "Option decision"
        );

        Ok(RecordOptionDecisionResult {
            decision,
            total: log.len(),
        })
    }
}
