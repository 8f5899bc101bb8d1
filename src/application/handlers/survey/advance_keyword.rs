//! AdvanceKeywordHandler - Moves the option rounds on to the next keyword.

use std::sync::Arc;
use tracing::info;

use crate::application::{SurveyError, SurveyRepository};
use crate::ports::ResponseStore;

/// Where the survey stands after advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordProgress {
    /// Options are now judged under `keyword`.
    Next { index: usize, keyword: String },
    /// Every keyword has had its option round.
    Finished,
}

/// Handler that advances the current keyword.
pub struct AdvanceKeywordHandler {
    repository: SurveyRepository,
}

impl AdvanceKeywordHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            repository: SurveyRepository::new(store),
        }
    }

    /// Returns the keyword whose option round is in progress, if any.
    pub async fn current(&self) -> Result<Option<String>, SurveyError> {
        let keywords = self.repository.keywords().await?;
        let index = self.repository.current_keyword_index().await?;
        Ok(keywords.get(index).map(str::to_string))
    }

    pub async fn handle(&self) -> Result<KeywordProgress, SurveyError> {
        let keywords = self.repository.keywords().await?;
        let next = self.repository.current_keyword_index().await? + 1;

        if next < keywords.len() {
            self.repository.set_current_keyword_index(next).await?;
            let keyword = keywords.get(next).map(str::to_string).unwrap_or_default();
            info!(index = next, keyword = %keyword, "Advanced to next keyword");
            Ok(KeywordProgress::Next {
                index: next,
                keyword,
            })
        } else {
            self.repository
                .set_current_keyword_index(keywords.len())
                .await?;
            info!("All keyword rounds finished");
            Ok(KeywordProgress::Finished)
        }
    }
}
