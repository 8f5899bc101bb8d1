//! ResetSurveyHandler - Discards all recorded survey state.

use std::sync::Arc;
use tracing::info;

use crate::application::{SurveyError, SurveyRepository};
use crate::ports::ResponseStore;

/// Handler for restarting a survey from scratch.
pub struct ResetSurveyHandler {
    repository: SurveyRepository,
}

impl ResetSurveyHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            repository: SurveyRepository::new(store),
        }
    }

    pub async fn handle(&self) -> Result<(), SurveyError> {
        self.repository.clear().await?;
        info!("Survey state cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResponseStore;
    use crate::ports::StorageKey;

    #[tokio::test]
    async fn reset_clears_every_key() {
        let store = InMemoryResponseStore::new();
        for key in StorageKey::ALL {
            store.set(key, "[]".to_string()).await.unwrap();
        }

        ResetSurveyHandler::new(Arc::new(store.clone()))
            .handle()
            .await
            .unwrap();

        assert!(store.is_empty().await);
    }
}
