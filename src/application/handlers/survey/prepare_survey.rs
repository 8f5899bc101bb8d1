//! PrepareSurveyHandler - Loads the keyword list and lays out both rounds.

use rand::thread_rng;
use std::sync::Arc;
use tracing::{error, info};

use crate::application::{SurveyError, SurveyRepository};
use crate::domain::survey::{ItemDomain, ItemSet, PairDeck};
use crate::ports::{KeywordSource, ResponseStore};

/// Command to prepare a survey.
#[derive(Debug, Clone)]
pub struct PrepareSurveyCommand {
    /// The options compared under every keyword.
    pub options: Vec<String>,
}

/// The items of a prepared survey and the keyword round's pair order.
#[derive(Debug, Clone)]
pub struct SurveyPlan {
    pub keywords: ItemSet,
    pub options: ItemSet,
    pub keyword_deck: PairDeck,
}

impl SurveyPlan {
    /// A freshly shuffled deck of option pairs, one per keyword round.
    pub fn option_deck(&self) -> PairDeck {
        PairDeck::shuffled(&self.options, &mut thread_rng())
    }
}

/// Handler for preparing surveys.
pub struct PrepareSurveyHandler {
    keyword_source: Arc<dyn KeywordSource>,
    repository: SurveyRepository,
}

impl PrepareSurveyHandler {
    pub fn new(keyword_source: Arc<dyn KeywordSource>, store: Arc<dyn ResponseStore>) -> Self {
        Self {
            keyword_source,
            repository: SurveyRepository::new(store),
        }
    }

    pub async fn handle(&self, cmd: PrepareSurveyCommand) -> Result<SurveyPlan, SurveyError> {
        // 1. Load keywords; an unreadable source counts as no keywords
        let keywords = match self.keyword_source.load_keywords().await {
            Ok(keywords) => keywords,
            Err(e) => {
                error!(error = %e, "Failed to load keywords");
                ItemSet::empty(ItemDomain::Keyword)
            }
        };

        if keywords.is_empty() {
            error!("No keywords found.");
            return Err(SurveyError::NoKeywords);
        }

        // 2. Validate options
        let options = ItemSet::new(ItemDomain::Option, cmd.options)?;

        // 3. Persist items and restart the keyword cursor
        self.repository.save_keywords(&keywords).await?;
        self.repository.save_options(&options).await?;
        self.repository.set_current_keyword_index(0).await?;

        let keyword_deck = PairDeck::shuffled(&keywords, &mut thread_rng());

        info!(
            keywords = keywords.len(),
            options = options.len(),
            keyword_pairs = keyword_deck.total(),
            "Survey prepared"
        );

        Ok(SurveyPlan {
            keywords,
            options,
            keyword_deck,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryResponseStore, StaticKeywordSource};
    use crate::ports::{KeywordSourceError, StorageKey};
    use async_trait::async_trait;

    struct FailingKeywordSource;

    #[async_trait]
    impl KeywordSource for FailingKeywordSource {
        async fn load_keywords(&self) -> Result<ItemSet, KeywordSourceError> {
            Err(KeywordSourceError::Unreadable {
                path: "data/keywords.txt".to_string(),
                reason: "not found".to_string(),
            })
        }
    }

    fn keywords(labels: &[&str]) -> Arc<dyn KeywordSource> {
        Arc::new(StaticKeywordSource::new(
            ItemSet::new(ItemDomain::Keyword, labels.iter().copied()).unwrap(),
        ))
    }

    fn options() -> Vec<String> {
        ["image1.jpg", "image2.jpg", "image3.jpg", "image4.jpg"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[tokio::test]
    async fn prepare_builds_plan_and_persists_items() {
        let store = InMemoryResponseStore::new();
        let handler = PrepareSurveyHandler::new(keywords(&["가격", "품질", "디자인"]), Arc::new(store.clone()));

        let plan = handler
            .handle(PrepareSurveyCommand { options: options() })
            .await
            .unwrap();

        assert_eq!(plan.keywords.len(), 3);
        assert_eq!(plan.keyword_deck.total(), 3);
        assert_eq!(plan.option_deck().total(), 6);
        assert_eq!(
            store.get(StorageKey::Keywords).await.unwrap().as_deref(),
            Some(r#"["가격","품질","디자인"]"#)
        );
        assert_eq!(
            store.get(StorageKey::CurrentKeywordIndex).await.unwrap().as_deref(),
            Some("0")
        );
    }

    #[tokio::test]
    async fn prepare_without_keywords_fails() {
        let store = InMemoryResponseStore::new();
        let handler = PrepareSurveyHandler::new(keywords(&[]), Arc::new(store.clone()));

        let result = handler.handle(PrepareSurveyCommand { options: options() }).await;

        assert!(matches!(result, Err(SurveyError::NoKeywords)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn unreadable_source_counts_as_no_keywords() {
        let handler = PrepareSurveyHandler::new(
            Arc::new(FailingKeywordSource),
            Arc::new(InMemoryResponseStore::new()),
        );

        let result = handler.handle(PrepareSurveyCommand { options: options() }).await;
        assert!(matches!(result, Err(SurveyError::NoKeywords)));
    }

    #[tokio::test]
    async fn duplicate_options_are_rejected() {
        let handler = PrepareSurveyHandler::new(
            keywords(&["가격"]),
            Arc::new(InMemoryResponseStore::new()),
        );

        let result = handler
            .handle(PrepareSurveyCommand {
                options: vec!["A".to_string(), "A".to_string()],
            })
            .await;
        assert!(matches!(result, Err(SurveyError::Validation(_))));
    }

    #[tokio::test]
    async fn single_keyword_has_empty_keyword_round() {
        let handler = PrepareSurveyHandler::new(
            keywords(&["가격"]),
            Arc::new(InMemoryResponseStore::new()),
        );

        let plan = handler
            .handle(PrepareSurveyCommand { options: options() })
            .await
            .unwrap();
        assert!(!plan.keyword_deck.has_next());
    }
}
