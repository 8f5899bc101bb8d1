//! Survey Repository - typed access to the survey state in a `ResponseStore`.
//!
//! Every key holds JSON. An absent key reads as the empty value (no
//! keywords, no decisions, keyword index 0).

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::SurveyData;
use crate::domain::survey::{DecisionLog, ItemDomain, ItemSet, KeywordDecision, OptionDecision};
use crate::ports::{ResponseStore, StorageKey, StoreError};

/// Reads and writes survey state by key.
#[derive(Clone)]
pub struct SurveyRepository {
    store: Arc<dyn ResponseStore>,
}

impl SurveyRepository {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    pub async fn keywords(&self) -> Result<ItemSet, StoreError> {
        self.read_items(StorageKey::Keywords, ItemDomain::Keyword).await
    }

    pub async fn save_keywords(&self, keywords: &ItemSet) -> Result<(), StoreError> {
        self.write(StorageKey::Keywords, keywords.labels()).await
    }

    pub async fn options(&self) -> Result<ItemSet, StoreError> {
        self.read_items(StorageKey::Images, ItemDomain::Option).await
    }

    pub async fn save_options(&self, options: &ItemSet) -> Result<(), StoreError> {
        self.write(StorageKey::Images, options.labels()).await
    }

    pub async fn keyword_decisions(&self) -> Result<DecisionLog<KeywordDecision>, StoreError> {
        Ok(self
            .read(StorageKey::KeywordResponseTimes)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_keyword_decisions(
        &self,
        log: &DecisionLog<KeywordDecision>,
    ) -> Result<(), StoreError> {
        self.write(StorageKey::KeywordResponseTimes, log).await
    }

    pub async fn option_decisions(&self) -> Result<DecisionLog<OptionDecision>, StoreError> {
        Ok(self.read(StorageKey::ResponseTimes).await?.unwrap_or_default())
    }

    pub async fn save_option_decisions(
        &self,
        log: &DecisionLog<OptionDecision>,
    ) -> Result<(), StoreError> {
        self.write(StorageKey::ResponseTimes, log).await
    }

    pub async fn current_keyword_index(&self) -> Result<usize, StoreError> {
        Ok(self
            .read(StorageKey::CurrentKeywordIndex)
            .await?
            .unwrap_or(0))
    }

    pub async fn set_current_keyword_index(&self, index: usize) -> Result<(), StoreError> {
        self.write(StorageKey::CurrentKeywordIndex, &index).await
    }

    /// Loads everything the analyzer needs.
    pub async fn survey_data(&self) -> Result<SurveyData, StoreError> {
        Ok(SurveyData {
            keywords: self.keywords().await?,
            options: self.options().await?,
            keyword_decisions: self.keyword_decisions().await?,
            option_decisions: self.option_decisions().await?,
        })
    }

    /// Removes all survey state.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.clear().await
    }

    async fn read_items(&self, key: StorageKey, domain: ItemDomain) -> Result<ItemSet, StoreError> {
        let labels: Vec<String> = self.read(key).await?.unwrap_or_default();
        ItemSet::new(domain, labels).map_err(|e| StoreError::Deserialization {
            key,
            reason: e.to_string(),
        })
    }

    async fn read<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StoreError> {
        match self.store.get(key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Deserialization {
                    key,
                    reason: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    async fn write<T: Serialize + ?Sized + Sync>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            key,
            reason: e.to_string(),
        })?;
        self.store.set(key, json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryResponseStore;
    use crate::domain::foundation::ResponseTime;
    use crate::domain::survey::Pair;

    fn setup() -> (InMemoryResponseStore, SurveyRepository) {
        let store = InMemoryResponseStore::new();
        let repo = SurveyRepository::new(Arc::new(store.clone()));
        (store, repo)
    }

    #[tokio::test]
    async fn empty_store_reads_as_empty_survey() {
        let (_, repo) = setup();
        let data = repo.survey_data().await.unwrap();

        assert!(data.keywords.is_empty());
        assert!(data.options.is_empty());
        assert!(data.keyword_decisions.is_empty());
        assert!(data.option_decisions.is_empty());
        assert_eq!(repo.current_keyword_index().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn items_persist_as_plain_arrays() {
        let (store, repo) = setup();
        let keywords = ItemSet::new(ItemDomain::Keyword, ["가격", "품질"]).unwrap();

        repo.save_keywords(&keywords).await.unwrap();

        assert_eq!(
            store.get(StorageKey::Keywords).await.unwrap().as_deref(),
            Some(r#"["가격","품질"]"#)
        );
        assert_eq!(repo.keywords().await.unwrap(), keywords);
    }

    #[tokio::test]
    async fn decisions_read_from_log_json() {
        let (store, repo) = setup();
        store
            .set(
                StorageKey::ResponseTimes,
                r#"[{"responseTime":1.25,"leftImage":"A","rightImage":"B","selectedImage":"B","keyword":"가격"}]"#
                    .to_string(),
            )
            .await
            .unwrap();

        let log = repo.option_decisions().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].selected, "B");
    }

    #[tokio::test]
    async fn keyword_decisions_round_trip() {
        let (_, repo) = setup();
        let pair = Pair::new("가격", "품질").unwrap();
        let mut log = DecisionLog::<KeywordDecision>::new();
        log.record(
            KeywordDecision::new(&pair, "가격", ResponseTime::try_from_seconds(0.5).unwrap())
                .unwrap(),
        );

        repo.save_keyword_decisions(&log).await.unwrap();
        assert_eq!(repo.keyword_decisions().await.unwrap(), log);
    }

    #[tokio::test]
    async fn corrupt_json_is_deserialization_error() {
        let (store, repo) = setup();
        store
            .set(StorageKey::KeywordResponseTimes, "not json".to_string())
            .await
            .unwrap();

        let result = repo.keyword_decisions().await;
        assert!(matches!(
            result,
            Err(StoreError::Deserialization {
                key: StorageKey::KeywordResponseTimes,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn duplicate_stored_items_are_rejected() {
        let (store, repo) = setup();
        store
            .set(StorageKey::Images, r#"["A","A"]"#.to_string())
            .await
            .unwrap();

        assert!(repo.options().await.is_err());
    }

    #[tokio::test]
    async fn keyword_index_round_trips() {
        let (store, repo) = setup();
        repo.set_current_keyword_index(2).await.unwrap();

        assert_eq!(
            store.get(StorageKey::CurrentKeywordIndex).await.unwrap().as_deref(),
            Some("2")
        );
        assert_eq!(repo.current_keyword_index().await.unwrap(), 2);
    }
}
