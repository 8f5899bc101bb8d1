//! In-Memory Response Store Adapter
//!
//! Keeps survey state in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ResponseStore, StorageKey, StoreError};

/// In-memory store for survey state
#[derive(Debug, Clone)]
pub struct InMemoryResponseStore {
    values: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryResponseStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

impl Default for InMemoryResponseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StoreError> {
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StoreError> {
        self.values.write().await.remove(&key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.values.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = InMemoryResponseStore::new();
        assert_eq!(store.get(StorageKey::Keywords).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryResponseStore::new();
        store.set(StorageKey::Images, "[\"a\"]".to_string()).await.unwrap();
        store.set(StorageKey::Images, "[\"b\"]".to_string()).await.unwrap();

        assert_eq!(
            store.get(StorageKey::Images).await.unwrap().as_deref(),
            Some("[\"b\"]")
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let store = InMemoryResponseStore::new();
        store.set(StorageKey::Images, "[]".to_string()).await.unwrap();
        store.set(StorageKey::Keywords, "[]".to_string()).await.unwrap();

        store.remove(StorageKey::Images).await.unwrap();
        store.remove(StorageKey::Images).await.unwrap();
        assert_eq!(store.get(StorageKey::Images).await.unwrap(), None);

        store.clear().await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryResponseStore::new();
        let other = store.clone();
        other.set(StorageKey::CurrentKeywordIndex, "1".to_string()).await.unwrap();

        assert_eq!(
            store.get(StorageKey::CurrentKeywordIndex).await.unwrap().as_deref(),
            Some("1")
        );
    }
}
