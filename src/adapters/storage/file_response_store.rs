//! File-based Response Store Adapter
//!
//! Stores each key as `<key>.json` inside one directory, so a survey in
//! progress survives a restart and can be inspected by hand.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{ResponseStore, StorageKey, StoreError};

/// File-based store for survey state
#[derive(Debug, Clone)]
pub struct FileResponseStore {
    base_path: PathBuf,
}

impl FileResponseStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileResponseStore::new("./data/responses");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// The directory holding the key files
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn key_path(&self, key: StorageKey) -> PathBuf {
        self.base_path.join(format!("{}.json", key.as_str()))
    }
}

fn io_error(e: std::io::Error) -> StoreError {
    StoreError::Io(e.to_string())
}

#[async_trait]
impl ResponseStore for FileResponseStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(e)),
        }
    }

    async fn set(&self, key: StorageKey, value: String) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;
        fs::write(self.key_path(key), value).await.map_err(io_error)
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StoreError> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(e)),
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        for key in StorageKey::ALL {
            self.remove(key).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        store
            .set(StorageKey::Keywords, r#"["가격","품질"]"#.to_string())
            .await
            .unwrap();

        let loaded = store.get(StorageKey::Keywords).await.unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"["가격","품질"]"#));
        assert!(temp_dir.path().join("keywords.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path().join("not-yet-created"));

        assert_eq!(store.get(StorageKey::ResponseTimes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join("responses");
        let store = FileResponseStore::new(&dir);

        store
            .set(StorageKey::CurrentKeywordIndex, "0".to_string())
            .await
            .unwrap();

        assert!(dir.join("currentKeywordIndex.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        store.set(StorageKey::Images, "[]".to_string()).await.unwrap();
        store.remove(StorageKey::Images).await.unwrap();
        store.remove(StorageKey::Images).await.unwrap();

        assert_eq!(store.get(StorageKey::Images).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_clear_removes_all_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        for key in StorageKey::ALL {
            store.set(key, "[]".to_string()).await.unwrap();
        }
        store.clear().await.unwrap();

        for key in StorageKey::ALL {
            assert_eq!(store.get(key).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_file_store_survives_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        FileResponseStore::new(temp_dir.path())
            .set(StorageKey::KeywordResponseTimes, "[]".to_string())
            .await
            .unwrap();

        let reopened = FileResponseStore::new(temp_dir.path());
        assert_eq!(
            reopened.get(StorageKey::KeywordResponseTimes).await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
