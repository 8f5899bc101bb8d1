//! File-based Keyword Source Adapter
//!
//! Reads a comma-delimited keyword list, e.g. `가격, 품질, 디자인`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::survey::{ItemDomain, ItemSet};
use crate::ports::{KeywordSource, KeywordSourceError};

/// Loads keywords from a text file
#[derive(Debug, Clone)]
pub struct FileKeywordSource {
    path: PathBuf,
}

impl FileKeywordSource {
    /// Create a source reading from `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl KeywordSource for FileKeywordSource {
    async fn load_keywords(&self) -> Result<ItemSet, KeywordSourceError> {
        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            KeywordSourceError::Unreadable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let keywords = ItemSet::parse_delimited(ItemDomain::Keyword, &text)
            .map_err(|e| KeywordSourceError::Invalid(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            count = keywords.len(),
            "Loaded keywords"
        );
        Ok(keywords)
    }
}
