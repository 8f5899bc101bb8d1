//! Static Keyword Source Adapter
//!
//! Serves a fixed keyword list. Useful for testing and embedding.

use async_trait::async_trait;

use crate::domain::survey::ItemSet;
use crate::ports::{KeywordSource, KeywordSourceError};

/// Keyword source backed by a fixed set
#[derive(Debug, Clone)]
pub struct StaticKeywordSource {
    keywords: ItemSet,
}

impl StaticKeywordSource {
    pub fn new(keywords: ItemSet) -> Self {
        Self { keywords }
    }
}

#[async_trait]
impl KeywordSource for StaticKeywordSource {
    async fn load_keywords(&self) -> Result<ItemSet, KeywordSourceError> {
        Ok(self.keywords.clone())
    }
}
