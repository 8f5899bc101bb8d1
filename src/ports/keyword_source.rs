//! Keyword Source Port - Where the survey's keyword list comes from.

use async_trait::async_trait;

use crate::domain::survey::ItemSet;

/// Errors that can occur while loading keywords
#[derive(Debug, thiserror::Error)]
pub enum KeywordSourceError {
    #[error("Failed to read keywords from {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid keyword list: {0}")]
    Invalid(String),
}

/// Port for loading the keyword list
#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Load the keywords in presentation order.
    ///
    /// # Errors
    /// Returns `KeywordSourceError` if the source cannot be read or holds
    /// duplicate keywords.
    async fn load_keywords(&self) -> Result<ItemSet, KeywordSourceError>;
}
