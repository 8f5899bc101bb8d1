//! Response Store Port - Key/value persistence for survey progress.
//!
//! Values are JSON documents stored under a fixed set of keys, so a
//! survey can be resumed or analyzed after the respondent is done.

use async_trait::async_trait;
use std::fmt;

/// Keys under which survey state is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Keyword-versus-keyword decisions.
    KeywordResponseTimes,
    /// Option-versus-option decisions, tagged with their keyword.
    ResponseTimes,
    /// Position of the keyword whose options are being compared.
    CurrentKeywordIndex,
    /// The loaded keyword list.
    Keywords,
    /// The option list.
    Images,
}

impl StorageKey {
    /// All keys, in a stable order.
    pub const ALL: [StorageKey; 5] = [
        StorageKey::KeywordResponseTimes,
        StorageKey::ResponseTimes,
        StorageKey::CurrentKeywordIndex,
        StorageKey::Keywords,
        StorageKey::Images,
    ];

    /// Returns the persisted key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::KeywordResponseTimes => "keywordResponseTimes",
            StorageKey::ResponseTimes => "responseTimes",
            StorageKey::CurrentKeywordIndex => "currentKeywordIndex",
            StorageKey::Keywords => "keywords",
            StorageKey::Images => "images",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize value for '{key}': {reason}")]
    Serialization { key: StorageKey, reason: String },

    #[error("Failed to deserialize value for '{key}': {reason}")]
    Deserialization { key: StorageKey, reason: String },
}

/// Port for reading and writing survey state by key.
///
/// Semantics follow a browser's local storage: `get` on an absent key is
/// `Ok(None)`, `set` overwrites, `remove` and `clear` are idempotent.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Returns the raw JSON stored under `key`, if any.
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: StorageKey, value: String) -> Result<(), StoreError>;

    /// Removes `key`.
    async fn remove(&self, key: StorageKey) -> Result<(), StoreError>;

    /// Removes every key.
    async fn clear(&self) -> Result<(), StoreError>;
}
