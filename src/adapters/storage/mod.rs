//! Storage Adapters
//!
//! Implementations of the ResponseStore port.
//!
//! ## Available Adapters
//!
//! - **FileResponseStore** - One JSON file per key on disk
//! - **InMemoryResponseStore** - Keys held in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileResponseStore, InMemoryResponseStore};
//!
//! // Production: file-based storage
//! let store = FileResponseStore::new("./data/responses");
//!
//! // Testing: in-memory storage
//! let store = InMemoryResponseStore::new();
//! ```

mod file_response_store;
mod in_memory_response_store;

pub use file_response_store::FileResponseStore;
pub use in_memory_response_store::InMemoryResponseStore;
