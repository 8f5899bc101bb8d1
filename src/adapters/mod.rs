//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the survey core to external systems:
//! - `storage` - Survey state stores (file, in-memory)
//! - `keywords` - Keyword list sources (file, static)
//! - `export` - Report exporters (JSON file, in-memory)

pub mod export;
pub mod keywords;
pub mod storage;

pub use export::{InMemoryReportExporter, JsonReportExporter, DEFAULT_REPORT_FILE};
pub use keywords::{FileKeywordSource, StaticKeywordSource};
pub use storage::{FileResponseStore, InMemoryResponseStore};
