//! Ports - Interfaces between the survey core and the outside world.
//!
//! - `ResponseStore` - persisted survey state keyed by `StorageKey`
//! - `KeywordSource` - the keyword list
//! - `ReportExporter` - the finished report

mod keyword_source;
mod report_exporter;
mod response_store;

pub use keyword_source::{KeywordSource, KeywordSourceError};
pub use report_exporter::{ExportError, ReportExporter};
pub use response_store::{ResponseStore, StorageKey, StoreError};
