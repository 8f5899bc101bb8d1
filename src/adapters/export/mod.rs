//! Report Export Adapters
//!
//! - **JsonReportExporter** - Pretty JSON file (default `result_data.json`)
//! - **InMemoryReportExporter** - Captures reports (testing)

mod in_memory_report_exporter;
mod json_report_exporter;

pub use in_memory_report_exporter::InMemoryReportExporter;
pub use json_report_exporter::{JsonReportExporter, DEFAULT_REPORT_FILE};
