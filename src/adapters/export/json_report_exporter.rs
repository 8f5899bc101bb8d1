//! JSON Report Exporter Adapter
//!
//! Writes the report as pretty-printed JSON, one file per export.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::report::SurveyReport;
use crate::ports::{ExportError, ReportExporter};

/// Default file name for exported reports
pub const DEFAULT_REPORT_FILE: &str = "result_data.json";

/// Exports reports to a JSON file
#[derive(Debug, Clone)]
pub struct JsonReportExporter {
    path: PathBuf,
}

impl JsonReportExporter {
    /// Create an exporter writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file the report is written to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonReportExporter {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    async fn export(&self, report: &SurveyReport) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportError::Io(e.to_string()))?;
        }

        fs::write(&self.path, json)
            .await
            .map_err(|e| ExportError::Io(e.to_string()))?;

        info!(path = %self.path.display(), sheets = report.sheets.len(), "Report exported");
        Ok(())
    }
}
