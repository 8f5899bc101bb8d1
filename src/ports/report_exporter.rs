//! Report Exporter Port - Writes a finished survey report somewhere durable.

use async_trait::async_trait;

use crate::domain::report::SurveyReport;

/// Errors that can occur during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for exporting survey reports
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Export the report.
    ///
    /// # Errors
    /// Returns `ExportError` if the report cannot be written
    async fn export(&self, report: &SurveyReport) -> Result<(), ExportError>;
}
