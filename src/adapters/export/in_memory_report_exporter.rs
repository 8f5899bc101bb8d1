//! In-Memory Report Exporter Adapter
//!
//! Collects exported reports in memory. Useful for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::report::SurveyReport;
use crate::ports::{ExportError, ReportExporter};

/// Keeps every exported report
#[derive(Debug, Clone, Default)]
pub struct InMemoryReportExporter {
    reports: Arc<RwLock<Vec<SurveyReport>>>,
}

impl InMemoryReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports exported so far, oldest first
    pub async fn reports(&self) -> Vec<SurveyReport> {
        self.reports.read().await.clone()
    }

    /// The most recent report
    pub async fn last(&self) -> Option<SurveyReport> {
        self.reports.read().await.last().cloned()
    }
}

#[async_trait]
impl ReportExporter for InMemoryReportExporter {
    async fn export(&self, report: &SurveyReport) -> Result<(), ExportError> {
        self.reports.write().await.push(report.clone());
        Ok(())
    }
}
