//! Composition root - wires adapters into the survey handlers.

use std::sync::Arc;
use tracing::info;

use crate::adapters::{
    FileKeywordSource, FileResponseStore, InMemoryReportExporter, InMemoryResponseStore,
    JsonReportExporter, StaticKeywordSource,
};
use crate::application::{
    AdvanceKeywordHandler, CompleteSurveyHandler, CompleteSurveyResult, PrepareSurveyCommand,
    PrepareSurveyHandler, RecordKeywordDecisionHandler, RecordOptionDecisionHandler,
    ResetSurveyHandler, SurveyPlan,
};
use crate::config::AppConfig;
use crate::domain::foundation::DomainError;
use crate::domain::survey::ItemSet;
use crate::ports::{KeywordSource, ReportExporter, ResponseStore};

/// Every survey handler, sharing one store.
///
/// Recording a decision reads the whole log, appends, and writes it back.
/// Calls are not serialized against each other, so two records running at
/// once can lose one of them. Drive one survey from a single task.
pub struct SurveyApp {
    options: Vec<String>,
    pub prepare: PrepareSurveyHandler,
    pub record_keyword: RecordKeywordDecisionHandler,
    pub record_option: RecordOptionDecisionHandler,
    pub advance_keyword: AdvanceKeywordHandler,
    pub complete: CompleteSurveyHandler,
    pub reset: ResetSurveyHandler,
}

impl SurveyApp {
    /// Builds the app from explicit ports.
    pub fn new(
        options: Vec<String>,
        keyword_source: Arc<dyn KeywordSource>,
        store: Arc<dyn ResponseStore>,
        exporter: Arc<dyn ReportExporter>,
    ) -> Self {
        Self {
            options,
            prepare: PrepareSurveyHandler::new(keyword_source, store.clone()),
            record_keyword: RecordKeywordDecisionHandler::new(store.clone()),
            record_option: RecordOptionDecisionHandler::new(store.clone()),
            advance_keyword: AdvanceKeywordHandler::new(store.clone()),
            complete: CompleteSurveyHandler::new(store.clone(), exporter),
            reset: ResetSurveyHandler::new(store),
        }
    }

    /// Builds the file-backed app described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            keywords = %config.survey.keywords_path.display(),
            data_dir = %config.storage.data_dir.display(),
            report = %config.storage.report_path.display(),
            "Wiring file-backed survey"
        );
        Self::new(
            config.survey.options_list(),
            Arc::new(FileKeywordSource::new(&config.survey.keywords_path)),
            Arc::new(FileResponseStore::new(&config.storage.data_dir)),
            Arc::new(JsonReportExporter::new(&config.storage.report_path)),
        )
    }

    /// Builds an app that keeps everything in memory.
    ///
    /// The returned store and exporter share state with the app.
    pub fn in_memory(
        keywords: ItemSet,
        options: Vec<String>,
    ) -> (Self, InMemoryResponseStore, InMemoryReportExporter) {
        let store = InMemoryResponseStore::new();
        let exporter = InMemoryReportExporter::new();
        let app = Self::new(
            options,
            Arc::new(StaticKeywordSource::new(keywords)),
            Arc::new(store.clone()),
            Arc::new(exporter.clone()),
        );
        (app, store, exporter)
    }

    /// The configured options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Prepares a survey over the configured options.
    pub async fn start(&self) -> Result<SurveyPlan, DomainError> {
        let plan = self
            .prepare
            .handle(PrepareSurveyCommand {
                options: self.options.clone(),
            })
            .await?;
        Ok(plan)
    }

    /// Analyzes the recorded survey and exports its report.
    pub async fn finish(&self) -> Result<CompleteSurveyResult, DomainError> {
        Ok(self.complete.handle().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::StorageKey;
    use tempfile::TempDir;

    #[tokio::test]
    async fn from_config_uses_configured_paths() {
        let temp_dir = TempDir::new().unwrap();
        let keywords = temp_dir.path().join("keywords.txt");
        std::fs::write(&keywords, "가격,품질").unwrap();

        let mut config = AppConfig::default();
        config.survey.keywords_path = keywords;
        config.storage.data_dir = temp_dir.path().join("responses");

        let app = SurveyApp::from_config(&config);
        let plan = app.start().await.unwrap();

        assert_eq!(plan.options.len(), 4);
        assert!(temp_dir
            .path()
            .join("responses")
            .join(format!("{}.json", StorageKey::Keywords))
            .exists());
    }

    #[tokio::test]
    async fn from_config_without_keyword_file_reports_no_keywords() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.survey.keywords_path = temp_dir.path().join("missing.txt");
        config.storage.data_dir = temp_dir.path().join("responses");

        let app = SurveyApp::from_config(&config);
        let err = app.start().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoKeywords);
        assert_eq!(err.to_string(), "[NO_KEYWORDS] No keywords found");
    }
}
