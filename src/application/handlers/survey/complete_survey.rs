//! CompleteSurveyHandler - Analyzes the finished survey and exports the report.

use std::sync::Arc;
use tracing::info;

use crate::application::{SurveyError, SurveyRepository};
use crate::domain::analysis::{SurveyAnalyzer, SurveyResults};
use crate::domain::report::SurveyReport;
use crate::ports::{ReportExporter, ResponseStore};

/// Result of completing a survey.
#[derive(Debug, Clone)]
pub struct CompleteSurveyResult {
    pub results: SurveyResults,
    pub report: SurveyReport,
}

/// Handler for completing surveys.
pub struct CompleteSurveyHandler {
    repository: SurveyRepository,
    exporter: Arc<dyn ReportExporter>,
}

impl CompleteSurveyHandler {
    pub fn new(store: Arc<dyn ResponseStore>, exporter: Arc<dyn ReportExporter>) -> Self {
        Self {
            repository: SurveyRepository::new(store),
            exporter,
        }
    }

    pub async fn handle(&self) -> Result<CompleteSurveyResult, SurveyError> {
        // 1. Load everything recorded so far
        let data = self.repository.survey_data().await?;

        // 2. Analyze
        let results = SurveyAnalyzer::analyze(&data)?;

        // 3. Lay out and export
        let report = SurveyReport::build(&data, &results);
        self.exporter.export(&report).await?;

        info!(
            best = results.scores.best().unwrap_or("tie"),
            options = results.scores.len(),
            "Survey completed"
        );

        Ok(CompleteSurveyResult { results, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryReportExporter, InMemoryResponseStore};
    use crate::domain::analysis::{AnalysisError, Dataset};
    use crate::domain::foundation::ResponseTime;
    use crate::domain::report::UNIFIED_SHEET;
    use crate::domain::survey::{
        DecisionLog, ItemDomain, ItemSet, KeywordDecision, OptionDecision, Pair,
    };

    fn seconds(s: f64) -> ResponseTime {
        ResponseTime::try_from_seconds(s).unwrap()
    }

    async fn seed(repo: &SurveyRepository, with_option_decisions: bool) {
        repo.save_keywords(&ItemSet::new(ItemDomain::Keyword, ["가격", "품질"]).unwrap())
            .await
            .unwrap();
        repo.save_options(&ItemSet::new(ItemDomain::Option, ["A", "B"]).unwrap())
            .await
            .unwrap();

        let mut keyword_log = DecisionLog::<KeywordDecision>::new();
        keyword_log.record(
            KeywordDecision::new(&Pair::new("가격", "품질").unwrap(), "가격", seconds(0.5)).unwrap(),
        );
        repo.save_keyword_decisions(&keyword_log).await.unwrap();

        if with_option_decisions {
            let pair = Pair::new("A", "B").unwrap();
            let mut option_log = DecisionLog::<OptionDecision>::new();
            option_log.record(OptionDecision::new("가격", &pair, "A", seconds(1.0)).unwrap());
            option_log.record(OptionDecision::new("가격", &pair, "B", seconds(3.0)).unwrap());
            repo.save_option_decisions(&option_log).await.unwrap();
        }
    }

    #[tokio::test]
    async fn completes_and_exports_report() {
        let store: Arc<dyn ResponseStore> = Arc::new(InMemoryResponseStore::new());
        let exporter = InMemoryReportExporter::new();
        seed(&SurveyRepository::new(store.clone()), true).await;

        let handler = CompleteSurveyHandler::new(store, Arc::new(exporter.clone()));
        let result = handler.handle().await.unwrap();

        let price = &result.results.option_weights["가격"];
        assert!(price.weight_of("B").unwrap() > price.weight_of("A").unwrap());
        assert_eq!(result.results.scores.best(), Some("B"));

        let exported = exporter.last().await.unwrap();
        assert_eq!(exported, result.report);
        assert!(exported.sheet(UNIFIED_SHEET).is_some());
    }

    #[tokio::test]
    async fn missing_dataset_exports_nothing() {
        let store: Arc<dyn ResponseStore> = Arc::new(InMemoryResponseStore::new());
        let exporter = InMemoryReportExporter::new();
        seed(&SurveyRepository::new(store.clone()), false).await;

        let handler = CompleteSurveyHandler::new(store, Arc::new(exporter.clone()));
        let result = handler.handle().await;

        assert!(matches!(
            result,
            Err(SurveyError::Analysis(AnalysisError::MissingData {
                dataset: Dataset::OptionDecisions
            }))
        ));
        assert!(exporter.reports().await.is_empty());
    }
}
