//! Comparison Matrix Builder - folds timed decisions into a comparison matrix.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, error};

use super::{ComparisonMatrix, ResponseNormalizer};
use crate::domain::foundation::Intensity;
use crate::domain::survey::{ItemSet, KeywordDecision, OptionDecision};

/// Which response log a set of decision records comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Keyword-versus-keyword choices.
    #[serde(rename = "keywordResponseTimes")]
    Keyword,
    /// Option-versus-option choices under a keyword.
    #[serde(rename = "imageResponseTimes")]
    Option,
}

impl DecisionKind {
    /// Returns the log name used to select this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Keyword => "keywordResponseTimes",
            DecisionKind::Option => "imageResponseTimes",
        }
    }

    /// Returns the record fields holding each part of a decision.
    pub fn field_mapping(&self) -> FieldMapping {
        match self {
            DecisionKind::Keyword => FieldMapping {
                left: "keyword1",
                right: "keyword2",
                selected: "selectedKeyword",
                time: "responseTime",
            },
            DecisionKind::Option => FieldMapping {
                left: "leftImage",
                right: "rightImage",
                selected: "selectedImage",
                time: "responseTime",
            },
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a decision kind name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid type: {0}")]
pub struct UnknownDecisionKind(pub String);

impl FromStr for DecisionKind {
    type Err = UnknownDecisionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keywordResponseTimes" => Ok(DecisionKind::Keyword),
            "imageResponseTimes" => Ok(DecisionKind::Option),
            other => Err(UnknownDecisionKind(other.to_string())),
        }
    }
}

/// Names of the record fields denoting left item, right item, chosen item,
/// and elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub left: &'static str,
    pub right: &'static str,
    pub selected: &'static str,
    pub time: &'static str,
}

/// Read access to a decision record's fields by name.
pub trait FieldSource {
    /// Returns a text field, if present.
    fn text_field(&self, name: &str) -> Option<&str>;

    /// Returns a numeric field, if present.
    fn number_field(&self, name: &str) -> Option<f64>;
}

impl FieldSource for Value {
    fn text_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    fn number_field(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }
}

impl FieldSource for KeywordDecision {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "keyword1" => Some(&self.left),
            "keyword2" => Some(&self.right),
            "selectedKeyword" => Some(&self.selected),
            _ => None,
        }
    }

    fn number_field(&self, name: &str) -> Option<f64> {
        match name {
            "responseTime" => Some(self.response_time.as_seconds()),
            _ => None,
        }
    }
}

impl FieldSource for OptionDecision {
    fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "leftImage" => Some(&self.left),
            "rightImage" => Some(&self.right),
            "selectedImage" => Some(&self.selected),
            "keyword" => Some(&self.keyword),
            _ => None,
        }
    }

    fn number_field(&self, name: &str) -> Option<f64> {
        match name {
            "responseTime" => Some(self.response_time.as_seconds()),
            _ => None,
        }
    }
}

/// Why a matrix was returned without folding in any decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegradedReason {
    /// The decision kind name did not select a field mapping.
    UnknownKind(String),
}

/// Whether the builder folded the decisions or fell back to the neutral matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStatus {
    Complete,
    Degraded(DegradedReason),
}

/// Result of folding decisions into a matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixBuild {
    pub matrix: ComparisonMatrix,
    pub status: BuildStatus,
    /// Decisions left out because an item was unknown or paired with itself.
    pub skipped: usize,
}

impl MatrixBuild {
    /// Returns true if the decisions were folded in.
    pub fn is_complete(&self) -> bool {
        self.status == BuildStatus::Complete
    }
}

/// Builds comparison matrices from decision records.
pub struct ComparisonMatrixBuilder;

impl ComparisonMatrixBuilder {
    /// Builds a matrix from records of the log named `kind`.
    ///
    /// An unrecognised `kind` is reported and yields the neutral matrix with a
    /// `Degraded` status.
    pub fn build<R: FieldSource>(records: &[R], items: &ItemSet, kind: &str) -> MatrixBuild {
        match kind.parse::<DecisionKind>() {
            Ok(kind) => Self::build_kind(records, items, kind),
            Err(err) => {
                error!(kind = %err.0, "{}", err);
                MatrixBuild {
                    matrix: ComparisonMatrix::neutral(items),
                    status: BuildStatus::Degraded(DegradedReason::UnknownKind(err.0)),
                    skipped: 0,
                }
            }
        }
    }

    /// Builds a matrix from records of a known kind.
    ///
    /// # Algorithm
    /// 1. Collect the time of every record, dropping missing and zero times
    /// 2. Normalize that whole set once onto the 1-7 scale
    /// 3. For each record in order, look up both items; the chosen one gets
    ///    the normalized value of the record's position (1 if there is none),
    ///    the other its reciprocal
    ///
    /// # Edge Cases
    /// - Item not in `items`, or both sides the same: record skipped
    /// - Same pair decided more than once: the last decision wins
    pub fn build_kind<R: FieldSource>(
        records: &[R],
        items: &ItemSet,
        kind: DecisionKind,
    ) -> MatrixBuild {
        let fields = kind.field_mapping();
        let mut matrix = ComparisonMatrix::neutral(items);

        let times: Vec<f64> = records
            .iter()
            .filter_map(|r| r.number_field(fields.time))
            .filter(|t| t.is_finite() && *t != 0.0)
            .collect();
        let normalized = ResponseNormalizer::normalize(&times);

        let mut skipped = 0;
        for (index, record) in records.iter().enumerate() {
            let left = record.text_field(fields.left);
            let i = left.and_then(|label| items.index_of(label));
            let j = record
                .text_field(fields.right)
                .and_then(|label| items.index_of(label));

            let (i, j) = match (i, j) {
                (Some(i), Some(j)) if i != j => (i, j),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let intensity = normalized.get(index).copied().unwrap_or(Intensity::NEUTRAL);
            let left_chosen = left.is_some() && record.text_field(fields.selected) == left;

            if left_chosen {
                matrix.record_preference(i, j, intensity);
            } else {
                matrix.record_preference(j, i, intensity);
            }
        }

        debug!(
            kind = %kind,
            size = matrix.size(),
            records = records.len(),
            skipped,
            "Built comparison matrix"
        );

        MatrixBuild {
            matrix,
            status: BuildStatus::Complete,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ResponseTime;
    use crate::domain::survey::{ItemDomain, Pair};
    use proptest::prelude::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn seconds(s: f64) -> ResponseTime {
        ResponseTime::try_from_seconds(s).unwrap()
    }

    fn options(labels: &[&str]) -> ItemSet {
        ItemSet::new(ItemDomain::Option, labels.iter().copied()).unwrap()
    }

    fn option_decision(left: &str, right: &str, selected: &str, time: f64) -> OptionDecision {
        OptionDecision::new("가격", &Pair::new(left, right).unwrap(), selected, seconds(time))
            .unwrap()
    }

    #[test]
    fn decision_kind_parses_log_names() {
        assert_eq!(
            "keywordResponseTimes".parse::<DecisionKind>(),
            Ok(DecisionKind::Keyword)
        );
        assert_eq!(
            "imageResponseTimes".parse::<DecisionKind>(),
            Ok(DecisionKind::Option)
        );
        assert_eq!(
            "responseTimes".parse::<DecisionKind>(),
            Err(UnknownDecisionKind("responseTimes".to_string()))
        );
    }

    #[test]
    fn single_keyword_decision_stays_neutral() {
        let keywords = ItemSet::new(ItemDomain::Keyword, ["가격", "품질"]).unwrap();
        let pair = Pair::new("가격", "품질").unwrap();
        let decisions = vec![KeywordDecision::new(&pair, "가격", seconds(0.5)).unwrap()];

        let build = ComparisonMatrixBuilder::build(&decisions, &keywords, "keywordResponseTimes");

        assert!(build.is_complete());
        assert_eq!(build.matrix.rows(), &[vec![1.0, 1.0], vec![1.0, 1.0]]);
    }

    #[test]
    fn repeated_pair_last_decision_wins() {
        let items = options(&["A", "B"]);
        let decisions = vec![
            option_decision("A", "B", "A", 1.0),
            option_decision("A", "B", "B", 3.0),
        ];

        let build = ComparisonMatrixBuilder::build_kind(&decisions, &items, DecisionKind::Option);

        assert_eq!(build.matrix.value(1, 0), Some(7.0));
        assert_eq!(build.matrix.value(0, 1), Some(1.0 / 7.0));
    }

    #[test]
    fn right_choice_is_recorded_for_right_item() {
        let items = options(&["A", "B", "C"]);
        let decisions = vec![
            option_decision("A", "C", "C", 2.0),
            option_decision("B", "C", "B", 1.0),
        ];

        let build = ComparisonMatrixBuilder::build_kind(&decisions, &items, DecisionKind::Option);

        // times {2.0, 1.0} normalize to {7, 1}
        assert_eq!(build.matrix.value(2, 0), Some(7.0));
        assert_eq!(build.matrix.value(1, 2), Some(1.0));
    }

    /// Collects formatted log output for the duration of a test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn unknown_kind_returns_neutral_matrix() {
        let items = options(&["A", "B"]);
        let decisions = vec![option_decision("A", "B", "A", 1.0)];

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let build = tracing::subscriber::with_default(subscriber, || {
            ComparisonMatrixBuilder::build(&decisions, &items, "surveyResponses")
        });

        let output = logs.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("surveyResponses"));

        assert!(!build.is_complete());
        assert_eq!(
            build.status,
            BuildStatus::Degraded(DegradedReason::UnknownKind("surveyResponses".to_string()))
        );
        assert!(build.matrix.is_neutral());
        assert_eq!(build.matrix.size(), 2);
    }

    #[test]
    fn unknown_items_and_self_pairs_are_skipped() {
        let items = options(&["A", "B"]);
        let records = vec![
            json!({"leftImage": "A", "rightImage": "Z", "selectedImage": "A", "responseTime": 1.0}),
            json!({"leftImage": "B", "rightImage": "B", "selectedImage": "B", "responseTime": 2.0}),
            json!({"leftImage": "A", "rightImage": "B", "selectedImage": "B", "responseTime": 3.0}),
        ];

        let build = ComparisonMatrixBuilder::build(&records, &items, "imageResponseTimes");

        assert_eq!(build.skipped, 2);
        assert_eq!(build.matrix.value(1, 0), Some(7.0));
        assert!(build.matrix.is_reciprocal(1e-12));
    }

    #[test]
    fn json_records_with_keyword_fields() {
        let keywords = ItemSet::new(ItemDomain::Keyword, ["price", "quality", "design"]).unwrap();
        let records = vec![
            json!({"keyword1": "price", "keyword2": "quality", "selectedKeyword": "price", "responseTime": 0.8}),
            json!({"keyword1": "quality", "keyword2": "design", "selectedKeyword": "design", "responseTime": 2.0}),
            json!({"keyword1": "price", "keyword2": "design", "selectedKeyword": "price", "responseTime": 1.4}),
        ];

        let build = ComparisonMatrixBuilder::build(&records, &keywords, "keywordResponseTimes");

        assert_eq!(build.matrix.value(0, 1), Some(1.0));
        assert_eq!(build.matrix.value(2, 1), Some(7.0));
        assert!((build.matrix.value(0, 2).unwrap() - 4.0).abs() < 1e-12);
        assert!((build.matrix.value(2, 0).unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn missing_times_fall_back_to_neutral_intensity() {
        let items = options(&["A", "B", "C"]);
        let records = vec![
            json!({"leftImage": "A", "rightImage": "B", "selectedImage": "A", "responseTime": 1.0}),
            json!({"leftImage": "A", "rightImage": "C", "selectedImage": "C"}),
        ];

        let build = ComparisonMatrixBuilder::build(&records, &items, "imageResponseTimes");

        // Only one usable time, so every decision gets intensity 1
        assert!(build.matrix.is_neutral());
        assert_eq!(build.skipped, 0);
    }

    proptest! {
        #[test]
        fn built_matrix_is_reciprocal(
            decisions in prop::collection::vec((0usize..4, 0usize..4, any::<bool>(), 0.0f64..10.0), 0..20)
        ) {
            let labels = ["A", "B", "C", "D"];
            let items = options(&labels);
            let records: Vec<Value> = decisions
                .iter()
                .map(|&(l, r, pick_left, t)| {
                    let selected = if pick_left { labels[l] } else { labels[r] };
                    json!({
                        "leftImage": labels[l],
                        "rightImage": labels[r],
                        "selectedImage": selected,
                        "responseTime": t
                    })
                })
                .collect();

            let build = ComparisonMatrixBuilder::build(&records, &items, "imageResponseTimes");
            prop_assert!(build.matrix.is_reciprocal(1e-9));
            for i in 0..4 {
                prop_assert_eq!(build.matrix.value(i, i), Some(1.0));
            }
        }
    }
}
