//! Survey Report - the two-sheet result workbook of a finished survey.
//!
//! "Unified Data" holds the comparison matrices, weight vectors, and option
//! scores; "Raw Data" holds the timed decision logs.

use serde::{Deserialize, Serialize};

use super::{CellValue, Sheet};
use crate::domain::analysis::{ComparisonMatrix, SurveyData, SurveyResults, WeightVector};
use crate::domain::foundation::Timestamp;
use crate::domain::survey::Decision;

/// Name of the sheet holding matrices and scores.
pub const UNIFIED_SHEET: &str = "Unified Data";

/// Name of the sheet holding the raw decision logs.
pub const RAW_SHEET: &str = "Raw Data";

/// The exported result workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub generated_at: Timestamp,
    pub sheets: Vec<Sheet>,
}

impl SurveyReport {
    /// Lays out the results of a survey.
    pub fn build(data: &SurveyData, results: &SurveyResults) -> Self {
        Self {
            generated_at: Timestamp::now(),
            sheets: vec![unified_sheet(data, results), raw_sheet(data)],
        }
    }

    /// Returns the sheet called `name`.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

fn unified_sheet(data: &SurveyData, results: &SurveyResults) -> Sheet {
    let mut sheet = Sheet::new(UNIFIED_SHEET);
    let keywords = data.keywords.labels();
    let options = data.options.labels();

    sheet.push_title("Keyword Comparison Matrix");
    push_matrix(
        &mut sheet,
        keywords,
        &results.keyword_matrix,
        &results.keyword_weights,
    );
    sheet.push_blank();

    sheet.push_title("Image Comparison Matrix");
    for keyword in keywords {
        sheet.push_title(format!("Comparison Matrix for {}", keyword));
        if let (Some(matrix), Some(weights)) = (
            results.option_matrices.get(keyword),
            results.option_weights.get(keyword),
        ) {
            push_matrix(&mut sheet, options, matrix, weights);
        }
        sheet.push_blank();
    }

    sheet.push_title("Image Scores");
    let mut header = vec![CellValue::text("Image")];
    for keyword in keywords {
        header.push(CellValue::text(format!("Value for {}", keyword)));
        header.push(CellValue::text(format!("Weight for {}", keyword)));
    }
    header.push(CellValue::text("Score"));
    sheet.push_row(header);

    for score in results.scores.scores() {
        let mut row = vec![CellValue::text(score.option.as_str())];
        for contribution in &score.contributions {
            row.push(contribution.value.into());
            row.push(contribution.weight.into());
        }
        row.push(score.score.into());
        sheet.push_row(row);
    }

    sheet
}

fn push_matrix(sheet: &mut Sheet, labels: &[String], matrix: &ComparisonMatrix, weights: &WeightVector) {
    let mut header = vec![CellValue::text("")];
    header.extend(labels.iter().map(|l| CellValue::text(l.as_str())));
    header.push(CellValue::text("Eigenvector"));
    sheet.push_row(header);

    for (i, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![labels
            .get(i)
            .map(|l| CellValue::text(l.as_str()))
            .unwrap_or(CellValue::Empty)];
        cells.extend(row.iter().map(|&v| CellValue::Number(v)));
        cells.push(weights.get(i).map(CellValue::Number).unwrap_or(CellValue::Empty));
        sheet.push_row(cells);
    }
}

/// Time, left, right, chosen, then the keyword for option decisions.
fn decision_row<D: Decision>(decision: &D) -> Vec<CellValue> {
    let mut row = vec![
        CellValue::text(decision.response_time().display_fixed()),
        CellValue::text_or_na(decision.left()),
        CellValue::text_or_na(decision.right()),
        CellValue::text_or_na(decision.chosen()),
    ];
    if let Some(category) = decision.category() {
        row.push(CellValue::text_or_na(category));
    }
    row
}

fn raw_sheet(data: &SurveyData) -> Sheet {
    let mut sheet = Sheet::new(RAW_SHEET);

    sheet.push_title("Response Times: Keyword");
    sheet.push_row(
        ["Response Time(s)", "Keyword1", "Keyword2", "Selected Keyword"]
            .into_iter()
            .map(CellValue::from)
            .collect(),
    );
    for entry in data.keyword_decisions.entries() {
        sheet.push_row(decision_row(entry));
    }

    sheet.push_blank();

    sheet.push_title("Response Times: Images by Keyword");
    sheet.push_row(
        [
            "Response Time(s)",
            "Left Image",
            "Right Image",
            "Selected Image",
            "Keyword",
        ]
        .into_iter()
        .map(CellValue::from)
        .collect(),
    );
    for entry in data.option_decisions.entries() {
        sheet.push_row(decision_row(entry));
    }

    sheet
}
