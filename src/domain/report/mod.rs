//! Report Module - Tabular layout of survey results for export.

mod sheet;
mod survey_report;

pub use sheet::{CellValue, Sheet};
pub use survey_report::{SurveyReport, RAW_SHEET, UNIFIED_SHEET};
