//! Sheet - a named grid of cells.

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Creates a text cell, using "N/A" for an empty string.
    pub fn text_or_na(value: &str) -> Self {
        if value.is_empty() {
            CellValue::text("N/A")
        } else {
            CellValue::text(value)
        }
    }

    /// Returns the text, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number, if this is a number cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// A named sheet made of rows of cells. Rows may differ in length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Appends a one-cell title row.
    pub fn push_title(&mut self, title: impl Into<String>) {
        self.rows.push(vec![CellValue::text(title)]);
    }

    /// Appends an empty separator row.
    pub fn push_blank(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Returns the index of the first row whose first cell is `title`.
    pub fn find_row(&self, title: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.first().and_then(CellValue::as_text) == Some(title))
    }
}
