//! Decision records - one timed choice between the two items of a pair.
//!
//! The serialized field names match the response logs kept by the survey
//! front end (`keywordResponseTimes` and `responseTimes`), so persisted logs
//! deserialize directly into these types.

use serde::{Deserialize, Serialize};

use super::Pair;
use crate::domain::foundation::{ResponseTime, ValidationError};

/// One timed choice on a pair.
///
/// `category` is the keyword an option was judged under; keyword decisions
/// have none.
pub trait Decision {
    fn left(&self) -> &str;
    fn right(&self) -> &str;
    fn chosen(&self) -> &str;
    fn response_time(&self) -> ResponseTime;
    fn category(&self) -> Option<&str>;

    /// The item that was not chosen.
    fn rejected(&self) -> &str {
        if self.chosen() == self.left() {
            self.right()
        } else {
            self.left()
        }
    }
}

/// A choice between two keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDecision {
    #[serde(rename = "keyword1")]
    pub left: String,
    #[serde(rename = "keyword2")]
    pub right: String,
    #[serde(rename = "selectedKeyword")]
    pub selected: String,
    #[serde(rename = "responseTime")]
    pub response_time: ResponseTime,
}

impl KeywordDecision {
    /// Records a choice made on `pair`.
    ///
    /// # Errors
    /// Returns `ValidationError` if `selected` is not one of the pair's items.
    pub fn new(
        pair: &Pair,
        selected: impl Into<String>,
        response_time: ResponseTime,
    ) -> Result<Self, ValidationError> {
        let selected = ensure_in_pair(pair, selected.into())?;
        Ok(Self {
            left: pair.first().to_string(),
            right: pair.second().to_string(),
            selected,
            response_time,
        })
    }

    /// Returns true if both records describe the same pair and the same choice.
    pub fn is_same_choice(&self, other: &KeywordDecision) -> bool {
        self.left == other.left && self.right == other.right && self.selected == other.selected
    }
}

/// A choice between two options, made under a keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDecision {
    #[serde(rename = "responseTime")]
    pub response_time: ResponseTime,
    #[serde(rename = "leftImage")]
    pub left: String,
    #[serde(rename = "rightImage")]
    pub right: String,
    #[serde(rename = "selectedImage")]
    pub selected: String,
    /// The keyword (category) the participant was judging against.
    pub keyword: String,
}

impl OptionDecision {
    /// Records a choice made on `pair` while judging `keyword`.
    ///
    /// # Errors
    /// Returns `ValidationError` if `selected` is not one of the pair's items
    /// or the keyword is blank.
    pub fn new(
        keyword: impl Into<String>,
        pair: &Pair,
        selected: impl Into<String>,
        response_time: ResponseTime,
    ) -> Result<Self, ValidationError> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(ValidationError::empty_field("keyword"));
        }
        let selected = ensure_in_pair(pair, selected.into())?;
        Ok(Self {
            response_time,
            left: pair.first().to_string(),
            right: pair.second().to_string(),
            selected,
            keyword,
        })
    }
}

impl Decision for KeywordDecision {
    fn left(&self) -> &str {
        &self.left
    }

    fn right(&self) -> &str {
        &self.right
    }

    fn chosen(&self) -> &str {
        &self.selected
    }

    fn response_time(&self) -> ResponseTime {
        self.response_time
    }

    fn category(&self) -> Option<&str> {
        None
    }
}

impl Decision for OptionDecision {
    fn left(&self) -> &str {
        &self.left
    }

    fn right(&self) -> &str {
        &self.right
    }

    fn chosen(&self) -> &str {
        &self.selected
    }

    fn response_time(&self) -> ResponseTime {
        self.response_time
    }

    fn category(&self) -> Option<&str> {
        Some(&self.keyword)
    }
}

fn ensure_in_pair(pair: &Pair, selected: String) -> Result<String, ValidationError> {
    if pair.contains(&selected) {
        Ok(selected)
    } else {
        Err(ValidationError::invalid_format(
            "selected",
            format!(
                "'{}' is not one of '{}' and '{}'",
                selected,
                pair.first(),
                pair.second()
            ),
        ))
    }
}
