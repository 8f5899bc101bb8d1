//! Survey configuration

use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::error::ValidationError;

/// What the survey asks about
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyConfig {
    /// Comma-delimited keyword list
    #[serde(default = "default_keywords_path")]
    pub keywords_path: PathBuf,

    /// Options compared under each keyword (comma-separated)
    #[serde(default = "default_options")]
    pub options: String,
}

impl SurveyConfig {
    /// Get the options as a vector
    pub fn options_list(&self) -> Vec<String> {
        self.options
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.keywords_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("survey.keywords_path"));
        }

        let options = self.options_list();
        if options.len() < 2 {
            return Err(ValidationError::TooFewOptions(options.len()));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.as_str()) {
                return Err(ValidationError::DuplicateOption(option.clone()));
            }
        }
        Ok(())
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            keywords_path: default_keywords_path(),
            options: default_options(),
        }
    }
}

fn default_keywords_path() -> PathBuf {
    PathBuf::from("data/keywords.txt")
}

fn default_options() -> String {
    "image1.jpg,image2.jpg,image3.jpg,image4.jpg".to_string()
}
