//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where survey state and reports are written
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per survey key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File the finished report is exported to
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        if self.report_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.report_path"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            report_path: default_report_path(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/responses")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("result_data.json")
}
