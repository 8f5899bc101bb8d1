//! Survey configuration, read from the environment.
//!
//! Values come from `RESPONSE_TIME__<SECTION>__<KEY>` variables (a `.env`
//! file is honoured in development) via the `config` and `dotenvy` crates.
//! Every key has a default, so an empty environment is a valid setup.
//!
//! ```no_run
//! use response_time::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! println!("keywords: {}", config.survey.keywords_path.display());
//! ```

mod error;
mod logging;
mod storage;
mod survey;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RESPONSE_TIME";

/// All configuration sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Keyword file and option list
    #[serde(default)]
    pub survey: SurveyConfig,

    /// Survey state directory and report file
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and line format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the prefixed environment variables.
    ///
    /// `RESPONSE_TIME__SURVEY__OPTIONS=a.png,b.png` sets `survey.options`;
    /// `RESPONSE_TIME__STORAGE__DATA_DIR=/tmp/survey` sets `storage.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty path, fewer than two options,
    /// a repeated option, or a blank log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.survey.validate()?;
        self.storage.validate()?;
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Environment variables are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const KEYS: [&str; 6] = [
        "RESPONSE_TIME__SURVEY__KEYWORDS_PATH",
        "RESPONSE_TIME__SURVEY__OPTIONS",
        "RESPONSE_TIME__STORAGE__DATA_DIR",
        "RESPONSE_TIME__STORAGE__REPORT_PATH",
        "RESPONSE_TIME__LOGGING__LEVEL",
        "RESPONSE_TIME__LOGGING__FORMAT",
    ];

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _lock = ENV_LOCK.lock().unwrap();
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let loaded = AppConfig::load();
        for (key, _) in vars {
            env::remove_var(key);
        }
        loaded
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.survey.keywords_path, PathBuf::from("data/keywords.txt"));
        assert_eq!(config.storage.data_dir, PathBuf::from("data/responses"));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_variables_override_defaults() {
        let config = load_with(&[
            ("RESPONSE_TIME__SURVEY__OPTIONS", "a.png,b.png,c.png"),
            ("RESPONSE_TIME__STORAGE__REPORT_PATH", "out/report.json"),
            ("RESPONSE_TIME__LOGGING__FORMAT", "json"),
        ])
        .unwrap();

        assert_eq!(config.survey.options_list(), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(config.storage.report_path, PathBuf::from("out/report.json"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn single_option_fails_validation() {
        let config = load_with(&[("RESPONSE_TIME__SURVEY__OPTIONS", "a.png")]).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::TooFewOptions(1)));
    }

    #[test]
    fn unknown_log_format_fails_to_load() {
        let result = load_with(&[("RESPONSE_TIME__LOGGING__FORMAT", "xml")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
