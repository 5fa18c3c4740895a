//! Configuration system for fuzzytype.
//!
//! Load classifier configuration from TOML or YAML files to control score
//! representation, thresholds and filtering without code changes, and read
//! or write schema documents as JSON or YAML.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use fuzzytype_config::ClassifierConfig;
//! use fuzzytype_core::{DefuzzMode, ScoreMode};
//!
//! let config = ClassifierConfig::from_toml_str(r#"
//!     score_mode = { crisp = "median" }
//!     validity_threshold = 0.2
//!     unclassified_label = "UNK"
//! "#).unwrap();
//!
//! assert_eq!(config.score_mode, ScoreMode::Crisp(DefuzzMode::Median));
//! assert_eq!(config.membership_threshold, 0.5);
//! assert!(config.filter_invalid);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use fuzzytype_config::ClassifierConfig;
//!
//! let config = ClassifierConfig::load("classifier.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

mod document;


use std::path::Path;

use fuzzytype_core::tfn::DEFAULT_MEMBERSHIP_THRESHOLD;
use fuzzytype_core::{DefuzzMode, FuzzyError, ScoreMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use document::{
    export_document, from_document_str, import_document, load_schema_set, to_document_string,
    SchemaFormat,
};

/// Label given to entities whose best class is not valid.
pub const DEFAULT_UNCLASSIFIED_LABEL: &str = "OTH";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid schema: {0}")]
    Schema(#[from] FuzzyError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_membership_threshold() -> f64 {
    DEFAULT_MEMBERSHIP_THRESHOLD
}

fn default_filter_invalid() -> bool {
    true
}

fn default_unclassified_label() -> String {
    DEFAULT_UNCLASSIFIED_LABEL.to_string()
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassifierConfig {
    /// Fuzzy scores ranked by fuzzy argmax, or crisp scores ranked by max.
    #[serde(default)]
    pub score_mode: ScoreMode,

    /// Defuzzification used for the validity check of fuzzy winners.
    #[serde(default)]
    pub defuzz_mode: DefuzzMode,

    /// Degree of "best > challenger" below which the challenger wins.
    #[serde(default = "default_membership_threshold")]
    pub membership_threshold: f64,

    /// A winner is valid when its crisp score exceeds this value.
    #[serde(default)]
    pub validity_threshold: f64,

    /// Reassign entities with an invalid winner to `unclassified_label`.
    #[serde(default = "default_filter_invalid")]
    pub filter_invalid: bool,

    #[serde(default = "default_unclassified_label")]
    pub unclassified_label: String,

    /// Score entities on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            score_mode: ScoreMode::default(),
            defuzz_mode: DefuzzMode::default(),
            membership_threshold: default_membership_threshold(),
            validity_threshold: 0.0,
            filter_invalid: default_filter_invalid(),
            unclassified_label: default_unclassified_label(),
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_score_mode(mut self, score_mode: ScoreMode) -> Self {
        self.score_mode = score_mode;
        self
    }

    pub fn with_defuzz_mode(mut self, defuzz_mode: DefuzzMode) -> Self {
        self.defuzz_mode = defuzz_mode;
        self
    }

    pub fn with_membership_threshold(mut self, threshold: f64) -> Self {
        self.membership_threshold = threshold;
        self
    }

    pub fn with_validity_threshold(mut self, threshold: f64) -> Self {
        self.validity_threshold = threshold;
        self
    }

    pub fn with_filter_invalid(mut self, filter: bool) -> Self {
        self.filter_invalid = filter;
        self
    }

    pub fn with_unclassified_label(mut self, label: impl Into<String>) -> Self {
        self.unclassified_label = label.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Defuzzification applied before comparing a winner with the
    /// validity threshold.
    ///
    /// Crisp scores were already reduced with the mode of `score_mode`.
    pub fn validity_mode(&self) -> DefuzzMode {
        match self.score_mode {
            ScoreMode::Crisp(mode) => mode,
            ScoreMode::Fuzzy => self.defuzz_mode,
        }
    }

    /// Rejects thresholds that cannot be compared against.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.membership_threshold) {
            return Err(ConfigError::Invalid(format!(
                "membership_threshold must lie in [0, 1], got {}",
                self.membership_threshold
            )));
        }
        if !self.validity_threshold.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "validity_threshold must be finite, got {}",
                self.validity_threshold
            )));
        }
        if self.unclassified_label.is_empty() {
            return Err(ConfigError::Invalid(
                "unclassified_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
