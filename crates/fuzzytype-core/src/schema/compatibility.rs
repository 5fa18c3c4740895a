//! Compatibility levels: symbolic labels mapped to TFNs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scalar::{scalar_keys, scalar_string};
use crate::error::{FuzzyError, KeyKind, Result};
use crate::tfn::Tfn;

/// Default label of the neutral compatibility level.
pub const NEUTRAL_LABEL: &str = "0";

/// Default label of the most incompatible level.
pub const INCOMPATIBLE_LABEL: &str = "---";

fn default_neutral_label() -> String {
    NEUTRAL_LABEL.to_string()
}

fn default_incompatible_label() -> String {
    INCOMPATIBLE_LABEL.to_string()
}

/// Mapping from compatibility label to TFN.
///
/// Two labels are distinguished: the neutral level, used for attribute
/// values a class does not rate, and the most incompatible level, which
/// replaces the score of a class whose height constraint fails.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompatibilitySchema {
    #[serde(default = "default_neutral_label", deserialize_with = "scalar_string")]
    pub neutral_label: String,

    #[serde(default = "default_incompatible_label", deserialize_with = "scalar_string")]
    pub incompatible_label: String,

    #[serde(deserialize_with = "scalar_keys")]
    pub levels: IndexMap<String, Tfn>,
}

impl CompatibilitySchema {
    /// Creates a schema with the default sentinel labels.
    pub fn new<K: Into<String>>(levels: impl IntoIterator<Item = (K, Tfn)>) -> Self {
        CompatibilitySchema {
            neutral_label: default_neutral_label(),
            incompatible_label: default_incompatible_label(),
            levels: levels.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Overrides the sentinel labels.
    pub fn with_labels(
        mut self,
        neutral_label: impl Into<String>,
        incompatible_label: impl Into<String>,
    ) -> Self {
        self.neutral_label = neutral_label.into();
        self.incompatible_label = incompatible_label.into();
        self
    }

    pub fn level(&self, label: &str) -> Result<&Tfn> {
        self.levels
            .get(label)
            .ok_or_else(|| FuzzyError::missing(KeyKind::CompatibilityLabel, label))
    }

    pub fn neutral(&self) -> Result<&Tfn> {
        self.level(&self.neutral_label)
    }

    pub fn incompatible(&self) -> Result<&Tfn> {
        self.level(&self.incompatible_label)
    }
}
