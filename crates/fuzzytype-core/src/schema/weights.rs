use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Multiplicative weight of each scored attribute.
///
/// Only attributes listed here contribute to a score.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WeightSchema {
    pub weights: IndexMap<String, f64>,
}

impl WeightSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight(mut self, attribute: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(attribute.into(), weight);
        self
    }

    /// Attributes with their weights, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightSchema {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        WeightSchema {
            weights: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
