//! Entity records to be classified.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scalar::{scalar_map, scalar_string};
use crate::error::{FuzzyError, KeyKind, Result};

/// Marker for a missing height in persisted records.
pub const NO_DATA: &str = "NO_DATA";

/// Height of an entity, or the absence of a measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Height {
    Known(f64),
    #[default]
    NoData,
}

impl Height {
    pub fn value(&self) -> Option<f64> {
        match self {
            Height::Known(h) => Some(*h),
            Height::NoData => None,
        }
    }
}

impl From<f64> for Height {
    fn from(h: f64) -> Self {
        Height::Known(h)
    }
}

impl From<Option<f64>> for Height {
    fn from(h: Option<f64>) -> Self {
        h.map_or(Height::NoData, Height::Known)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Height::Known(h) => write!(f, "{}", h),
            Height::NoData => f.write_str(NO_DATA),
        }
    }
}

impl Serialize for Height {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Height::Known(h) => serializer.serialize_f64(*h),
            Height::NoData => serializer.serialize_str(NO_DATA),
        }
    }
}

impl<'de> Deserialize<'de> for Height {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawHeight {
            Value(f64),
            Marker(String),
            Null(()),
        }

        match RawHeight::deserialize(deserializer)? {
            RawHeight::Value(h) => Ok(Height::Known(h)),
            RawHeight::Marker(m) if m == NO_DATA => Ok(Height::NoData),
            RawHeight::Marker(m) => Err(serde::de::Error::custom(format!(
                "invalid height '{}', expected a number or '{}'",
                m, NO_DATA
            ))),
            RawHeight::Null(()) => Ok(Height::NoData),
        }
    }
}

/// A record to classify: identifier, height and attribute values.
///
/// Persisted flat, e.g. `{"object_id": "b1", "height_1": 3, "material": "MUR"}`.
/// `height_1` is required; `"NO_DATA"` or null mark a missing measurement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Entity {
    #[serde(rename = "object_id", deserialize_with = "scalar_string")]
    pub id: String,

    #[serde(rename = "height_1")]
    pub height: Height,

    #[serde(flatten, deserialize_with = "scalar_map")]
    pub attributes: IndexMap<String, String>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height: impl Into<Height>) -> Self {
        self.height = height.into();
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(attribute.into(), value.into());
        self
    }

    pub fn attribute(&self, attribute: &str) -> Result<&str> {
        self.attributes
            .get(attribute)
            .map(String::as_str)
            .ok_or_else(|| FuzzyError::missing(KeyKind::Attribute, attribute))
    }
}
