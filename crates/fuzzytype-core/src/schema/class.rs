//! Class definitions: per-attribute ratings and the height constraint.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::scalar::scalar_ratings;
use crate::error::{FuzzyError, KeyKind, Result};

/// Inclusive height bounds a class admits.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HeightRange {
    #[serde(rename = "H_MIN")]
    pub min: f64,
    #[serde(rename = "H_MAX")]
    pub max: f64,
}

impl HeightRange {
    pub const fn new(min: f64, max: f64) -> Self {
        HeightRange { min, max }
    }

    pub fn contains(&self, height: f64) -> bool {
        height >= self.min && height <= self.max
    }
}

/// Definition of one class.
///
/// `attributes` maps attribute name to the compatibility label of each
/// explicitly rated value. The height range is stored under `height_1`
/// next to the attributes in the persisted document. Rated values and labels
/// may be written as bare numbers; they are read as strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClassDefinition {
    #[serde(rename = "height_1", default, skip_serializing_if = "Option::is_none")]
    pub height: Option<HeightRange>,

    #[serde(flatten, deserialize_with = "scalar_ratings")]
    pub attributes: IndexMap<String, IndexMap<String, String>>,
}

impl ClassDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, min: f64, max: f64) -> Self {
        self.height = Some(HeightRange::new(min, max));
        self
    }

    /// Rates `value` of `attribute` with a compatibility label.
    pub fn with_rating(
        mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .insert(value.into(), label.into());
        self
    }

    /// Compatibility label of `value` for `attribute`.
    ///
    /// Values the class does not rate resolve to `default`. An attribute the
    /// class does not define at all is a [`KeyKind::Attribute`] miss.
    pub fn label_for<'a>(
        &'a self,
        attribute: &str,
        value: &str,
        default: &'a str,
    ) -> Result<&'a str> {
        let ratings = self
            .attributes
            .get(attribute)
            .ok_or_else(|| FuzzyError::missing(KeyKind::Attribute, attribute))?;
        Ok(ratings.get(value).map(String::as_str).unwrap_or(default))
    }

    /// Explicitly rated values of `attribute`, in declaration order.
    pub fn ratings(&self, attribute: &str) -> Option<&IndexMap<String, String>> {
        self.attributes.get(attribute)
    }
}

/// Ordered mapping from class label to its definition.
///
/// Declaration order is the order in which classes are scored and swept by
/// the fuzzy argmax.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ClassDefinitionSchema {
    pub classes: IndexMap<String, ClassDefinition>,
}

impl ClassDefinitionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, label: impl Into<String>, definition: ClassDefinition) -> Self {
        self.classes.insert(label.into(), definition);
        self
    }

    pub fn class(&self, label: &str) -> Result<&ClassDefinition> {
        self.classes
            .get(label)
            .ok_or_else(|| FuzzyError::missing(KeyKind::Class, label))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassDefinition)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
