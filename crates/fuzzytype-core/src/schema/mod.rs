//! Typed schemas consumed by the scoring engine.
//!
//! All schemas are immutable reference data, loaded once per batch and
//! shared read-only by every scoring call.

mod class;
mod compatibility;
mod entity;
mod scalar;
mod weights;


use serde::{Deserialize, Serialize};

pub use class::{ClassDefinition, ClassDefinitionSchema, HeightRange};
pub use compatibility::{CompatibilitySchema, INCOMPATIBLE_LABEL, NEUTRAL_LABEL};
pub use entity::{Entity, Height, NO_DATA};
pub use weights::WeightSchema;

use crate::error::{FuzzyError, KeyKind, Result};

/// The three schemas a classification run needs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SchemaSet {
    pub weights: WeightSchema,
    pub classes: ClassDefinitionSchema,
    pub compatibility: CompatibilitySchema,
}

impl SchemaSet {
    pub fn new(
        weights: WeightSchema,
        classes: ClassDefinitionSchema,
        compatibility: CompatibilitySchema,
    ) -> Self {
        SchemaSet {
            weights,
            classes,
            compatibility,
        }
    }

    /// Checks that every lookup a scoring run can make will resolve.
    ///
    /// - both sentinel labels are defined compatibility levels
    /// - every class defines every weighted attribute
    /// - every label a class uses is a defined compatibility level
    pub fn validate(&self) -> Result<()> {
        self.compatibility.neutral()?;
        self.compatibility.incompatible()?;

        for (class_label, definition) in self.classes.iter() {
            for attribute in self.weights.attributes() {
                if definition.ratings(attribute).is_none() {
                    return Err(FuzzyError::missing(
                        KeyKind::Attribute,
                        format!("{}.{}", class_label, attribute),
                    ));
                }
            }
            for ratings in definition.attributes.values() {
                for label in ratings.values() {
                    self.compatibility.level(label)?;
                }
            }
        }
        Ok(())
    }
}
