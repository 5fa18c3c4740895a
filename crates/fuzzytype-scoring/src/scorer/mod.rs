//! Per-class scoring of a single entity.
//!
//! Logging levels:
//! - **DEBUG**: height constraint overrides
//! - **TRACE**: per-attribute contributions and per-class scores


use fuzzytype_core::error::KeyKind;
use fuzzytype_core::{Entity, FuzzyError, Result, SchemaSet, Score, ScoreMode, Tfn};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ClassifyError;

/// Score of an entity against one class.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassScore {
    pub class_label: String,
    pub score: Score,
}

/// Scores of one entity against every class, in class declaration order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntityScores {
    pub entity_id: String,
    pub scores: Vec<ClassScore>,
}

impl EntityScores {
    pub fn get(&self, class_label: &str) -> Option<&Score> {
        self.scores
            .iter()
            .find(|s| s.class_label == class_label)
            .map(|s| &s.score)
    }
}

/// Scores entities against the classes of a borrowed [`SchemaSet`].
///
/// Holds no state besides the schemas, so one scorer can be shared across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    schemas: &'a SchemaSet,
}

impl<'a> Scorer<'a> {
    pub fn new(schemas: &'a SchemaSet) -> Self {
        Scorer { schemas }
    }

    pub fn schemas(&self) -> &'a SchemaSet {
        self.schemas
    }

    /// Weighted fuzzy score of `entity` against `class_label`.
    ///
    /// Starts from `(0, 0, 0)` and adds, for each weighted attribute, the
    /// compatibility level of the entity's value scaled by the attribute
    /// weight. Values the class does not rate count as the neutral level.
    ///
    /// If the entity has a height outside the class's range, the sum is
    /// discarded and the most incompatible level is returned instead.
    pub fn fuzzy_score(&self, entity: &Entity, class_label: &str) -> Result<Tfn> {
        let class = self.schemas.classes.class(class_label)?;
        let compatibility = &self.schemas.compatibility;
        let neutral_label = compatibility.neutral_label.as_str();

        let mut total = Tfn::ZERO;
        for (attribute, weight) in self.schemas.weights.iter() {
            let value = entity.attribute(attribute)?;
            let label = class.label_for(attribute, value, neutral_label)?;
            let level = compatibility.level(label)?;
            total = total.weighted_sum(level, 1.0, weight);
            trace!(
                entity = %entity.id,
                class = class_label,
                attribute,
                value,
                label,
                "attribute contribution"
            );
        }

        if let Some(height) = entity.height.value() {
            let range = class
                .height
                .ok_or_else(|| FuzzyError::missing(KeyKind::HeightRange, class_label))?;
            if !range.contains(height) {
                debug!(
                    entity = %entity.id,
                    class = class_label,
                    height,
                    min = range.min,
                    max = range.max,
                    "height constraint overrides score"
                );
                total = *compatibility.incompatible()?;
            }
        }

        Ok(total)
    }

    /// Score of `entity` against `class_label` in the representation `mode`.
    pub fn score_one(&self, entity: &Entity, class_label: &str, mode: ScoreMode) -> Result<Score> {
        let score = Score::from_tfn(self.fuzzy_score(entity, class_label)?, mode)?;
        trace!(entity = %entity.id, class = class_label, %score, "class score");
        Ok(score)
    }

    /// Scores `entity` against every class, carrying its identifier through.
    pub fn score_all_classes(
        &self,
        entity: &Entity,
        mode: ScoreMode,
    ) -> std::result::Result<EntityScores, ClassifyError> {
        let scores = self
            .schemas
            .classes
            .labels()
            .map(|label| {
                self.score_one(entity, label, mode)
                    .map(|score| ClassScore {
                        class_label: label.to_string(),
                        score,
                    })
                    .map_err(|e| ClassifyError::new(&entity.id, e).in_class(label))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(EntityScores {
            entity_id: entity.id.clone(),
            scores,
        })
    }
}
