//! Batch classification of entities.
//!
//! Logging levels:
//! - **INFO**: batch start/end with entity, class and valid counts
//! - **DEBUG**: chosen class of each entity


use fuzzytype_config::ClassifierConfig;
use fuzzytype_core::{Entity, FuzzyError, SchemaSet};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ClassifyError;
use crate::scorer::{ClassScore, Scorer};
use crate::select::select_winner;

/// Outcome of classifying one entity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassificationResult {
    pub entity_id: String,
    /// Assigned label: the winning class, or the unclassified label when
    /// filtering rejected an invalid winner.
    pub label: String,
    /// Winning class before filtering.
    pub computed_label: String,
    pub valid: bool,
    /// Scores against every class, in class declaration order.
    pub scores: Vec<ClassScore>,
}

/// Results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Classification {
    pub results: Vec<ClassificationResult>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassificationResult> {
        self.results.iter()
    }

    pub fn get(&self, entity_id: &str) -> Option<&ClassificationResult> {
        self.results.iter().find(|r| r.entity_id == entity_id)
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }

    /// Number of entities assigned to each label, in order of first
    /// appearance.
    pub fn label_counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for result in &self.results {
            *counts.entry(result.label.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl IntoIterator for Classification {
    type Item = ClassificationResult;
    type IntoIter = std::vec::IntoIter<ClassificationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Assigns each entity the class it is most compatible with.
///
/// # Examples
///
/// ```
/// use fuzzytype_config::ClassifierConfig;
/// use fuzzytype_scoring::Classifier;
/// use fuzzytype_test::buildings::{entities, schema_set};
///
/// let schemas = schema_set();
/// let config = ClassifierConfig::default();
/// let classification = Classifier::new(&schemas, &config)
///     .classify(&entities())
///     .unwrap();
///
/// let labels: Vec<_> = classification.iter().map(|r| r.label.as_str()).collect();
/// assert_eq!(labels, ["MUR", "RC", "W", "OTH"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    scorer: Scorer<'a>,
    config: &'a ClassifierConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(schemas: &'a SchemaSet, config: &'a ClassifierConfig) -> Self {
        Classifier {
            scorer: Scorer::new(schemas),
            config,
        }
    }

    pub fn scorer(&self) -> &Scorer<'a> {
        &self.scorer
    }

    pub fn config(&self) -> &'a ClassifierConfig {
        self.config
    }

    /// Scores `entity` against every class and picks the winner.
    pub fn classify_entity(&self, entity: &Entity) -> Result<ClassificationResult, ClassifyError> {
        let entity_scores = self
            .scorer
            .score_all_classes(entity, self.config.score_mode)?;

        let values: Vec<_> = entity_scores.scores.iter().map(|s| s.score).collect();
        let winner = select_winner(&values, self.config)
            .map_err(|e| ClassifyError::new(&entity.id, e))?
            .ok_or_else(|| {
                ClassifyError::new(
                    &entity.id,
                    FuzzyError::InvalidArgument("class definition schema is empty".to_string()),
                )
            })?;

        let computed_label = entity_scores.scores[winner.index].class_label.clone();
        let label = if self.config.filter_invalid && !winner.valid {
            self.config.unclassified_label.clone()
        } else {
            computed_label.clone()
        };
        debug!(
            entity = %entity.id,
            class = %computed_label,
            score = winner.crisp_score,
            valid = winner.valid,
            %label,
            "classified entity"
        );

        Ok(ClassificationResult {
            entity_id: entity_scores.entity_id,
            label,
            computed_label,
            valid: winner.valid,
            scores: entity_scores.scores,
        })
    }

    /// Classifies every entity, failing if any entity cannot be scored.
    ///
    /// Sequentially, the error is that of the first failing entity in input
    /// order. With `config.parallel` the entities are scored on the rayon
    /// pool and the error may come from any failing entity; results of a
    /// successful batch keep input order.
    pub fn classify(&self, entities: &[Entity]) -> Result<Classification, ClassifyError> {
        self.log_start(entities);
        let results = if self.config.parallel {
            entities
                .par_iter()
                .map(|entity| self.classify_entity(entity))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            entities
                .iter()
                .map(|entity| self.classify_entity(entity))
                .collect::<Result<Vec<_>, _>>()?
        };

        let classification = Classification { results };
        info!(
            entities = classification.len(),
            valid = classification.valid_count(),
            "classification finished"
        );
        Ok(classification)
    }

    /// Classifies every entity independently; a failing entity does not
    /// affect the others.
    pub fn classify_each(
        &self,
        entities: &[Entity],
    ) -> Vec<Result<ClassificationResult, ClassifyError>> {
        self.log_start(entities);
        let results: Vec<_> = if self.config.parallel {
            entities
                .par_iter()
                .map(|entity| self.classify_entity(entity))
                .collect()
        } else {
            entities
                .iter()
                .map(|entity| self.classify_entity(entity))
                .collect()
        };

        info!(
            entities = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "classification finished"
        );
        results
    }

    fn log_start(&self, entities: &[Entity]) {
        info!(
            entities = entities.len(),
            classes = self.scorer.schemas().classes.len(),
            score_mode = ?self.config.score_mode,
            parallel = self.config.parallel,
            "classification started"
        );
    }
}
