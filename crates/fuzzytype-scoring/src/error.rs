use fuzzytype_core::FuzzyError;
use thiserror::Error;

/// Failure to score or classify one entity.
///
/// Carries the entity and, when known, the class being scored so that the
/// offending record can be located.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "entity '{entity_id}'{}: {source}",
    .class_label.as_deref().map(|c| format!(", class '{}'", c)).unwrap_or_default()
)]
pub struct ClassifyError {
    pub entity_id: String,
    pub class_label: Option<String>,
    #[source]
    pub source: FuzzyError,
}

impl ClassifyError {
    pub fn new(entity_id: impl Into<String>, source: FuzzyError) -> Self {
        ClassifyError {
            entity_id: entity_id.into(),
            class_label: None,
            source,
        }
    }

    pub fn in_class(mut self, class_label: impl Into<String>) -> Self {
        self.class_label = Some(class_label.into());
        self
    }
}
