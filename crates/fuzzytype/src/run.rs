//! File-based entry point that hides the loading and wiring.

use std::path::Path;

use fuzzytype_config::{import_document, load_schema_set, ClassifierConfig, ConfigError};
use fuzzytype_core::Entity;
use fuzzytype_scoring::{Classification, Classifier, ClassifyError};
use thiserror::Error;
use tracing::info;

/// Failure of a file-based classification run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Loads the schemas and entity records and classifies every entity.
///
/// Configuration is read from `config` when given, otherwise from
/// `classifier.toml` in the working directory, falling back to defaults
/// when that file is absent.
pub fn classify_files(
    weights: impl AsRef<Path>,
    classes: impl AsRef<Path>,
    compatibility: impl AsRef<Path>,
    entities: impl AsRef<Path>,
    config: Option<&Path>,
) -> Result<Classification, Error> {
    let config = match config {
        Some(path) => ClassifierConfig::load(path)?,
        None => ClassifierConfig::load("classifier.toml").unwrap_or_default(),
    };

    let schemas = load_schema_set(weights, classes, compatibility)?;
    let path = entities.as_ref();
    let entities: Vec<Entity> = import_document(path)?;
    info!(path = %path.display(), records = entities.len(), "loaded entity records");

    Ok(Classifier::new(&schemas, &config).classify(&entities)?)
}

#[cfg(test)]
mod tests {
    use fuzzytype_config::{export_document, SchemaFormat};
    use fuzzytype_test::buildings::{
        class_schema, compatibility_schema, entities, weight_schema,
    };

    use super::*;

    #[test]
    fn test_classify_files() {
        let dir = tempfile::tempdir().unwrap();
        let w = export_document(&weight_schema(), dir.path().join("w"), SchemaFormat::Yaml).unwrap();
        let c = export_document(&class_schema(), dir.path().join("c"), SchemaFormat::Yaml).unwrap();
        let k = export_document(
            &compatibility_schema(),
            dir.path().join("k"),
            SchemaFormat::Json,
        )
        .unwrap();
        let e = export_document(&entities(), dir.path().join("e"), SchemaFormat::Json).unwrap();
        let config = dir.path().join("classifier.toml");
        std::fs::write(&config, "score_mode = { crisp = \"median\" }\n").unwrap();

        let classification = classify_files(&w, &c, &k, &e, Some(&config)).unwrap();
        let labels: Vec<_> = classification.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["MUR", "RC", "W", "OTH"]);
    }

    #[test]
    fn test_classify_files_missing_schema() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = classify_files(&missing, &missing, &missing, &missing, None).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Io(_))));
    }
}
