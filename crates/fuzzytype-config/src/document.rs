//! Schema documents in JSON or YAML.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fuzzytype_core::{ClassDefinitionSchema, CompatibilitySchema, SchemaSet, WeightSchema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::ConfigError;

/// Serialization format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Format implied by the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;
        extension.parse()
    }

    /// Extension written by [`export_document`].
    pub fn extension(&self) -> &'static str {
        match self {
            SchemaFormat::Json => "json",
            SchemaFormat::Yaml => "yml",
        }
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFormat::Json => f.write_str("json"),
            SchemaFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for SchemaFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "json" => Ok(SchemaFormat::Json),
            "yml" | "yaml" => Ok(SchemaFormat::Yaml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Renders `value` as a document. YAML output carries an explicit `---` start.
pub fn to_document_string<T: Serialize>(
    value: &T,
    format: SchemaFormat,
) -> Result<String, ConfigError> {
    match format {
        SchemaFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        SchemaFormat::Yaml => {
            let body = serde_yaml::to_string(value)?;
            if body.starts_with("---") {
                Ok(body)
            } else {
                Ok(format!("---\n{}", body))
            }
        }
    }
}

pub fn from_document_str<T: DeserializeOwned>(
    s: &str,
    format: SchemaFormat,
) -> Result<T, ConfigError> {
    match format {
        SchemaFormat::Json => Ok(serde_json::from_str(s)?),
        SchemaFormat::Yaml => Ok(serde_yaml::from_str(s)?),
    }
}

/// Writes `value` next to `path` with the extension of `format` substituted.
///
/// Returns the path actually written.
pub fn export_document<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    format: SchemaFormat,
) -> Result<PathBuf, ConfigError> {
    let target = path.as_ref().with_extension(format.extension());
    let contents = to_document_string(value, format)?;
    std::fs::write(&target, contents)?;
    debug!(path = %target.display(), %format, "exported schema document");
    Ok(target)
}

/// Reads a document, choosing the format from the file extension.
pub fn import_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let value = from_document_str(&contents, format)?;
    debug!(path = %path.display(), %format, "imported schema document");
    Ok(value)
}

/// Loads and validates the three schemas of a classification run.
pub fn load_schema_set(
    weights: impl AsRef<Path>,
    classes: impl AsRef<Path>,
    compatibility: impl AsRef<Path>,
) -> Result<SchemaSet, ConfigError> {
    let weights: WeightSchema = import_document(weights)?;
    let classes: ClassDefinitionSchema = import_document(classes)?;
    let compatibility: CompatibilitySchema = import_document(compatibility)?;

    let schemas = SchemaSet::new(weights, classes, compatibility);
    schemas.validate()?;
    debug!(
        attributes = schemas.weights.len(),
        classes = schemas.classes.len(),
        levels = schemas.compatibility.levels.len(),
        "loaded schema set"
    );
    Ok(schemas)
}
