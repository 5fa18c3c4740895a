//! Scalar coercion for document keys and values.
//!
//! Identifiers, attribute values and compatibility labels arrive as strings,
//! numbers or booleans depending on the source document (an unquoted `2` or
//! `0` in YAML). All of them are stored as strings.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

/// A scalar read as its string form; usable as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ScalarString(pub(crate) String);

impl<'de> Deserialize<'de> for ScalarString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Scalar::deserialize(deserializer).map(|s| ScalarString(s.into()))
    }
}

pub(crate) fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ScalarString::deserialize(deserializer).map(|s| s.0)
}

/// Map with scalar keys coerced to strings.
pub(crate) fn scalar_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let raw = IndexMap::<ScalarString, V>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k.0, v)).collect())
}

/// Map with scalar keys and values coerced to strings.
pub(crate) fn scalar_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error> {
    let raw = IndexMap::<ScalarString, ScalarString>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (k.0, v.0)).collect())
}

/// Nested `attribute -> (value -> label)` map, coerced at both levels.
pub(crate) fn scalar_ratings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, IndexMap<String, String>>, D::Error> {
    let raw =
        IndexMap::<ScalarString, IndexMap<ScalarString, ScalarString>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(attribute, ratings)| {
            let ratings = ratings.into_iter().map(|(k, v)| (k.0, v.0)).collect();
            (attribute.0, ratings)
        })
        .collect())
}
