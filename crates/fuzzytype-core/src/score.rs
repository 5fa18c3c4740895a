//! Score representation shared by scoring, ranking and validity checks.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::tfn::{defuzzify, DefuzzMode, Tfn};

/// How scores are represented: fuzzy, or defuzzified with a given mode.
///
/// Serialized as `"fuzzy"` or `{ "crisp": "<mode>" }` in every document
/// format, YAML included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoreMode {
    /// Keep scores as TFNs and rank them with the fuzzy argmax.
    #[default]
    Fuzzy,
    /// Defuzzify scores and rank them with the ordinary maximum.
    Crisp(DefuzzMode),
}

const FUZZY: &str = "fuzzy";
const CRISP: &str = "crisp";

impl Serialize for ScoreMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ScoreMode::Fuzzy => serializer.serialize_str(FUZZY),
            ScoreMode::Crisp(mode) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(CRISP, mode)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ScoreMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // serde_yaml reads externally tagged enums only from `!tag` syntax,
        // so the single-key map is matched structurally.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawScoreMode {
            Name(String),
            Crisp { crisp: DefuzzMode },
        }

        match RawScoreMode::deserialize(deserializer)? {
            RawScoreMode::Name(name) if name.eq_ignore_ascii_case(FUZZY) => Ok(ScoreMode::Fuzzy),
            RawScoreMode::Name(name) => Err(serde::de::Error::custom(format!(
                "invalid score mode '{}', expected '{}' or {{ {} = <mode> }}",
                name, FUZZY, CRISP
            ))),
            RawScoreMode::Crisp { crisp } => Ok(ScoreMode::Crisp(crisp)),
        }
    }
}

/// A score of one entity against one class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    Fuzzy(Tfn),
    Crisp(f64),
}

impl Score {
    /// Builds a score from an accumulated TFN in the requested representation.
    pub fn from_tfn(tfn: Tfn, mode: ScoreMode) -> Result<Self> {
        match mode {
            ScoreMode::Fuzzy => Ok(Score::Fuzzy(tfn)),
            ScoreMode::Crisp(defuzz) => defuzzify(&tfn, defuzz).map(Score::Crisp),
        }
    }

    /// Crisp value of this score; fuzzy scores are defuzzified with `mode`.
    pub fn to_crisp(&self, mode: DefuzzMode) -> Result<f64> {
        match self {
            Score::Fuzzy(tfn) => defuzzify(tfn, mode),
            Score::Crisp(value) => Ok(*value),
        }
    }

    pub fn as_fuzzy(&self) -> Option<&Tfn> {
        match self {
            Score::Fuzzy(tfn) => Some(tfn),
            Score::Crisp(_) => None,
        }
    }

    pub fn is_fuzzy(&self) -> bool {
        matches!(self, Score::Fuzzy(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Fuzzy(tfn) => write!(f, "{}", tfn),
            Score::Crisp(value) => write!(f, "{}", value),
        }
    }
}
