//! fuzzytype - Fuzzy typological classification in Rust
//!
//! Score entities against class definitions with triangular fuzzy numbers
//! and assign each entity its most compatible class.
//!
//! # Example
//!
//! ```rust
//! use fuzzytype::prelude::*;
//!
//! let a = Tfn::new(0.0, 1.0, 2.0);
//! let b = Tfn::new(1.0, 2.0, 3.0);
//! let degree = fuzzy_greater(&a, &b).unwrap();
//! assert!((degree - 2.0 / 11.0).abs() < 1e-12);
//! assert_eq!(fuzzy_argmax(&[a, b], 0.5).unwrap(), Some(1));
//! ```

// Fuzzy-number algebra
pub use fuzzytype_core::{
    defuzzify, fuzzy_argmax, fuzzy_greater, weighted_sum, DefuzzMode, FuzzyError, KeyKind, Score,
    ScoreMode, Tfn,
};

// Schemas
pub use fuzzytype_core::{
    ClassDefinition, ClassDefinitionSchema, CompatibilitySchema, Entity, Height, HeightRange,
    SchemaSet, WeightSchema,
};

// Configuration and documents
pub use fuzzytype_config::{
    export_document, import_document, load_schema_set, ClassifierConfig, ConfigError,
    SchemaFormat,
};

// Scoring engine
pub use fuzzytype_scoring::{
    compatibility_matrix, Classification, ClassificationResult, Classifier, ClassifyError,
    MatrixCell, Scorer,
};

#[cfg(feature = "console")]
pub mod console;

mod run;
pub use run::{classify_files, Error};

pub mod prelude {
    pub use super::{defuzzify, fuzzy_argmax, fuzzy_greater, DefuzzMode, Score, ScoreMode, Tfn};
    pub use super::{Entity, Height, SchemaSet};
    pub use super::{Classification, ClassificationResult, Classifier, ClassifierConfig};
}
