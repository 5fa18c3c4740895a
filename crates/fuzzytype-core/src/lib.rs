//! fuzzytype Core - Fuzzy-number algebra and schemas for fuzzy classification
//!
//! This crate provides the fundamental abstractions for fuzzytype:
//! - Triangular fuzzy numbers with weighted sums, defuzzification,
//!   a fuzzy "greater than" relation and a fuzzy argmax
//! - Score representation (fuzzy or crisp)
//! - Typed schemas for compatibility levels, weights, class definitions and
//!   entity records

pub mod error;
pub mod schema;
pub mod score;
pub mod tfn;

pub use error::{FuzzyError, KeyKind, Result};
pub use schema::{
    ClassDefinition, ClassDefinitionSchema, CompatibilitySchema, Entity, Height, HeightRange,
    SchemaSet, WeightSchema,
};
pub use score::{Score, ScoreMode};
pub use tfn::{defuzzify, fuzzy_argmax, fuzzy_greater, weighted_sum, DefuzzMode, Tfn};
