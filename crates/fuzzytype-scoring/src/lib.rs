//! Fuzzy scoring and classification for fuzzytype.
//!
//! This crate turns entity records and schemas into class assignments:
//! - Per-class fuzzy scores with the height constraint (`Scorer`)
//! - Winner selection by fuzzy argmax or defuzzified max (`select_winner`)
//! - Batch classification with optional rayon parallelism (`Classifier`)
//! - A defuzzified view of the class definition schema (`compatibility_matrix`)
//!
//! # Architecture
//!
//! Schemas and configuration are borrowed, never mutated; every entity is
//! scored independently of the others.

pub mod classify;
pub mod error;
pub mod matrix;
pub mod scorer;
pub mod select;

pub use classify::{Classification, ClassificationResult, Classifier};
pub use error::ClassifyError;
pub use matrix::{compatibility_matrix, MatrixCell};
pub use scorer::{ClassScore, EntityScores, Scorer};
pub use select::{select_winner, Winner};
