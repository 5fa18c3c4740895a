//! Shared test fixtures for fuzzytype crates.
//!
//! This crate provides reference schemas and entity records for testing.
//! It depends only on `fuzzytype-core` so every other crate can use it.
//!
//! - [`buildings`] - a three-class building typology (masonry, concrete, wood)
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! fuzzytype-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use fuzzytype_test::buildings::{schema_set, entities};
//! ```

pub mod buildings;

pub use buildings::{entities, schema_set};
