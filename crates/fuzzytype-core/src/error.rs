//! Error types for fuzzytype

use std::fmt;

use thiserror::Error;

/// Kind of lookup that failed with [`FuzzyError::MissingKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// A class label absent from the class definition schema.
    Class,
    /// An attribute absent from a class definition or from an entity.
    Attribute,
    /// A compatibility label absent from the compatibility schema.
    CompatibilityLabel,
    /// A class without a declared height range.
    HeightRange,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Class => "class",
            KeyKind::Attribute => "attribute",
            KeyKind::CompatibilityLabel => "compatibility label",
            KeyKind::HeightRange => "height range",
        };
        f.write_str(name)
    }
}

/// Main error type for fuzzy scoring operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// An argument outside the accepted set, e.g. an unknown defuzzification method
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The comparator was given two crisp numbers
    #[error("Degenerate input: crisp numbers are not supported by the fuzzy comparator")]
    DegenerateInput,

    /// A computation left its mathematical domain (negative radicand, NaN)
    #[error("Domain error: {0}")]
    DomainError(String),

    /// A lookup without a declared default missed
    #[error("Missing {kind}: '{key}'")]
    MissingKey { kind: KeyKind, key: String },
}

impl FuzzyError {
    /// Shorthand for a [`FuzzyError::MissingKey`].
    pub fn missing(kind: KeyKind, key: impl Into<String>) -> Self {
        FuzzyError::MissingKey {
            kind,
            key: key.into(),
        }
    }
}

/// Result type alias for fuzzy scoring operations
pub type Result<T> = std::result::Result<T, FuzzyError>;
