//! Defuzzification - reduction of a TFN to a crisp value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Tfn;
use crate::error::{FuzzyError, Result};

/// Statistical descriptor used to reduce a TFN to a crisp value.
///
/// The TFN is read as a piecewise linear probability density.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzMode {
    /// The most plausible value.
    #[default]
    Mode,
    /// Arithmetic mean of the three components.
    Mean,
    /// Median of the triangular density.
    Median,
}

impl DefuzzMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefuzzMode::Mode => "mode",
            DefuzzMode::Mean => "mean",
            DefuzzMode::Median => "median",
        }
    }
}

impl fmt::Display for DefuzzMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefuzzMode {
    type Err = FuzzyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mode" => Ok(DefuzzMode::Mode),
            "mean" => Ok(DefuzzMode::Mean),
            "median" => Ok(DefuzzMode::Median),
            _ => Err(FuzzyError::InvalidArgument(format!(
                "unrecognized method: {}",
                s
            ))),
        }
    }
}

/// Turns a triangular fuzzy number into a crisp value.
///
/// # Errors
///
/// [`FuzzyError::DomainError`] when `mode` is [`DefuzzMode::Median`] and the
/// number violates `left <= mode <= right`.
///
/// # Examples
///
/// ```
/// use fuzzytype_core::{defuzzify, DefuzzMode, Tfn};
///
/// let a = Tfn::new(0.0, 1.0, 2.0);
/// assert_eq!(defuzzify(&a, DefuzzMode::Mode).unwrap(), 1.0);
/// assert_eq!(defuzzify(&a, DefuzzMode::Mean).unwrap(), 1.0);
/// assert_eq!(defuzzify(&a, DefuzzMode::Median).unwrap(), 1.0);
/// ```
pub fn defuzzify(a: &Tfn, mode: DefuzzMode) -> Result<f64> {
    match mode {
        DefuzzMode::Mode => Ok(a.mode),
        DefuzzMode::Mean => Ok((a.left + a.mode + a.right) / 3.0),
        DefuzzMode::Median => median(a),
    }
}

fn median(a: &Tfn) -> Result<f64> {
    if !a.is_ordered() {
        return Err(FuzzyError::DomainError(format!(
            "median of unordered fuzzy number {}",
            a
        )));
    }

    let width = a.right - a.left;
    let (base, sign, radicand) = if a.mode >= (a.left + a.right) / 2.0 {
        (a.left, 1.0, width * (a.mode - a.left) / 2.0)
    } else {
        (a.right, -1.0, width * (a.right - a.mode) / 2.0)
    };

    if radicand < 0.0 || !radicand.is_finite() {
        return Err(FuzzyError::DomainError(format!(
            "negative radicand {} computing median of {}",
            radicand, a
        )));
    }
    Ok(base + sign * radicand.sqrt())
}
