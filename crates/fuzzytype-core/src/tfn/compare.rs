//! Fuzzy "greater than" relation between two TFNs.
//!
//! Compares the alpha-cuts of both numbers at [`ALPHA_LEVELS`] and averages
//! the local degrees, weighted by the product of the two cut widths
//! (Dorohonceanu and Marin, 2002).

use super::Tfn;
use crate::error::{FuzzyError, Result};

/// Membership levels at which both numbers are cut.
pub const ALPHA_LEVELS: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];

/// Accumulated weight at or below which the inputs count as crisp.
pub const DEGENERATE_EPSILON: f64 = 1e-8;

/// Degree of membership in [0, 1] of the relation "a > b".
///
/// # Errors
///
/// [`FuzzyError::DegenerateInput`] when the cut widths multiply to zero at
/// every level, i.e. at least one of the numbers is crisp.
///
/// # Examples
///
/// ```
/// use fuzzytype_core::{fuzzy_greater, Tfn};
///
/// let low = Tfn::new(0.0, 1.0, 2.0);
/// let high = Tfn::new(5.0, 6.0, 7.0);
///
/// assert_eq!(fuzzy_greater(&high, &low).unwrap(), 1.0);
/// assert_eq!(fuzzy_greater(&low, &high).unwrap(), 0.0);
/// assert_eq!(fuzzy_greater(&low, &low).unwrap(), 0.5);
/// ```
pub fn fuzzy_greater(a: &Tfn, b: &Tfn) -> Result<f64> {
    let mut weighted_degree = 0.0;
    let mut total_weight = 0.0;

    for &level in ALPHA_LEVELS.iter() {
        let (a_low, a_high) = a.alpha_cut(level);
        let (b_low, b_high) = b.alpha_cut(level);
        let a_width = a_high - a_low;
        let b_width = b_high - b_low;

        let weight = b_width * a_width;
        total_weight += weight;
        // Cuts only shrink with the level: a zero total after the widest
        // cut stays zero.
        if total_weight.abs() <= DEGENERATE_EPSILON {
            return Err(FuzzyError::DegenerateInput);
        }

        let degree = ((a_high - b_low) / (b_width + a_width)).clamp(0.0, 1.0);
        weighted_degree += degree * weight;
    }

    let degree = weighted_degree / total_weight;
    if degree.is_nan() {
        return Err(FuzzyError::DomainError(format!(
            "comparison of {} and {} is undefined",
            a, b
        )));
    }
    Ok(degree)
}
