//! Argmax over a list of TFNs.

use super::compare::fuzzy_greater;
use super::Tfn;
use crate::error::Result;

/// Membership threshold above which "a > b" is accepted.
pub const DEFAULT_MEMBERSHIP_THRESHOLD: f64 = 0.5;

/// Index of the best candidate in a single left-to-right sweep.
///
/// The current best is displaced by a challenger whenever
/// `fuzzy_greater(best, challenger)` falls below `membership_threshold`.
/// The relation is not transitive, so the result depends on the order of
/// `candidates`; the linear sweep is the selection policy, not an
/// approximation of a total order.
///
/// Returns `Ok(None)` for an empty slice and `Ok(Some(0))` for a single
/// candidate without comparing anything.
///
/// # Examples
///
/// ```
/// use fuzzytype_core::{fuzzy_argmax, Tfn};
///
/// let scores = [
///     Tfn::new(-1.0, 0.0, 1.0),
///     Tfn::new(1.0, 2.0, 3.0),
///     Tfn::new(0.0, 1.0, 2.0),
/// ];
/// assert_eq!(fuzzy_argmax(&scores, 0.5).unwrap(), Some(1));
/// ```
pub fn fuzzy_argmax(candidates: &[Tfn], membership_threshold: f64) -> Result<Option<usize>> {
    let Some(first) = candidates.first() else {
        return Ok(None);
    };

    let mut best_index = 0;
    let mut best = first;
    for (challenger_index, challenger) in candidates.iter().enumerate().skip(1) {
        if fuzzy_greater(best, challenger)? < membership_threshold {
            best_index = challenger_index;
            best = challenger;
        }
    }
    Ok(Some(best_index))
}
