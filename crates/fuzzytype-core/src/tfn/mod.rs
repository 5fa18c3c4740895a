//! Triangular fuzzy numbers and the operations built on them.
//!
//! - [`Tfn`] and the weighted sum used to accumulate attribute scores
//! - [`defuzzify`] - reduction to a crisp value
//! - [`fuzzy_greater`] - degree of membership of "a > b"
//! - [`fuzzy_argmax`] - linear-scan selection of the best candidate

mod argmax;
mod compare;
mod defuzz;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use argmax::{fuzzy_argmax, DEFAULT_MEMBERSHIP_THRESHOLD};
pub use compare::{fuzzy_greater, ALPHA_LEVELS, DEGENERATE_EPSILON};
pub use defuzz::{defuzzify, DefuzzMode};

/// A triangular fuzzy number.
///
/// `mode` is the most plausible value and `[left, right]` the support.
/// Well-formed numbers satisfy `left <= mode <= right`; the algebra does not
/// enforce it, the median defuzzifier rejects violations.
///
/// Serialized as the sequence `[left, mode, right]`.
///
/// # Examples
///
/// ```
/// use fuzzytype_core::Tfn;
///
/// let a = Tfn::new(0.0, 1.0, 2.0);
/// let b = Tfn::crisp(1.0);
///
/// assert_eq!(a.weighted_sum(&b, 1.0, 2.0), Tfn::new(2.0, 3.0, 4.0));
/// assert!(b.is_crisp());
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Tfn {
    pub left: f64,
    pub mode: f64,
    pub right: f64,
}

impl Tfn {
    /// The neutral element of the weighted sum, `(0, 0, 0)`.
    pub const ZERO: Tfn = Tfn {
        left: 0.0,
        mode: 0.0,
        right: 0.0,
    };

    #[inline]
    pub const fn new(left: f64, mode: f64, right: f64) -> Self {
        Tfn { left, mode, right }
    }

    /// A crisp number: zero spread around `value`.
    #[inline]
    pub const fn crisp(value: f64) -> Self {
        Tfn::new(value, value, value)
    }

    /// Returns `coeff_self * self + coeff_other * other`, component-wise.
    ///
    /// Ordering of the components is neither checked nor restored.
    #[inline]
    pub fn weighted_sum(&self, other: &Tfn, coeff_self: f64, coeff_other: f64) -> Tfn {
        weighted_sum(self, other, coeff_self, coeff_other)
    }

    /// Returns true when the support has zero width.
    pub fn is_crisp(&self) -> bool {
        self.left == self.mode && self.mode == self.right
    }

    /// Returns true when `left <= mode <= right`.
    pub fn is_ordered(&self) -> bool {
        self.left <= self.mode && self.mode <= self.right
    }

    /// The interval of values with membership of at least `level`.
    ///
    /// Level 0 is the full support, level 1 collapses to the mode.
    pub fn alpha_cut(&self, level: f64) -> (f64, f64) {
        (
            self.left + level * (self.mode - self.left),
            self.right - level * (self.right - self.mode),
        )
    }

    pub fn components(&self) -> [f64; 3] {
        [self.left, self.mode, self.right]
    }
}

/// Weighted sum of two triangular fuzzy numbers: `ca * a + cb * b`.
pub fn weighted_sum(a: &Tfn, b: &Tfn, ca: f64, cb: f64) -> Tfn {
    Tfn {
        left: ca * a.left + cb * b.left,
        mode: ca * a.mode + cb * b.mode,
        right: ca * a.right + cb * b.right,
    }
}

impl Add for Tfn {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        weighted_sum(&self, &other, 1.0, 1.0)
    }
}

impl Mul<f64> for Tfn {
    type Output = Self;

    fn mul(self, coeff: f64) -> Self {
        Tfn::new(self.left * coeff, self.mode * coeff, self.right * coeff)
    }
}

impl From<[f64; 3]> for Tfn {
    fn from([left, mode, right]: [f64; 3]) -> Self {
        Tfn::new(left, mode, right)
    }
}

impl From<Tfn> for [f64; 3] {
    fn from(tfn: Tfn) -> Self {
        tfn.components()
    }
}

impl fmt::Debug for Tfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tfn({}, {}, {})", self.left, self.mode, self.right)
    }
}

impl fmt::Display for Tfn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.left, self.mode, self.right)
    }
}

impl Serialize for Tfn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.components().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tfn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[f64; 3]>::deserialize(deserializer).map(Tfn::from)
    }
}
