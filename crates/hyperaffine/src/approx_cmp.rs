//! Pluggable approximate comparison.
//!
//! Geometric algorithms in this crate never test a scalar for exact equality.
//! Instead they ask a [`Comparator`] whether two values are indistinguishable,
//! which lets the caller choose between a fixed floating-point tolerance
//! ([`Precision`]), a rigorous interval test ([`IntervalApprox`]), or any
//! closure.

use num_traits::Bounded;

use crate::scalar::{partial_max, partial_min};
use crate::{AffineError, AffineResult, DEFAULT_EPSILON, Interval, Scalar};

/// Approximate equality predicate on scalars.
pub trait Comparator<S> {
    /// Returns whether `lhs` and `rhs` are indistinguishable within the
    /// comparator's tolerance.
    fn approx_eq(&self, lhs: &S, rhs: &S) -> bool;

    /// Returns whether `x` is indistinguishable from zero.
    fn approx_eq_zero(&self, x: &S) -> bool
    where
        S: Scalar,
    {
        self.approx_eq(x, &S::zero())
    }
}

impl<S, F: Fn(&S, &S) -> bool> Comparator<S> for F {
    fn approx_eq(&self, lhs: &S, rhs: &S) -> bool {
        self(lhs, rhs)
    }
}

/// Fixed-precision comparator with a hybrid absolute/relative tolerance.
///
/// Two values `x` and `y` are equal if `x == y` or if
/// `|x - y| < max(eps, eps * min(|x| + |y|, MAX))`, where `MAX` is the largest
/// finite scalar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Precision {
    eps: f64,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            eps: DEFAULT_EPSILON,
        }
    }
}

impl Precision {
    /// Constructs a comparator with precision `eps`.
    ///
    /// Returns an error if `eps` is not a positive number.
    pub fn new(eps: f64) -> AffineResult<Self> {
        if eps > 0.0 {
            Ok(Self { eps })
        } else {
            Err(AffineError::NonPositivePrecision(eps))
        }
    }

    /// Returns the precision.
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

impl<S: Scalar> Comparator<S> for Precision {
    fn approx_eq(&self, lhs: &S, rhs: &S) -> bool {
        if lhs == rhs {
            return true;
        }
        let eps = S::from_float(self.eps);
        let diff = (*lhs - *rhs).abs();
        let norm = partial_min(lhs.abs() + rhs.abs(), S::max_value());
        diff < partial_max(eps, eps * norm)
    }
}

/// Rigorous comparator for [`Interval`]s: two intervals are equal if their
/// difference is singular, meaning it cannot be proven nonzero.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct IntervalApprox;

impl Comparator<Interval> for IntervalApprox {
    fn approx_eq(&self, lhs: &Interval, rhs: &Interval) -> bool {
        lhs == rhs || (*lhs - *rhs).is_singular()
    }
}
