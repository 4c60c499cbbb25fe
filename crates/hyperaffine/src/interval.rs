//! Rigorous interval enclosures of real numbers.
//!
//! Every operation rounds outward by one ulp on each bound, so the result
//! always contains the exact real result of the operation applied to any
//! values inside the operands.

use std::cmp::Ordering;
use std::fmt;
use std::ops::*;

use num_traits::{Bounded, One, ToPrimitive, Zero};

use crate::Scalar;

/// Closed interval `[lo, hi]` enclosing an unknown real number.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        fmt::Display::fmt(&self.lo, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.hi, f)?;
        write!(f, "]")
    }
}

impl From<f64> for Interval {
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}

impl Interval {
    /// Degenerate interval containing only zero.
    pub const ZERO: Self = Self { lo: 0.0, hi: 0.0 };
    /// Degenerate interval containing only one.
    pub const ONE: Self = Self { lo: 1.0, hi: 1.0 };
    /// Interval containing every real number.
    pub const ENTIRE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Constructs an interval from its bounds. If the bounds are out of order,
    /// they are swapped.
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo <= hi {
            Self { lo, hi }
        } else {
            debug_assert!(!lo.is_nan() && !hi.is_nan(), "interval bound is NaN");
            Self { lo: hi, hi: lo }
        }
    }
    /// Constructs a degenerate interval containing exactly one number.
    pub const fn point(x: f64) -> Self {
        Self { lo: x, hi: x }
    }
    /// Constructs an interval from exact bounds and widens it outward by one
    /// ulp in each direction.
    fn outward(lo: f64, hi: f64) -> Self {
        if lo.is_nan() || hi.is_nan() {
            return Self::ENTIRE;
        }
        Self {
            lo: lo.next_down(),
            hi: hi.next_up(),
        }
    }

    /// Returns the lower bound.
    pub fn lo(self) -> f64 {
        self.lo
    }
    /// Returns the upper bound.
    pub fn hi(self) -> f64 {
        self.hi
    }
    /// Returns the midpoint.
    pub fn mid(self) -> f64 {
        if self.lo.is_infinite() && self.hi.is_infinite() {
            0.0
        } else {
            self.lo / 2.0 + self.hi / 2.0
        }
    }
    /// Returns the width `hi - lo`, rounded up.
    pub fn width(self) -> f64 {
        (self.hi - self.lo).next_up()
    }

    /// Returns whether the interval contains `x`.
    pub fn contains(self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
    /// Returns whether the interval contains zero.
    pub fn contains_zero(self) -> bool {
        self.contains(0.0)
    }
    /// Returns whether the interval cannot be distinguished from zero, which
    /// is the case exactly when it contains zero.
    pub fn is_singular(self) -> bool {
        self.contains_zero()
    }

    /// Returns the smallest interval containing both intervals.
    #[must_use]
    pub fn hull(self, other: Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Returns the square of the interval, which (unlike `self * self`) is
    /// never negative.
    #[must_use]
    pub fn sqr(self) -> Self {
        let a = self.abs();
        Self::outward(a.lo * a.lo, a.hi * a.hi).clamp_nonnegative()
    }

    fn clamp_nonnegative(self) -> Self {
        Self {
            lo: self.lo.max(0.0),
            hi: self.hi.max(0.0),
        }
    }

    /// Returns the interval enclosing products of any two members.
    fn mul_bounds(self, rhs: Self) -> Self {
        let products = [
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        ];
        let lo = products.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = products.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::outward(lo, hi)
    }
}

impl Neg for Interval {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::outward(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}
impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::outward(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}
impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_bounds(rhs)
    }
}
impl Div for Interval {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.contains_zero() {
            return Self::ENTIRE;
        }
        let quotients = [
            self.lo / rhs.lo,
            self.lo / rhs.hi,
            self.hi / rhs.lo,
            self.hi / rhs.hi,
        ];
        let lo = quotients.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = quotients.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::outward(lo, hi)
    }
}

macro_rules! impl_assign_op {
    ($($trait:ident::$fn:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for Interval {
                fn $fn(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}
impl_assign_op!(
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /,
);

/// Certain ordering: one interval is less than another only if every member of
/// the first is less than every member of the second.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.hi < other.lo {
            Some(Ordering::Less)
        } else if self.lo > other.hi {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Zero for Interval {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
impl One for Interval {
    fn one() -> Self {
        Self::ONE
    }
}
impl Bounded for Interval {
    fn min_value() -> Self {
        Self::point(f64::MIN)
    }
    fn max_value() -> Self {
        Self::point(f64::MAX)
    }
}

/// Conversions use the midpoint.
impl ToPrimitive for Interval {
    fn to_i64(&self) -> Option<i64> {
        self.mid().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.mid().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.mid())
    }
}

impl Scalar for Interval {
    fn abs(self) -> Self {
        if self.lo >= 0.0 {
            self
        } else if self.hi <= 0.0 {
            -self
        } else {
            Self {
                lo: 0.0,
                hi: self.hi.max(-self.lo),
            }
        }
    }
    fn sqrt(self) -> Self {
        let lo = self.lo.max(0.0).sqrt();
        let hi = self.hi.sqrt();
        Self::outward(lo, hi).clamp_nonnegative()
    }
    fn is_finite(self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }
    fn from_float(x: f64) -> Self {
        Self::point(x)
    }
}
