//! Scalar field abstraction.

use std::fmt;
use std::ops::*;

use num_traits::{Bounded, One, ToPrimitive, Zero};

/// Field over which vectors and affine spaces are defined.
///
/// Implemented for `f32`, `f64`, and [`crate::Interval`]. Comparisons via
/// `PartialOrd` must be conservative: `a < b` only when `a` is certainly less
/// than `b`.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Bounded
    + ToPrimitive
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Returns the absolute value.
    fn abs(self) -> Self;
    /// Returns the square root.
    fn sqrt(self) -> Self;
    /// Returns whether the value is finite (not infinite and not NaN).
    fn is_finite(self) -> bool;
    /// Converts a float to the scalar type, rounding if necessary.
    fn from_float(x: f64) -> Self;
}

macro_rules! impl_scalar_for_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }
                fn from_float(x: f64) -> Self {
                    x as $t
                }
            }
        )*
    };
}
impl_scalar_for_float!(f32, f64);

/// Returns the lesser of two values, or `b` if they are incomparable.
pub(crate) fn partial_min<S: Scalar>(a: S, b: S) -> S {
    if a < b { a } else { b }
}

/// Returns the greater of two values, or `b` if they are incomparable.
pub(crate) fn partial_max<S: Scalar>(a: S, b: S) -> S {
    if a > b { a } else { b }
}
