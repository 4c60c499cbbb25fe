//! Fixed-dimension vector math.

use std::fmt;
use std::iter::Sum;
use std::ops::*;

use itertools::Itertools;

use crate::Scalar;

/// Constructs a fixed-dimension vector, using the same syntax as an array
/// literal.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector::new([$($tok)*])
    };
}

/// `N`-dimensional vector with components of type `S`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<S, const N: usize>(pub [S; N]);

/// `N`-dimensional point. Points and vectors share a representation; the
/// point is the vector from the origin.
pub type Point<S, const N: usize> = Vector<S, N>;

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S, const N: usize> From<[S; N]> for Vector<S, N> {
    fn from(value: [S; N]) -> Self {
        Self(value)
    }
}

impl<S, const N: usize> Vector<S, N> {
    /// Constructs a vector from its components.
    pub const fn new(components: [S; N]) -> Self {
        Self(components)
    }

    /// Returns the number of components.
    pub const fn ndim(&self) -> usize {
        N
    }

    /// Returns a component of the vector, or `None` if `idx` is out of bounds.
    pub fn get(&self, idx: usize) -> Option<&S> {
        self.0.get(idx)
    }
    /// Returns a mutable reference to a component of the vector, or `None` if
    /// `idx` is out of bounds.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut S> {
        self.0.get_mut(idx)
    }

    /// Returns an iterator over the components of the vector.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.0.iter()
    }
    /// Returns the components as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.0
    }
}

impl<S: Scalar, const N: usize> Vector<S, N> {
    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self([S::zero(); N])
    }
    /// Returns a unit vector along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= N`.
    pub fn unit(axis: usize) -> Self {
        let mut ret = Self::zero();
        ret[axis] = S::one();
        ret
    }

    /// Returns whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, rhs: &Self) -> S {
        std::iter::zip(self.iter(), rhs.iter())
            .map(|(&l, &r)| l * r)
            .fold(S::zero(), |acc, x| acc + x)
    }

    /// Returns the squared magnitude of the vector.
    pub fn mag2(&self) -> S {
        self.dot(self)
    }
    /// Returns the magnitude (Euclidean norm) of the vector.
    pub fn mag(&self) -> S {
        self.mag2().sqrt()
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is zero
    /// (or too small to normalize).
    #[must_use]
    pub fn normalize(&self) -> Option<Self> {
        let mult = S::one() / self.mag();
        mult.is_finite().then(|| *self * mult)
    }
    /// Normalizes the vector in-place by dividing it by its magnitude.
    ///
    /// The caller is responsible for ensuring that the vector is nonzero.
    pub fn normalize_in_place(&mut self) {
        let mag = self.mag();
        *self /= mag;
    }

    /// Returns the component of the vector that is perpendicular to the unit
    /// vector `unit`.
    #[must_use]
    pub fn rejected_from_unit(&self, unit: &Self) -> Self {
        *self - *unit * self.dot(unit)
    }

    /// Returns the cross product of two vectors in 3D. Components besides XYZ
    /// are ignored and missing components are treated as zero.
    pub fn cross_product_3d(&self, rhs: &Self) -> Self {
        let c = |v: &Self, i: usize| v.get(i).copied().unwrap_or_else(S::zero);
        let xyz = [
            c(self, 1) * c(rhs, 2) - c(self, 2) * c(rhs, 1),
            c(self, 2) * c(rhs, 0) - c(self, 0) * c(rhs, 2),
            c(self, 0) * c(rhs, 1) - c(self, 1) * c(rhs, 0),
        ];
        let mut ret = Self::zero();
        for (out, x) in std::iter::zip(&mut ret.0, xyz) {
            *out = x;
        }
        ret
    }
}

impl<S: fmt::Display, const N: usize> fmt::Display for Vector<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().format(", "))
    }
}

macro_rules! impl_componentwise_op {
    (impl $trait_name:ident, $assign_trait:ident { fn $fn_name:ident, $assign_fn:ident }) => {
        impl<S: Scalar, const N: usize> $assign_trait for Vector<S, N> {
            fn $assign_fn(&mut self, rhs: Self) {
                for (l, r) in std::iter::zip(&mut self.0, rhs.0) {
                    l.$assign_fn(r);
                }
            }
        }
        impl<S: Scalar, const N: usize> $assign_trait<&Vector<S, N>> for Vector<S, N> {
            fn $assign_fn(&mut self, rhs: &Self) {
                self.$assign_fn(*rhs);
            }
        }
        impl<S: Scalar, const N: usize> $trait_name for Vector<S, N> {
            type Output = Self;

            fn $fn_name(mut self, rhs: Self) -> Self::Output {
                self.$assign_fn(rhs);
                self
            }
        }
        impl<S: Scalar, const N: usize> $trait_name<&Vector<S, N>> for &Vector<S, N> {
            type Output = Vector<S, N>;

            fn $fn_name(self, rhs: &Vector<S, N>) -> Self::Output {
                (*self).$fn_name(*rhs)
            }
        }
    };
}
impl_componentwise_op!(impl Add, AddAssign { fn add, add_assign });
impl_componentwise_op!(impl Sub, SubAssign { fn sub, sub_assign });

macro_rules! impl_scalar_op {
    (impl $trait_name:ident, $assign_trait:ident { fn $fn_name:ident, $assign_fn:ident }) => {
        impl<S: Scalar, const N: usize> $assign_trait<S> for Vector<S, N> {
            fn $assign_fn(&mut self, rhs: S) {
                for x in &mut self.0 {
                    x.$assign_fn(rhs);
                }
            }
        }
        impl<S: Scalar, const N: usize> $trait_name<S> for Vector<S, N> {
            type Output = Self;

            fn $fn_name(mut self, rhs: S) -> Self::Output {
                self.$assign_fn(rhs);
                self
            }
        }
        impl<S: Scalar, const N: usize> $trait_name<S> for &Vector<S, N> {
            type Output = Vector<S, N>;

            fn $fn_name(self, rhs: S) -> Self::Output {
                (*self).$fn_name(rhs)
            }
        }
    };
}
impl_scalar_op!(impl Mul, MulAssign { fn mul, mul_assign });
impl_scalar_op!(impl Div, DivAssign { fn div, div_assign });

impl<S: Scalar, const N: usize> Neg for Vector<S, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}
impl<S: Scalar, const N: usize> Neg for &Vector<S, N> {
    type Output = Vector<S, N>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<S, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        self.0.get(index).unwrap_or_else(|| {
            panic!("vector index out of bounds: the dimensionality is {N} but the index is {index}")
        })
    }
}
impl<S, const N: usize> IndexMut<usize> for Vector<S, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.0.get_mut(index).unwrap_or_else(|| {
            panic!("vector index out of bounds: the dimensionality is {N} but the index is {index}")
        })
    }
}

impl<S: Scalar, const N: usize> Sum for Vector<S, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

impl<const N: usize> approx::AbsDiffEq for Vector<f64, N> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(self.iter(), other.iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}
