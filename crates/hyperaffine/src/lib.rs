//! Affine subspaces of a fixed-dimension vector space, over either ordinary
//! floats or rigorous [`Interval`] enclosures.
//!
//! An [`AffineSpace`] is stored as an anchor point plus an orthonormal basis,
//! built by pivoted Gram-Schmidt reduction. Every zero or equality test goes
//! through a [`Comparator`], so the same algorithms serve both fixed-precision
//! floating-point geometry and interval-arithmetic proofs.
//!
//! ```
//! use hyperaffine::prelude::*;
//!
//! let prec = Precision::default();
//! let a = AffineSpace::spanning([vector![0.0, 1.0], vector![1.0, 0.1]], &prec)?;
//! let b = AffineSpace::spanning([vector![0.0, 0.0], vector![1.0, 1.0]], &prec)?;
//! let p = intersection(&a, &b, &prec)?.expect("lines are not parallel");
//! assert_eq!(p.ndim(), 0);
//! assert!(a.contains(p.anchor(), &prec));
//! # Ok::<(), hyperaffine::AffineError>(())
//! ```

pub use {approx, num_traits as num, smallvec};

/// Default epsilon for [`Precision`].
pub const DEFAULT_EPSILON: f64 = 1e-15;

/// Asserts that both arguments are approximately equal, using an absolute
/// epsilon (default `1e-12`).
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = 1e-12)
    };
    ($a:expr, $b:expr, epsilon = $eps:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $eps)
    };
}

#[macro_use]
mod vector;

pub mod affine_space;
pub mod approx_cmp;
pub mod error;
pub mod interval;
pub mod intersection;
pub mod orthonormalize;
pub mod scalar;

/// Structs, traits, functions, and constants.
pub mod prelude {
    pub use crate::affine_space::AffineSpace;
    pub use crate::approx_cmp::*;
    pub use crate::error::{AffineError, AffineResult};
    pub use crate::interval::Interval;
    pub use crate::intersection::intersection;
    pub use crate::orthonormalize::orthonormalize;
    pub use crate::traits::*;
    pub use crate::vector::*;
    pub use crate::{DEFAULT_EPSILON, vector};
}
pub use prelude::*;

/// Traits only.
pub mod traits {
    pub use approx::AbsDiffEq;

    pub use crate::approx_cmp::Comparator;
    pub use crate::scalar::Scalar;
}
