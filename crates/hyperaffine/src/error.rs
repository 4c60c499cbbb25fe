//! Errors produced by affine space construction and intersection.

use thiserror::Error;

/// Error that can occur when constructing or intersecting affine spaces.
///
/// Every variant is a contract violation (malformed input or a case that is
/// not covered), so none of them are worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AffineError {
    /// Comparator precision is zero, negative, or NaN.
    #[error("precision must be a positive real number; got {0}")]
    NonPositivePrecision(f64),
    /// Affine hull requested for an empty point collection.
    #[error("cannot span an affine space from zero points")]
    EmptyPointSet,
    /// Basis vector index is not less than the dimension of the space.
    #[error("basis index {index} out of range for {ndim}-dimensional space")]
    BasisIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Dimension of the space.
        ndim: usize,
    },
    /// Intersection is not implemented for this combination of dimensions.
    #[error(
        "intersection of {first}-dimensional and {second}-dimensional spaces \
         in {ambient}D is not implemented"
    )]
    UnsupportedIntersection {
        /// Dimension of the lower-dimensional operand.
        first: usize,
        /// Dimension of the higher-dimensional operand.
        second: usize,
        /// Ambient dimension.
        ambient: usize,
    },
}

/// Result type returned by affine space operations.
pub type AffineResult<T> = Result<T, AffineError>;
