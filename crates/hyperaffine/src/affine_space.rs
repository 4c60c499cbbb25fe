//! Affine subspaces represented by an anchor point and an orthonormal basis.

use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{AffineError, AffineResult, Comparator, Point, Scalar, Vector, orthonormalize};

/// Affine subspace of `N`-dimensional space: the set of points
/// `anchor + Σ cᵢ·basisᵢ` for all scalars `cᵢ`.
///
/// The basis is orthonormal (within the tolerance of the comparator it was
/// constructed with) and contains at most `N` vectors. The anchor is an
/// arbitrary point of the space, so two spaces with different anchors may be
/// equal; compare spaces using [`AffineSpace::contains()`] or
/// [`crate::intersection()`] instead of comparing fields.
///
/// Affine spaces are immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct AffineSpace<S, const N: usize> {
    /// Point through which the space passes.
    anchor: Point<S, N>,
    /// Orthonormal basis.
    basis: SmallVec<[Vector<S, N>; 3]>,
}

impl<S: Scalar, const N: usize> Default for AffineSpace<S, N> {
    /// Returns the 0-dimensional space containing only the origin.
    fn default() -> Self {
        Self::point(Point::zero())
    }
}

impl<S: Scalar, const N: usize> From<Point<S, N>> for AffineSpace<S, N> {
    fn from(anchor: Point<S, N>) -> Self {
        Self::point(anchor)
    }
}

impl<S: fmt::Display, const N: usize> fmt::Display for AffineSpace<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {{{}}}]", self.anchor, self.basis.iter().format(", "))
    }
}

impl<S: Scalar, const N: usize> AffineSpace<S, N> {
    /// Constructs a 0-dimensional space containing a single point.
    pub fn point(anchor: Point<S, N>) -> Self {
        Self {
            anchor,
            basis: SmallVec::new(),
        }
    }

    /// Constructs the space through `anchor` spanned by `generators`.
    ///
    /// The generators need not be independent, normalized, or orthogonal;
    /// they are reduced to an orthonormal basis and any dependent generators
    /// are discarded.
    pub fn new(
        anchor: Point<S, N>,
        generators: impl IntoIterator<Item = Vector<S, N>>,
        cmp: &impl Comparator<S>,
    ) -> Self {
        let (basis, _rank) = orthonormalize(generators.into_iter().collect(), cmp);
        Self {
            anchor,
            basis: SmallVec::from_vec(basis),
        }
    }

    /// Constructs the smallest affine space containing every point in
    /// `points` (their affine hull).
    ///
    /// The first point becomes the anchor. Returns an error if `points` is
    /// empty.
    pub fn spanning(
        points: impl IntoIterator<Item = Point<S, N>>,
        cmp: &impl Comparator<S>,
    ) -> AffineResult<Self> {
        let mut points = points.into_iter();
        let anchor = points.next().ok_or(AffineError::EmptyPointSet)?;
        Ok(Self::new(anchor, points.map(|p| p - anchor), cmp))
    }

    /// Returns the number of dimensions of the ambient space, `N`.
    pub const fn ambient_ndim(&self) -> usize {
        N
    }
    /// Returns the number of dimensions of the space, which is the number of
    /// basis vectors.
    pub fn ndim(&self) -> usize {
        self.basis.len()
    }
    /// Returns whether the space is the entire ambient space.
    pub fn is_full(&self) -> bool {
        self.ndim() == N
    }

    /// Returns the anchor point.
    pub fn anchor(&self) -> &Point<S, N> {
        &self.anchor
    }
    /// Returns the orthonormal basis.
    pub fn basis(&self) -> &[Vector<S, N>] {
        &self.basis
    }
    /// Returns a basis vector, or an error if `index >= self.ndim()`.
    pub fn basis_vector(&self, index: usize) -> AffineResult<&Vector<S, N>> {
        self.basis.get(index).ok_or(AffineError::BasisIndexOutOfRange {
            index,
            ndim: self.ndim(),
        })
    }

    /// Returns the component of `v` orthogonal to the space.
    pub(crate) fn reject(&self, mut v: Vector<S, N>) -> Vector<S, N> {
        // The basis is orthonormal, so removing each component in turn is the
        // same as projecting onto the orthogonal complement.
        for b in &self.basis {
            v = v.rejected_from_unit(b);
        }
        v
    }

    /// Returns whether `point` is in the space.
    pub fn contains(&self, point: &Point<S, N>, cmp: &impl Comparator<S>) -> bool {
        let residual = self.reject(self.anchor - *point);
        cmp.approx_eq_zero(&residual.mag())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{Interval, IntervalApprox, Precision};

    #[test]
    fn test_default_space() {
        let space = AffineSpace::<f64, 3>::default();
        assert_eq!(space.ndim(), 0);
        assert_eq!(space.ambient_ndim(), 3);
        assert_eq!(*space.anchor(), vector![0.0, 0.0, 0.0]);
        assert!(space.basis().is_empty());
    }

    #[test]
    fn test_point_space() {
        let space: AffineSpace<f64, 4> = vector![1.0, 2.0, 3.0, 4.0].into();
        assert_eq!(space.ndim(), 0);
        assert_eq!(space.ambient_ndim(), 4);
        assert_eq!(*space.anchor(), vector![1.0, 2.0, 3.0, 4.0]);
        assert!(space.basis().is_empty());
        assert_eq!(
            space.basis_vector(0),
            Err(AffineError::BasisIndexOutOfRange { index: 0, ndim: 0 }),
        );
    }

    #[test]
    fn test_space_from_generators() {
        let prec = Precision::default();

        let space_1d = AffineSpace::new(
            vector![0.0],
            [vector![1.0], vector![2.0], vector![3.0]],
            &prec,
        );
        assert_eq!(space_1d.ndim(), 1);
        assert!(space_1d.is_full());
        assert_eq!(space_1d.basis_vector(0).map(|b| b.mag()), Ok(1.0));
        assert!(space_1d.basis_vector(1).is_err());

        let anchor = vector![0.491742, -4.73389, -6.07428, 0.246362];
        let generators = vec![
            vector![-4.85797, 6.30975, -0.959427, -5.05184],
            vector![-3.53352, 6.14748, 6.88908, -8.43334],
            vector![-7.37983, -0.708072, -0.999901, -9.75365],
        ];
        let space_4d = AffineSpace::new(anchor, generators, &prec);
        assert_eq!(space_4d.ndim(), 3);
        assert_eq!(space_4d.ambient_ndim(), 4);
        assert_eq!(*space_4d.anchor(), anchor);
        for b in space_4d.basis() {
            assert_approx_eq!(b.mag(), 1.0, epsilon = 1e-15);
        }
        let b = space_4d.basis();
        assert_approx_eq!(b[0].dot(&b[1]), 0.0, epsilon = 1e-14);
        assert_approx_eq!(b[0].dot(&b[2]), 0.0, epsilon = 1e-14);
        assert_approx_eq!(b[1].dot(&b[2]), 0.0, epsilon = 1e-14);
        assert_eq!(
            space_4d.basis_vector(3),
            Err(AffineError::BasisIndexOutOfRange { index: 3, ndim: 3 }),
        );
    }

    #[test]
    fn test_spanning_empty() {
        let points: [Point<f64, 2>; 0] = [];
        assert_eq!(
            AffineSpace::spanning(points, &Precision::default()),
            Err(AffineError::EmptyPointSet),
        );
    }

    #[test]
    fn test_spanning_one_point() -> AffineResult<()> {
        let prec = Precision::default();
        let space_1d = AffineSpace::spanning([vector![0.0]], &prec)?;
        let space_3d = AffineSpace::spanning([vector![0.0, 0.0, 0.0]], &prec)?;
        assert_eq!(space_1d.ndim(), 0);
        assert_eq!(space_3d.ndim(), 0);
        assert!(space_1d.contains(&vector![0.0], &prec));
        assert!(space_3d.contains(&vector![0.0, 0.0, 0.0], &prec));
        Ok(())
    }

    #[test]
    fn test_spanning_two_points() -> AffineResult<()> {
        let prec = Precision::default();

        let (p0, p1) = (vector![0.0], vector![1.0]);
        let space = AffineSpace::spanning([p0, p1], &prec)?;
        assert_eq!(space.ndim(), 1);
        assert!(space.contains(&p0, &prec) && space.contains(&p1, &prec));

        let (p0, p1) = (vector![1.0, 0.0], vector![0.0, 1.0]);
        let space = AffineSpace::spanning([p0, p1], &prec)?;
        assert_eq!(space.ndim(), 1);
        assert!(space.contains(&p0, &prec) && space.contains(&p1, &prec));

        let (p0, p1) = (vector![3.0, -1.0, -2.0], vector![4.0, 8.0, 3.0]);
        let space = AffineSpace::spanning([p0, p1], &prec)?;
        assert_eq!(space.ndim(), 1);
        assert!(space.contains(&p0, &prec));
        assert!(space.contains(&p1, &Precision::new(1e-14)?));
        Ok(())
    }

    #[test]
    fn test_spanning_three_points() -> AffineResult<()> {
        let prec = Precision::default();
        let points = [
            vector![3.0, -1.0, -2.0],
            vector![4.0, 8.0, 3.0],
            vector![-12.0, 6.0, 6.0],
        ];
        let space = AffineSpace::spanning(points, &prec)?;
        assert_eq!(space.ndim(), 2);
        for p in &points {
            assert!(space.contains(p, &prec), "{p} should be in {space}");
        }
        Ok(())
    }

    #[test]
    fn test_spanning_dependent_points() -> AffineResult<()> {
        let prec = Precision::new(1e-12)?;
        let points = [
            vector![1.0, 1.0, 1.0],
            vector![2.0, 2.0, 2.0],
            vector![-3.0, -3.0, -3.0],
            vector![1.0, 1.0, 1.0],
        ];
        let space = AffineSpace::spanning(points, &prec)?;
        assert_eq!(space.ndim(), 1);
        assert!(space.contains(&vector![0.0, 0.0, 0.0], &prec));
        Ok(())
    }

    #[test]
    fn test_contains_point() {
        let prec = Precision::default();
        let space = AffineSpace::point(vector![0.15937, -7.87418, -0.0342971]);
        assert!(space.contains(&vector![0.15937, -7.87418, -0.0342971], &prec));
        assert!(!space.contains(&vector![-0.364325, 4.09101, 9.47693], &prec));

        let space = AffineSpace::point(vector![0.0]);
        assert!(space.contains(&vector![0.0], &prec));
        assert!(!space.contains(&vector![1.0], &prec));
    }

    #[test]
    fn test_contains_line() -> AffineResult<()> {
        let prec = Precision::default();

        let (p0, p1) = (vector![3.7452], vector![0.15937]);
        let space = AffineSpace::new(p0, [p1], &prec);
        assert!(space.contains(&(p0 + p1 * 6.02605), &prec));

        let (p0, p1, p2) = (
            vector![-8.49156, 1.51593],
            vector![-7.87418, -0.0342971],
            vector![-8.33719, -0.341978],
        );
        let space = AffineSpace::new(p0, [p1], &prec);
        assert!(space.contains(&(p0 + p1 * -4.34583), &prec));
        assert!(!space.contains(&(p0 + p2 * -0.613258), &prec));

        let (p0, p1, p2) = (
            vector![-8.62318, 0.216789, -6.73864],
            vector![-0.364325, 4.09101, 9.47693],
            vector![-5.91821, 7.95807, -9.30484],
        );
        let space = AffineSpace::new(p0, [p1], &prec);
        assert!(space.contains(&(p0 + p1 * 6.31083), &Precision::new(1e-14)?));
        assert!(!space.contains(&(p0 + p2 * 9.56608), &prec));
        Ok(())
    }

    #[test]
    fn test_contains_plane() -> AffineResult<()> {
        let prec = Precision::default();
        let p0 = vector![-6.74407, 9.95479, -8.01248];
        let p1 = vector![9.03308, 2.52597, 9.46997];
        let p2 = vector![-0.829302, -0.334162, 4.82537];
        let p3 = vector![2.75133, 2.39972, -7.47072];
        let space = AffineSpace::new(p0, [p1, p2], &prec);

        let loose = Precision::new(1e-14)?;
        assert!(space.contains(&(p0 + p1 * -6.00478 + p2 * 9.07631), &loose));
        assert!(space.contains(&(p0 + p1 * -4.82656 + p2 * -6.92954), &loose));
        assert!(!space.contains(&(p0 + p3 * 2.03547), &prec));
        Ok(())
    }

    #[test]
    fn test_contains_interval() -> AffineResult<()> {
        let p = Interval::point;
        let cmp = IntervalApprox;
        let space = AffineSpace::spanning(
            [vector![p(0.0), p(1.0)], vector![p(1.0), p(0.5)]],
            &cmp,
        )?;
        assert_eq!(space.ndim(), 1);
        assert!(space.contains(&vector![p(2.0), p(0.0)], &cmp));
        assert!(!space.contains(&vector![p(2.0), p(0.25)], &cmp));
        Ok(())
    }

    #[test]
    fn test_display() {
        let space = AffineSpace::<f64, 2>::point(vector![1.0, 2.0]);
        assert_eq!(space.to_string(), "[(1, 2), {}]");

        let space = AffineSpace::new(
            vector![1.0, 2.0],
            [vector![0.0, 3.0], vector![4.0, 0.0]],
            &Precision::default(),
        );
        assert_eq!(space.to_string(), "[(1, 2), {(1, 0), (0, 1)}]");
    }

    fn coordinate() -> impl Strategy<Value = f64> {
        -10.0..10.0_f64
    }

    fn point3() -> impl Strategy<Value = Point<f64, 3>> {
        prop::array::uniform3(coordinate()).prop_map(Vector)
    }

    proptest! {
        #[test]
        fn proptest_contains_combinations_of_basis(
            anchor in point3(),
            generators in prop::collection::vec(point3(), 0..3),
            coefficients in prop::array::uniform3(coordinate()),
        ) {
            let prec = Precision::new(1e-9).expect("valid");
            let space = AffineSpace::new(anchor, generators, &prec);
            prop_assert!(space.contains(&anchor, &prec));

            let offset: Vector<f64, 3> = std::iter::zip(space.basis(), coefficients)
                .map(|(&b, c)| b * c)
                .sum();
            prop_assert!(space.contains(&(anchor + offset), &prec));
        }

        #[test]
        fn proptest_rejects_orthogonal_displacement(
            anchor in point3(),
            generators in prop::collection::vec(point3(), 0..3),
            distance in prop_oneof![-5.0..-0.01_f64, 0.01..5.0_f64],
            seed in point3(),
        ) {
            let prec = Precision::new(1e-9).expect("valid");
            let space = AffineSpace::new(anchor, generators, &prec);
            let rejected = space.reject(seed);
            prop_assume!(rejected.mag() > 1e-3);
            let normal = rejected / rejected.mag();
            prop_assert!(!space.contains(&(anchor + normal * distance), &prec));
        }

        #[test]
        fn proptest_rank_ignores_translation(
            points in prop::collection::vec(point3(), 1..5),
            translation in point3(),
        ) {
            let prec = Precision::new(1e-9).expect("valid");
            let space = AffineSpace::spanning(points.clone(), &prec).expect("nonempty");
            let translated = AffineSpace::spanning(
                points.iter().map(|&p| p + translation),
                &prec,
            )
            .expect("nonempty");
            prop_assert_eq!(space.ndim(), translated.ndim());
        }

        #[test]
        fn proptest_spanning_matches_differences(points in prop::collection::vec(point3(), 1..5)) {
            let prec = Precision::new(1e-9).expect("valid");
            let spanned = AffineSpace::spanning(points.clone(), &prec).expect("nonempty");
            let anchor = points[0];
            let differences = points.iter().skip(1).map(|&p| p - anchor);
            let generated = AffineSpace::new(anchor, differences, &prec);
            prop_assert_eq!(spanned.ndim(), generated.ndim());
            prop_assert_eq!(spanned.ndim(), std::cmp::min(points.len() - 1, 3));
        }
    }
}
