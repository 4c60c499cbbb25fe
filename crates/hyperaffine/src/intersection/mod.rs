//! Intersection of affine spaces.
//!
//! Intersection is only implemented for particular combinations of dimensions
//! (see [`intersection()`]). Other combinations return
//! [`AffineError::UnsupportedIntersection`] rather than an approximation.

use crate::{AffineError, AffineResult, AffineSpace, Comparator, Scalar};


/// Returns the intersection of two affine spaces, or `None` if they are
/// disjoint.
///
/// Supported combinations, where `N` is the ambient dimension:
///
/// - anything with the whole space
/// - point with point
/// - point with any space
/// - line with line
/// - line with hyperplane (dimension `N - 1`)
/// - plane with plane in 3D
///
/// When one space contains the other, the smaller one is returned as-is.
///
/// Parallel lines are coincident if either contains the anchor of the other,
/// so two descriptions of the same line with different anchors intersect in
/// that line rather than being reported as disjoint.
pub fn intersection<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> AffineResult<Option<AffineSpace<S, N>>> {
    let (first, second) = if b.ndim() < a.ndim() { (b, a) } else { (a, b) };

    log::trace!(
        "intersecting {}-dimensional and {}-dimensional spaces in {N}D",
        first.ndim(),
        second.ndim(),
    );

    if second.is_full() {
        return Ok(Some(first.clone()));
    }

    let ret = match (first.ndim(), second.ndim()) {
        (0, 0) => point_with_point(first, second, cmp),
        (0, _) => point_with_space(first, second, cmp),
        (1, 1) if N == 2 => line_with_line_2d(first, second, cmp),
        (1, d) if d + 1 == N => line_with_hyperplane(first, second, cmp),
        (1, 1) => line_with_line(first, second, cmp),
        (2, 2) if N == 3 => plane_with_plane_3d(first, second, cmp),
        (first, second) => {
            return Err(AffineError::UnsupportedIntersection {
                first,
                second,
                ambient: N,
            });
        }
    };
    Ok(ret)
}

fn point_with_point<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    let coincident = if N == 1 {
        cmp.approx_eq(&a.anchor()[0], &b.anchor()[0])
    } else {
        cmp.approx_eq_zero(&(*a.anchor() - *b.anchor()).mag())
    };
    coincident.then(|| a.clone())
}

fn point_with_space<S: Scalar, const N: usize>(
    point: &AffineSpace<S, N>,
    space: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    space.contains(point.anchor(), cmp).then(|| point.clone())
}

/// Returns `a` if it lies within `b`, which must have at least the same
/// dimension as `a`.
fn coincident_or_disjoint<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    b.contains(a.anchor(), cmp).then(|| a.clone())
}

/// Intersects two lines in 2D using Cramer's rule.
fn line_with_line_2d<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    let v = a.basis()[0];
    let w = b.basis()[0];

    // Solve `a + v*t = b + w*s` for `t`.
    let det = w[0] * v[1] - v[0] * w[1];
    if cmp.approx_eq_zero(&det) {
        return coincident_or_disjoint(a, b, cmp);
    }
    let diff = *b.anchor() - *a.anchor();
    let det_t = w[0] * diff[1] - diff[0] * w[1];
    Some(AffineSpace::point(*a.anchor() + v * det_t / det))
}

/// Intersects two lines in any number of dimensions. Skew lines are disjoint.
fn line_with_line<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    let u = a.basis()[0];
    let w = b.basis()[0];

    // Split `u` into components parallel and perpendicular to `w`.
    let parallel = u.dot(&w);
    let perpendicular = u - w * parallel;
    let perpendicular_mag = perpendicular.mag();
    if cmp.approx_eq_zero(&perpendicular_mag) {
        return coincident_or_disjoint(a, b, cmp);
    }
    let v = perpendicular / perpendicular_mag;

    // Solve `a + u*t = b + w*s`, first along `v` (which eliminates `s`) and
    // then along `w`.
    let diff = *a.anchor() - *b.anchor();
    let t = -v.dot(&diff) / perpendicular_mag;
    let s = w.dot(&diff) + parallel * t;

    // The solution only satisfies both equations if the lines are coplanar.
    let miss = w * s - u * t - diff;
    cmp.approx_eq_zero(&miss.mag())
        .then(|| AffineSpace::point(*a.anchor() + u * t))
}

/// Intersects a line with a hyperplane (a space of codimension 1).
fn line_with_hyperplane<S: Scalar, const N: usize>(
    line: &AffineSpace<S, N>,
    hyperplane: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    let u = line.basis()[0];

    // Component of the line direction normal to the hyperplane.
    let normal = hyperplane.reject(u);
    if cmp.approx_eq_zero(&normal.mag()) {
        return coincident_or_disjoint(line, hyperplane, cmp);
    }
    let normal = normal / normal.mag();

    let diff = *line.anchor() - *hyperplane.anchor();
    let t = -diff.dot(&normal) / u.dot(&normal);
    Some(AffineSpace::point(*line.anchor() + u * t))
}

/// Intersects two planes in 3D.
fn plane_with_plane_3d<S: Scalar, const N: usize>(
    a: &AffineSpace<S, N>,
    b: &AffineSpace<S, N>,
    cmp: &impl Comparator<S>,
) -> Option<AffineSpace<S, N>> {
    let n1 = a.basis()[0].cross_product_3d(&a.basis()[1]);
    let n2 = b.basis()[0].cross_product_3d(&b.basis()[1]);
    let h1 = a.anchor().dot(&n1);
    let h2 = b.anchor().dot(&n2);

    let cos = n1.dot(&n2);
    let cos2 = cos * cos;
    if cmp.approx_eq(&cos2, &S::one()) {
        return coincident_or_disjoint(a, b, cmp);
    }

    // The closest point to the origin on the line of intersection is a linear
    // combination `c1*n1 + c2*n2`.
    let denom = S::one() - cos2;
    let c1 = (h1 - h2 * cos) / denom;
    let c2 = (h2 - h1 * cos) / denom;
    let point = n1 * c1 + n2 * c2;
    let direction = n1.cross_product_3d(&n2);
    Some(AffineSpace::new(point, [direction], cmp))
}
