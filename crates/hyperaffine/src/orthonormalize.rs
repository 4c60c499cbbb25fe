//! Pivoted Gram-Schmidt orthonormalization.

use float_ord::FloatOrd;
use num_traits::ToPrimitive;

use crate::{Comparator, Scalar, Vector};

/// Reduces a list of generator vectors to an orthonormal basis of their span.
///
/// Returns the basis along with its rank. The basis contains exactly `rank`
/// vectors, and `rank <= N`; dependent generators are discarded.
///
/// At each step the remaining vector with the largest magnitude is chosen as
/// the next basis vector, which minimizes cancellation when the generators are
/// nearly dependent. Once the largest remaining vector is approximately zero
/// (according to `cmp`), the rest are dependent on the basis so far. After `N`
/// basis vectors the remaining generators are dependent regardless of what
/// rounding error is left in them.
pub fn orthonormalize<S: Scalar, const N: usize>(
    mut vectors: Vec<Vector<S, N>>,
    cmp: &impl Comparator<S>,
) -> (Vec<Vector<S, N>>, usize) {
    let generator_count = vectors.len();
    let max_rank = generator_count.min(N);

    for i in 0..max_rank {
        // Ties go to the earliest vector.
        let pivot = (i..generator_count)
            .rev()
            .max_by_key(|&j| pivot_key(&vectors[j]))
            .unwrap_or(i);
        vectors.swap(i, pivot);

        let mag = vectors[i].mag();
        if cmp.approx_eq_zero(&mag) {
            return discard_dependent(vectors, i);
        }
        vectors[i] /= mag;

        let (done, rest) = vectors.split_at_mut(i + 1);
        let unit = &done[i];
        for v in rest {
            *v = v.rejected_from_unit(unit);
        }
    }

    discard_dependent(vectors, max_rank)
}

fn discard_dependent<S, const N: usize>(
    mut vectors: Vec<Vector<S, N>>,
    rank: usize,
) -> (Vec<Vector<S, N>>, usize) {
    if vectors.len() > rank {
        log::debug!(
            "discarding {} linearly dependent generators (rank {rank})",
            vectors.len() - rank,
        );
        vectors.truncate(rank);
    }
    (vectors, rank)
}

/// Returns the key used to choose a pivot: the squared magnitude, or its
/// midpoint for interval scalars.
fn pivot_key<S: Scalar, const N: usize>(v: &Vector<S, N>) -> FloatOrd<f64> {
    FloatOrd(v.mag2().to_f64().unwrap_or(f64::NAN))
}
