//! The weighted stress objective.
//!
//! ## Purpose
//!
//! Stress measures how badly a configuration reproduces the target
//! distances: the weighted sum, over unordered point pairs, of the squared
//! difference between realized and target distance. It is both the quantity
//! the majorization loop drives down and the convergence signal.
//!
//! ## Design notes
//!
//! * **Pure**: No side effects; a function of the three inputs only.
//! * **Pair iteration**: Each unordered pair (i, j), i < j, is counted once.
//! * **Cost**: O(n²·d).
//!
//! ## Invariants
//!
//! * The result is nonnegative for valid (nonnegative) weights.
//! * The result is zero iff every weighted pair realizes its target distance.
//!
//! ## Non-goals
//!
//! * This module does not validate shapes or symmetry (engine validator).
//! * This module does not normalize stress (raw weighted stress only).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::metric::euclidean;
use crate::primitives::matrix::{Coordinates, SquareMatrix};

/// Weighted stress of a configuration against target distances.
///
/// For every unordered pair (i, j) with i < j, accumulates
/// `weights(i, j) * (distance(x_i, x_j) - targets(i, j))²`.
///
/// Meaningful for configurations of at least two points; with fewer there
/// are no pairs and the result is zero.
pub fn weighted_stress<T: Float>(
    x: &Coordinates<T>,
    weights: &SquareMatrix<T>,
    targets: &SquareMatrix<T>,
) -> T {
    let n = x.n_points();
    let mut total = T::zero();
    for i in 0..n {
        let xi = x.row(i);
        for j in (i + 1)..n {
            let realized = euclidean(xi, x.row(j));
            let diff = realized - targets.get(i, j);
            total = total + weights.get(i, j) * diff * diff;
        }
    }
    total
}
