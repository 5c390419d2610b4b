//! The majorization (Guttman transform) update step.
//!
//! ## Purpose
//!
//! This module computes one majorization update of a configuration: every
//! free coordinate moves to the weighted average of the positions implied by
//! its neighbors' target distances, while pinned coordinates are written
//! from their constraint. One such step never increases stress for valid
//! weights, which is what drives the engine's fixed-point loop.
//!
//! ## Design notes
//!
//! * **Double-buffered**: The step reads only the previous configuration and
//!   writes only the next one. Every point's update depends on every other
//!   point's *unmodified* previous position, so in-place mutation would be
//!   wrong, not merely unfashionable.
//! * **Degenerate guard**: A pair whose distance is at or below
//!   [`DISTANCE_FLOOR`](crate::math::metric::DISTANCE_FLOOR) contributes
//!   nothing — skipping the pair is the correct limit, dividing by a nearly
//!   zero distance is not.
//! * **Axis-generic**: One code path serves 2D and 3D; the free/pinned
//!   decision is a per-axis predicate on the constraint policy.
//! * **Per-point accumulation**: Each output row starts from its pinned
//!   values or zero and accumulates locally; there is no shared accumulator
//!   state between points.
//!
//! ## Invariants
//!
//! * `next` has the same shape as `current` on entry.
//! * `row_weight_sums[i] > 0` for every point with at least one free axis
//!   (validated at the API boundary).
//!
//! ## Non-goals
//!
//! * This module does not evaluate stress or decide termination (engine).
//! * This module does not validate inputs (engine validator).

// External dependencies
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::constraint::Constraint;
use crate::math::metric::{distance_floor, euclidean};
use crate::primitives::matrix::{Coordinates, SquareMatrix};

// ============================================================================
// Sequential Step
// ============================================================================

/// Compute one majorization update of `current` into `next`.
///
/// `initial` is the configuration at solve start; `FixedAxis` constraints
/// pin to its values. `row_weight_sums[i]` must hold the sum of row i of
/// `weights`.
#[allow(clippy::too_many_arguments)]
pub fn guttman_step<T: Float>(
    current: &Coordinates<T>,
    initial: &Coordinates<T>,
    weights: &SquareMatrix<T>,
    targets: &SquareMatrix<T>,
    row_weight_sums: &[T],
    constraint: &Constraint<T>,
    next: &mut Coordinates<T>,
) {
    let dims = current.dims();
    for (i, row) in next.as_mut_slice().chunks_mut(dims).enumerate() {
        update_point(
            i,
            current,
            initial,
            weights,
            targets,
            row_weight_sums[i],
            constraint,
            row,
        );
    }
}

// ============================================================================
// Parallel Step
// ============================================================================

/// Compute one majorization update with the point loop fanned across cores.
///
/// Numerically identical to [`guttman_step`]: each point's update reads only
/// the previous configuration, so the point loop is embarrassingly parallel
/// as long as the double-buffering discipline holds.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn guttman_step_parallel<T>(
    current: &Coordinates<T>,
    initial: &Coordinates<T>,
    weights: &SquareMatrix<T>,
    targets: &SquareMatrix<T>,
    row_weight_sums: &[T],
    constraint: &Constraint<T>,
    next: &mut Coordinates<T>,
) where
    T: Float + Send + Sync,
{
    let dims = current.dims();
    next.as_mut_slice()
        .par_chunks_mut(dims)
        .enumerate()
        .for_each(|(i, row)| {
            update_point(
                i,
                current,
                initial,
                weights,
                targets,
                row_weight_sums[i],
                constraint,
                row,
            );
        });
}

// ============================================================================
// Per-Point Update
// ============================================================================

/// Update one point's row of the next configuration.
///
/// Free axes accumulate the Guttman average; pinned axes take their pinned
/// value directly. The whole pair (i, j) is skipped when the previous-iterate
/// distance is at or below the floor, for all axes at once.
#[allow(clippy::too_many_arguments)]
#[inline]
fn update_point<T: Float>(
    point: usize,
    current: &Coordinates<T>,
    initial: &Coordinates<T>,
    weights: &SquareMatrix<T>,
    targets: &SquareMatrix<T>,
    row_weight_sum: T,
    constraint: &Constraint<T>,
    out: &mut [T],
) {
    let floor = distance_floor::<T>();

    // Seed the row: pinned axes take their value, free axes reset to zero.
    for (axis, slot) in out.iter_mut().enumerate() {
        *slot = constraint
            .pinned(initial, point, axis)
            .unwrap_or_else(T::zero);
    }

    let xi = current.row(point);
    for j in 0..current.n_points() {
        if j == point {
            continue;
        }
        let xj = current.row(j);
        let denom = euclidean(xi, xj);
        if denom <= floor {
            continue;
        }
        let w = weights.get(point, j);
        let target = targets.get(point, j);
        for (axis, slot) in out.iter_mut().enumerate() {
            if constraint.is_free(point, axis) {
                *slot = *slot + w * (xj[axis] + target * (xi[axis] - xj[axis]) / denom);
            }
        }
    }

    for (axis, slot) in out.iter_mut().enumerate() {
        if constraint.is_free(point, axis) {
            *slot = *slot / row_weight_sum;
        }
    }
}
