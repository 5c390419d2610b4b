#![cfg(feature = "dev")]
//! Tests for the majorization update step.
//!
//! These tests pin down the numerics of a single Guttman transform step:
//! - The weighted-average update for free coordinates
//! - The degenerate-distance skip for near-coincident pairs
//! - Pinning under the axis-fixed and anchored constraint regimes
//! - Row-sum normalization, including diagonal weight entries
//!
//! ## Test Organization
//!
//! 1. **Unconstrained Updates** - Hand-computed two- and three-point steps
//! 2. **Degenerate Pairs** - Coincident points contribute nothing
//! 3. **Constraint Regimes** - Axis-fixed and anchored pinning
//! 4. **Normalization** - Weight-row sums include the diagonal

use approx::assert_abs_diff_eq;

use smacof::internals::algorithms::constraint::{Anchor, AnchorGrid, Constraint};
use smacof::internals::algorithms::guttman::guttman_step;
use smacof::internals::primitives::matrix::{Coordinates, SquareMatrix};

// ============================================================================
// Helpers
// ============================================================================

/// Run one update step with freshly computed row-weight sums.
fn step(
    current: &Coordinates<f64>,
    initial: &Coordinates<f64>,
    weights: &SquareMatrix<f64>,
    targets: &SquareMatrix<f64>,
    constraint: &Constraint<f64>,
) -> Coordinates<f64> {
    let n = current.n_points();
    let sums: Vec<f64> = (0..n).map(|i| weights.row(i).iter().sum()).collect();
    let mut next = Coordinates::zeros(n, current.dims());
    guttman_step(current, initial, weights, targets, &sums, constraint, &mut next);
    next
}

// ============================================================================
// Unconstrained Updates
// ============================================================================

/// Two points at distance 1 with target 2 push each other apart:
/// point 0 moves to x = 1 + 2*(0-1)/1 = -1, point 1 to x = 0 + 2*(1-0)/1 = 2.
#[test]
fn test_two_point_update() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 2.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    assert_abs_diff_eq!(next.get(0, 0), -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(0, 1), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 1), 0.0, epsilon = 1e-12);
}

/// An exact-fit configuration is a fixed point of the update.
#[test]
fn test_exact_fit_is_fixed_point() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 1.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    for i in 0..2 {
        for axis in 0..2 {
            assert_abs_diff_eq!(next.get(i, axis), x.get(i, axis), epsilon = 1e-12);
        }
    }
}

/// The update generalizes over the axis count: in 3D every axis of a free
/// point is recomputed.
#[test]
fn test_three_dimensional_update() {
    let x = Coordinates::from_rows(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 4.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    // Each point moves one target-length along the pair axis:
    // point 0 to 2 + 4*(0-2)/2 = -2, point 1 to 0 + 4*(2-0)/2 = 4.
    assert_abs_diff_eq!(next.get(0, 0), -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 0), 4.0, epsilon = 1e-12);
    for i in 0..2 {
        assert_abs_diff_eq!(next.get(i, 1), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(next.get(i, 2), 0.0, epsilon = 1e-12);
    }
}

// ============================================================================
// Degenerate Pairs
// ============================================================================

/// Two coincident points skip each other's contribution entirely, and the
/// well-separated third point stays finite and exact.
#[test]
fn test_coincident_pair_skipped() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [0.0, 0.0], [5.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(3, 1.0);
    let d = SquareMatrix::constant_off_diagonal(3, 1.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    // Points 0 and 1 only see point 2: x = (5 + 1*(0-5)/5) / 2 = 2.
    assert_abs_diff_eq!(next.get(0, 0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 0), 2.0, epsilon = 1e-12);
    // Point 2 sees both coincident points: x = (1 + 1) / 2 = 1.
    assert_abs_diff_eq!(next.get(2, 0), 1.0, epsilon = 1e-12);

    for i in 0..3 {
        for axis in 0..2 {
            assert!(next.get(i, axis).is_finite());
        }
    }
}

/// A pair separated by less than the floor is treated as coincident.
#[test]
fn test_near_coincident_pair_skipped() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [5e-6, 0.0], [5.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(3, 1.0);
    let d = SquareMatrix::constant_off_diagonal(3, 1.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    for i in 0..3 {
        for axis in 0..2 {
            assert!(next.get(i, axis).is_finite());
        }
    }
}

// ============================================================================
// Constraint Regimes
// ============================================================================

/// The fixed axis is written from the configuration at solve start, not
/// from the current iterate.
#[test]
fn test_fixed_axis_pins_to_initial() {
    let initial = Coordinates::from_rows(&[[0.0, 3.0], [1.0, 7.0]]);
    let current = Coordinates::from_rows(&[[0.0, 10.0], [1.0, 20.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 2.0);

    let next = step(&current, &initial, &w, &d, &Constraint::FixedAxis(1));

    assert_eq!(next.get(0, 1), 3.0);
    assert_eq!(next.get(1, 1), 7.0);
    // The free axis still updates from the current iterate.
    assert!(next.get(0, 0).is_finite());
    assert!(next.get(1, 0).is_finite());
}

/// Anchored entries pin to the grid's values, which win over both the
/// initial and current configurations; free entries update normally.
#[test]
fn test_anchored_pins_to_grid() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 2.0);

    let anchors = AnchorGrid::from_entries(
        vec![
            Anchor::Pinned(9.0),
            Anchor::Pinned(-1.0),
            Anchor::Free,
            Anchor::Free,
        ],
        2,
    )
    .unwrap();

    let next = step(&x, &x, &w, &d, &Constraint::Anchored(anchors));

    assert_eq!(next.get(0, 0), 9.0);
    assert_eq!(next.get(0, 1), -1.0);
    // Point 1 is free and reads the current position of point 0, so its
    // update is the same as in the unconstrained two-point case.
    assert_abs_diff_eq!(next.get(1, 0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 1), 0.0, epsilon = 1e-12);
}

/// A point may mix pinned and free axes.
#[test]
fn test_anchored_mixed_axes() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
    let w = SquareMatrix::constant_off_diagonal(2, 1.0);
    let d = SquareMatrix::constant_off_diagonal(2, 2.0);

    let anchors = AnchorGrid::from_entries(
        vec![
            Anchor::Free,
            Anchor::Pinned(4.0),
            Anchor::Free,
            Anchor::Free,
        ],
        2,
    )
    .unwrap();

    let next = step(&x, &x, &w, &d, &Constraint::Anchored(anchors));

    assert_abs_diff_eq!(next.get(0, 0), -1.0, epsilon = 1e-12);
    assert_eq!(next.get(0, 1), 4.0);
}

// ============================================================================
// Normalization
// ============================================================================

/// The normalizer is the full weight-row sum, diagonal included, matching
/// the row-sum convention of the weight matrix.
#[test]
fn test_row_sum_includes_diagonal() {
    let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
    let w = SquareMatrix::from_flat(vec![3.0, 1.0, 1.0, 3.0], 2).unwrap();
    let d = SquareMatrix::constant_off_diagonal(2, 2.0);

    let next = step(&x, &x, &w, &d, &Constraint::None);

    // Pair weight 1, row sum 4: point 0 lands at -1/4, point 1 at 2/4.
    assert_abs_diff_eq!(next.get(0, 0), -0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(next.get(1, 0), 0.5, epsilon = 1e-12);
}
