#![cfg(feature = "dev")]
//! Tests for the constraint policies.
//!
//! These tests verify the per-axis free/pinned decision logic for all three
//! regimes, independent of the update step that consumes it.

use smacof::internals::algorithms::constraint::{Anchor, AnchorGrid, Constraint};
use smacof::internals::primitives::matrix::Coordinates;

// ============================================================================
// Unconstrained
// ============================================================================

/// Without constraints, every coordinate is free and nothing is pinned.
#[test]
fn test_none_frees_everything() {
    let constraint = Constraint::<f64>::None;
    let initial = Coordinates::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);

    for point in 0..2 {
        for axis in 0..2 {
            assert!(constraint.is_free(point, axis));
            assert_eq!(constraint.pinned(&initial, point, axis), None);
        }
        assert!(constraint.point_has_free_axis(point, 2));
    }
}

// ============================================================================
// Fixed Axis
// ============================================================================

/// A fixed axis pins that axis for every point, to the initial values.
#[test]
fn test_fixed_axis_decisions() {
    let constraint = Constraint::FixedAxis(1);
    let initial = Coordinates::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);

    assert!(constraint.is_free(0, 0));
    assert!(!constraint.is_free(0, 1));
    assert!(constraint.is_free(1, 0));
    assert!(!constraint.is_free(1, 1));

    assert_eq!(constraint.pinned(&initial, 0, 1), Some(2.0));
    assert_eq!(constraint.pinned(&initial, 1, 1), Some(4.0));
    assert_eq!(constraint.pinned(&initial, 0, 0), None);

    // Some axis always remains free when dims exceeds the fixed axis count.
    assert!(constraint.point_has_free_axis(0, 2));
}

/// Fixing one of three axes leaves the other two free.
#[test]
fn test_fixed_axis_3d() {
    let constraint = Constraint::<f64>::FixedAxis(2);
    assert!(constraint.is_free(0, 0));
    assert!(constraint.is_free(0, 1));
    assert!(!constraint.is_free(0, 2));
}

// ============================================================================
// Anchored
// ============================================================================

/// Anchored decisions follow the grid entry by entry, and pinned values
/// come from the grid rather than the initial configuration.
#[test]
fn test_anchored_decisions() {
    let initial = Coordinates::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let grid = AnchorGrid::from_entries(
        vec![
            Anchor::Pinned(9.0),
            Anchor::Free,
            Anchor::Free,
            Anchor::Pinned(-9.0),
        ],
        2,
    )
    .unwrap();
    let constraint = Constraint::Anchored(grid);

    assert!(!constraint.is_free(0, 0));
    assert!(constraint.is_free(0, 1));
    assert!(constraint.is_free(1, 0));
    assert!(!constraint.is_free(1, 1));

    assert_eq!(constraint.pinned(&initial, 0, 0), Some(9.0));
    assert_eq!(constraint.pinned(&initial, 1, 1), Some(-9.0));
    assert_eq!(constraint.pinned(&initial, 0, 1), None);
}

/// A fully pinned point reports no free axis; a mixed point reports one.
#[test]
fn test_point_has_free_axis() {
    let grid = AnchorGrid::from_entries(
        vec![
            Anchor::Pinned(0.0),
            Anchor::Pinned(1.0),
            Anchor::Pinned(2.0),
            Anchor::Free,
        ],
        2,
    )
    .unwrap();
    let constraint = Constraint::Anchored(grid);

    assert!(!constraint.point_has_free_axis(0, 2));
    assert!(constraint.point_has_free_axis(1, 2));
}

// ============================================================================
// Grid Plumbing
// ============================================================================

/// Grid accessors report the declared shape.
#[test]
fn test_grid_shape() {
    let grid = AnchorGrid::<f64>::all_free(3, 2);
    assert_eq!(grid.n_points(), 3);
    assert_eq!(grid.dims(), 2);
    assert!(grid.get(2, 1).is_free());
}

/// Entry counts must tile the declared dimensions.
#[test]
fn test_grid_shape_check() {
    assert!(AnchorGrid::<f64>::from_entries(vec![Anchor::Free; 6], 3).is_ok());
    assert!(AnchorGrid::<f64>::from_entries(vec![Anchor::Free; 5], 3).is_err());
    assert!(AnchorGrid::<f64>::from_entries(vec![Anchor::Free; 4], 0).is_err());
}
