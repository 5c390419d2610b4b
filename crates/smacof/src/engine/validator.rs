//! Input validation for solve configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied at the API boundary
//! before a solve runs. It checks shapes, symmetry, signs, finiteness, and
//! the constraint-dependent positive-row-sum requirement.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Single boundary**: The math, algorithm, and executor layers assume
//!   validated inputs and never re-check them; a caller that bypasses the
//!   API owns the resulting NaNs.
//!
//! ## Key concepts
//!
//! * **Shape checks**: Matrices must be n×n for an n-point configuration;
//!   anchor grids must mirror the configuration's shape.
//! * **Symmetry and signs**: Weight and target-distance matrices must be
//!   symmetric with nonnegative entries.
//! * **Free-point normalizers**: Every point with at least one free axis
//!   needs a strictly positive weight-row sum, or the update divides by
//!   zero.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the solve itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::constraint::{Anchor, AnchorGrid, Constraint};
use crate::primitives::errors::SmacofError;
use crate::primitives::matrix::{Coordinates, SquareMatrix};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solve configuration and input data.
///
/// Provides static methods returning `Result<(), SmacofError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate an initial or standalone configuration.
    pub fn validate_configuration<T: Float>(x: &Coordinates<T>) -> Result<(), SmacofError> {
        if x.is_empty() {
            return Err(SmacofError::EmptyConfiguration);
        }

        let dims = x.dims();
        if !(2..=3).contains(&dims) {
            return Err(SmacofError::UnsupportedDimension(dims));
        }

        for i in 0..x.n_points() {
            for (axis, &value) in x.row(i).iter().enumerate() {
                if !value.is_finite() {
                    return Err(SmacofError::InvalidNumericValue(format!(
                        "configuration[{}][{}]={}",
                        i,
                        axis,
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Validate a weight or target-distance matrix against the point count.
    ///
    /// Checks size, finiteness, symmetry, and nonnegativity in that order.
    pub fn validate_matrix<T: Float>(
        m: &SquareMatrix<T>,
        n_points: usize,
        name: &'static str,
    ) -> Result<(), SmacofError> {
        if m.n() != n_points {
            return Err(SmacofError::MatrixSizeMismatch {
                name,
                got: m.n(),
                expected: n_points,
            });
        }

        let n = m.n();
        for i in 0..n {
            for j in 0..n {
                let value = m.get(i, j);
                if !value.is_finite() {
                    return Err(SmacofError::InvalidNumericValue(format!(
                        "{}[{}][{}]={}",
                        name,
                        i,
                        j,
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
                if value < T::zero() {
                    return Err(SmacofError::NegativeEntry { name, row: i, col: j });
                }
                if j > i && value != m.get(j, i) {
                    return Err(SmacofError::AsymmetricMatrix { name, row: i, col: j });
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Constraint Validation
    // ========================================================================

    /// Validate a 1-based fixed-axis index against the dimension count.
    pub fn validate_axis(axis: usize, dims: usize) -> Result<(), SmacofError> {
        if axis == 0 || axis > dims {
            return Err(SmacofError::InvalidAxis { axis, dims });
        }
        Ok(())
    }

    /// Validate an anchor grid against the configuration it constrains.
    ///
    /// The grid must mirror the configuration's shape and every pinned value
    /// must be finite.
    pub fn validate_anchors<T: Float>(
        anchors: &AnchorGrid<T>,
        x: &Coordinates<T>,
    ) -> Result<(), SmacofError> {
        if anchors.n_points() != x.n_points() || anchors.dims() != x.dims() {
            return Err(SmacofError::AnchorShapeMismatch {
                got_points: anchors.n_points(),
                got_dims: anchors.dims(),
                expected_points: x.n_points(),
                expected_dims: x.dims(),
            });
        }

        for i in 0..anchors.n_points() {
            for axis in 0..anchors.dims() {
                if let Anchor::Pinned(value) = anchors.get(i, axis) {
                    if !value.is_finite() {
                        return Err(SmacofError::InvalidNumericValue(format!(
                            "anchor[{}][{}]={}",
                            i,
                            axis,
                            value.to_f64().unwrap_or(f64::NAN)
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate that every point with a free axis has a strictly positive
    /// weight-row sum.
    ///
    /// Fully pinned points are exempt: their coordinates never divide by
    /// the normalizer.
    pub fn validate_row_weight_sums<T: Float>(
        weights: &SquareMatrix<T>,
        constraint: &Constraint<T>,
        x: &Coordinates<T>,
    ) -> Result<(), SmacofError> {
        // A single point never enters the update loop, so no normalizer is
        // ever applied to it.
        if x.n_points() < 2 {
            return Ok(());
        }

        let dims = x.dims();
        for i in 0..x.n_points() {
            if !constraint.point_has_free_axis(i, dims) {
                continue;
            }
            let mut sum = T::zero();
            for &w in weights.row(i) {
                sum = sum + w;
            }
            if sum <= T::zero() {
                return Err(SmacofError::ZeroWeightRow { point: i });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence tolerance.
    ///
    /// Any finite value is legal, including negative ones (which demand a
    /// strictly positive relative improvement every iteration).
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SmacofError> {
        if !tol.is_finite() {
            return Err(SmacofError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmacofError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmacofError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
