//! High-level API for stress-majorization solves.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for the loop parameters and exposes one solve method
//! per constraint regime, plus a standalone stress evaluator.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: All inputs are checked when `build()` and the solve
//!   methods run; the layers below never re-validate.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Constraint regimes**: Unconstrained, axis-fixed, and anchored solves
//!   share one engine; only the constraint policy differs.
//! * **Configuration flow**: `Smacof::new()` → chained setters → `build()`
//!   → `solve*` calls on the built model.
//! * **1-based axes**: `solve_axis_fixed` takes the axis index 1-based, the
//!   convention of the front-ends this solver serves.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::constraint::Constraint;
use crate::engine::executor::MajorizationExecutor;
use crate::engine::validator::Validator;
use crate::math::stress::weighted_stress;

// Publicly re-exported types
pub use crate::algorithms::constraint::{Anchor, AnchorGrid};
pub use crate::engine::output::{SmacofResult, Termination};
pub use crate::primitives::buffer::SolveBuffer;
pub use crate::primitives::errors::SmacofError;
pub use crate::primitives::matrix::{Coordinates, SquareMatrix};

// ============================================================================
// Standalone Stress Evaluation
// ============================================================================

/// Weighted stress of a configuration against target distances.
///
/// Validates shapes and values, then evaluates the objective without
/// running any iterations. The result is always nonnegative and zero iff
/// every weighted pair realizes its target distance exactly.
pub fn evaluate_stress<T: Float>(
    x: &Coordinates<T>,
    weights: &SquareMatrix<T>,
    targets: &SquareMatrix<T>,
) -> Result<T, SmacofError> {
    Validator::validate_configuration(x)?;
    Validator::validate_matrix(weights, x.n_points(), "weights")?;
    Validator::validate_matrix(targets, x.n_points(), "distances")?;
    Ok(weighted_stress(x, weights, targets))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a stress-majorization model.
#[derive(Debug, Clone)]
pub struct SmacofBuilder<T> {
    /// Iteration budget.
    pub max_iterations: Option<usize>,

    /// Relative convergence tolerance.
    pub tolerance: Option<T>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmacofBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmacofBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            max_iterations: None,
            tolerance: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the iteration budget (default: 500).
    ///
    /// A budget of zero returns initial configurations unchanged.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the relative convergence tolerance (default: 1e-4).
    ///
    /// The loop stops once `(stress_prev - stress_next) / stress_prev` is at
    /// or below this value. Any finite value is accepted.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Fan the per-point update loop across CPU cores.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<SmacofModel<T>, SmacofError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = match self.tolerance {
            Some(tol) => {
                Validator::validate_tolerance(tol)?;
                tol
            }
            None => T::from(1e-4).unwrap_or_else(T::epsilon),
        };

        Ok(SmacofModel {
            max_iterations: self.max_iterations.unwrap_or(500),
            tolerance,
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured stress-majorization model.
///
/// Holds no per-solve state; one model can serve any number of independent
/// solves.
#[derive(Debug, Clone)]
pub struct SmacofModel<T> {
    max_iterations: usize,
    tolerance: T,
    parallel: bool,
}

impl<T: Float + Send + Sync> SmacofModel<T> {
    /// Refine a configuration with every coordinate free.
    ///
    /// Returns the configuration the majorization loop settles on, together
    /// with its stress, the iterations consumed, and the termination state.
    pub fn solve(
        &self,
        initial: &Coordinates<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
    ) -> Result<SmacofResult<T>, SmacofError> {
        Validator::validate_configuration(initial)?;
        self.checked_run(initial, weights, targets, Constraint::None, None)
    }

    /// Refine a configuration while holding one axis fixed.
    ///
    /// `axis` is 1-based; the designated axis of every point keeps the
    /// initial configuration's value, bit for bit, through all iterations.
    pub fn solve_axis_fixed(
        &self,
        initial: &Coordinates<T>,
        axis: usize,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
    ) -> Result<SmacofResult<T>, SmacofError> {
        Validator::validate_configuration(initial)?;
        Validator::validate_axis(axis, initial.dims())?;
        self.checked_run(
            initial,
            weights,
            targets,
            Constraint::FixedAxis(axis - 1),
            None,
        )
    }

    /// Refine a configuration with per-coordinate anchors.
    ///
    /// Every `Pinned` entry of the grid overrides the corresponding output
    /// coordinate exactly; `Free` entries are recomputed each iteration.
    /// The pinned values win over the initial configuration from the first
    /// update onward.
    pub fn solve_anchored(
        &self,
        initial: &Coordinates<T>,
        anchors: &AnchorGrid<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
    ) -> Result<SmacofResult<T>, SmacofError> {
        Validator::validate_configuration(initial)?;
        Validator::validate_anchors(anchors, initial)?;
        self.checked_run(
            initial,
            weights,
            targets,
            Constraint::Anchored(anchors.clone()),
            None,
        )
    }

    /// Like [`solve`](Self::solve), but reusing a caller-owned workspace.
    ///
    /// Useful when many solves of similar size run back to back.
    pub fn solve_with_buffer(
        &self,
        initial: &Coordinates<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
        buffer: &mut SolveBuffer<T>,
    ) -> Result<SmacofResult<T>, SmacofError> {
        Validator::validate_configuration(initial)?;
        self.checked_run(initial, weights, targets, Constraint::None, Some(buffer))
    }

    // ========================================================================
    // Shared Solve Path
    // ========================================================================

    fn checked_run(
        &self,
        initial: &Coordinates<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
        constraint: Constraint<T>,
        buffer: Option<&mut SolveBuffer<T>>,
    ) -> Result<SmacofResult<T>, SmacofError> {
        Validator::validate_matrix(weights, initial.n_points(), "weights")?;
        Validator::validate_matrix(targets, initial.n_points(), "distances")?;
        Validator::validate_row_weight_sums(weights, &constraint, initial)?;

        let executor = MajorizationExecutor::new(self.max_iterations, self.tolerance)
            .parallel(self.parallel);
        Ok(executor.run(initial, weights, targets, &constraint, buffer))
    }
}
