//! Execution engine for majorization solves.
//!
//! ## Purpose
//!
//! This module provides the executor that drives the majorization
//! fixed-point loop: it copies the caller's initial configuration, computes
//! the weight-row sums once, then alternates Guttman update steps with
//! stress evaluations until the stopping rule fires or the iteration budget
//! runs out.
//!
//! ## Design notes
//!
//! * **Stateless across solves**: The executor is a value object holding the
//!   loop parameters; all per-solve state lives in the workspace buffer.
//! * **Double-buffering**: The current and next configurations are swapped
//!   with `core::mem::swap` between iterations, never copied.
//! * **Stopping rule**: The loop stops when the *relative* stress
//!   improvement `(prev - next) / prev` is at or below the tolerance. A
//!   stress increase makes that quantity negative, which satisfies any
//!   nonnegative tolerance — the loop then reports `Converged` and returns
//!   the increased-stress configuration. This is intentional, preserved
//!   behavior; there is no separate divergence detector.
//! * **Buffer reuse**: Callers may pass a workspace to amortize allocations
//!   across solves; otherwise one is created internally.
//!
//! ## Invariants
//!
//! * Inputs are validated at the API boundary before `run` is called.
//! * The caller's initial configuration is copied, never aliased or
//!   mutated.
//! * `iterations_used` in the output counts completed update steps.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not decide the constraint regime (handled by the API).
//! * This module does not detect wall-clock timeouts; the iteration budget
//!   is the only brake.

// External dependencies
use core::mem::swap;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::constraint::Constraint;
use crate::algorithms::guttman::guttman_step;
#[cfg(feature = "parallel")]
use crate::algorithms::guttman::guttman_step_parallel;
use crate::engine::output::{SmacofResult, Termination};
use crate::math::stress::weighted_stress;
pub use crate::primitives::buffer::SolveBuffer;
use crate::primitives::matrix::{Coordinates, SquareMatrix};

// ============================================================================
// Executor
// ============================================================================

/// Drives the majorization fixed-point loop for one constraint regime.
#[derive(Debug, Clone)]
pub struct MajorizationExecutor<T> {
    /// Iteration budget. Zero returns the initial configuration unchanged.
    pub max_iterations: usize,

    /// Relative-improvement threshold for the stopping rule.
    pub tolerance: T,

    /// Fan the per-point update across cores (requires the `parallel`
    /// feature; ignored otherwise).
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float + Send + Sync> MajorizationExecutor<T> {
    /// Create an executor with the given loop parameters.
    pub fn new(max_iterations: usize, tolerance: T) -> Self {
        Self {
            max_iterations,
            tolerance,
            parallel: false,
        }
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run the solve to completion and return the final configuration.
    ///
    /// # Special cases
    ///
    /// * **Fewer than 2 points**: There are no pairs to move against; the
    ///   initial configuration is returned unchanged with zero iterations.
    /// * **Zero iteration budget**: The initial configuration is returned
    ///   unchanged, reported as `Exhausted`.
    pub fn run(
        &self,
        initial: &Coordinates<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
        constraint: &Constraint<T>,
        buffer: Option<&mut SolveBuffer<T>>,
    ) -> SmacofResult<T> {
        let n = initial.n_points();
        let dims = initial.dims();

        // A single point (or none) has no pairwise stress to reduce.
        if n < 2 {
            return SmacofResult {
                coordinates: initial.clone(),
                stress: T::zero(),
                iterations_used: 0,
                termination: Termination::Converged,
            };
        }

        let mut internal;
        let buf = if let Some(b) = buffer {
            b.prepare(n, dims);
            b
        } else {
            internal = SolveBuffer::with_capacity(n, dims);
            internal.prepare(n, dims);
            &mut internal
        };

        buf.current.copy_from(initial);

        // The majorization normalizers, computed once per solve.
        for (i, sum) in buf.row_weight_sums.iter_mut().enumerate() {
            let mut acc = T::zero();
            for &w in weights.row(i) {
                acc = acc + w;
            }
            *sum = acc;
        }

        let mut stress_prev = weighted_stress(&buf.current, weights, targets);
        let mut stress_final = stress_prev;
        let mut iterations = 0;
        let mut termination = Termination::Exhausted;

        for k in 0..self.max_iterations {
            self.step(
                &buf.current,
                initial,
                weights,
                targets,
                &buf.row_weight_sums,
                constraint,
                &mut buf.next,
            );
            let stress_next = weighted_stress(&buf.next, weights, targets);

            // The update just written becomes the current iterate either
            // way: on convergence it is the configuration returned, on
            // continuation it is the one the next step reads.
            swap(&mut buf.current, &mut buf.next);
            iterations = k + 1;
            stress_final = stress_next;

            let improvement = (stress_prev - stress_next) / stress_prev;
            if improvement <= self.tolerance {
                termination = Termination::Converged;
                break;
            }
            stress_prev = stress_next;
        }

        SmacofResult {
            coordinates: buf.current.clone(),
            stress: stress_final,
            iterations_used: iterations,
            termination,
        }
    }

    // ========================================================================
    // Update Dispatch
    // ========================================================================

    /// Perform one update step, parallel when configured and compiled in.
    #[allow(clippy::too_many_arguments)]
    fn step(
        &self,
        current: &Coordinates<T>,
        initial: &Coordinates<T>,
        weights: &SquareMatrix<T>,
        targets: &SquareMatrix<T>,
        row_weight_sums: &[T],
        constraint: &Constraint<T>,
        next: &mut Coordinates<T>,
    ) {
        #[cfg(feature = "parallel")]
        if self.parallel {
            guttman_step_parallel(
                current,
                initial,
                weights,
                targets,
                row_weight_sums,
                constraint,
                next,
            );
            return;
        }

        guttman_step(
            current,
            initial,
            weights,
            targets,
            row_weight_sums,
            constraint,
            next,
        );
    }
}
