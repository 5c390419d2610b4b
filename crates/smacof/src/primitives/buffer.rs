//! Workspace buffers for majorization solves.
//!
//! ## Purpose
//!
//! This module provides the reusable workspace that one solve operates in:
//! the double-buffered pair of coordinate configurations and the per-point
//! weight-row sums. Allocating the workspace once and handing it to repeated
//! solves avoids reallocating three buffers per call.
//!
//! ## Design notes
//!
//! * **Double-buffering**: The update for point i reads every other point's
//!   position from the *previous* iterate, so the next configuration is
//!   built in a separate buffer and the two are swapped between iterations.
//!   This is a correctness requirement, not an optimization.
//! * **Lazy reshaping**: `prepare` reshapes the buffers for the incoming
//!   problem size while reusing existing allocations.
//!
//! ## Non-goals
//!
//! * Thread-local caching (buffers are explicitly passed; parallel callers
//!   use one workspace per concurrent solve).
//! * Shrinking or reclaiming memory between solves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::matrix::Coordinates;

// ============================================================================
// SolveBuffer - Working Memory for the Majorization Executor
// ============================================================================

/// Working memory for one majorization solve.
#[derive(Debug, Clone)]
pub struct SolveBuffer<T> {
    /// Configuration at the current iterate.
    pub current: Coordinates<T>,

    /// Configuration being built by the update pass.
    pub next: Coordinates<T>,

    /// Per-point weight-row sums, the majorization normalizers.
    pub row_weight_sums: Vec<T>,
}

impl<T: Zero + Clone> Default for SolveBuffer<T> {
    fn default() -> Self {
        Self {
            current: Coordinates::zeros(0, 1),
            next: Coordinates::zeros(0, 1),
            row_weight_sums: Vec::new(),
        }
    }
}

impl<T: Zero + Clone + Copy> SolveBuffer<T> {
    /// Create a workspace pre-shaped for `n` points in `dims` dimensions.
    pub fn with_capacity(n: usize, dims: usize) -> Self {
        Self {
            current: Coordinates::zeros(n, dims),
            next: Coordinates::zeros(n, dims),
            row_weight_sums: vec![T::zero(); n],
        }
    }

    /// Reshape all buffers for a problem of `n` points in `dims` dimensions,
    /// zero-filling them and reusing allocations where possible.
    pub fn prepare(&mut self, n: usize, dims: usize) {
        self.current.reset(n, dims);
        self.next.reset(n, dims);
        self.row_weight_sums.clear();
        self.row_weight_sums.resize(n, T::zero());
    }
}
