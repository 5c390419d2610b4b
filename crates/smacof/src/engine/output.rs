//! Output types and result structures for solves.
//!
//! ## Purpose
//!
//! This module defines the `SmacofResult` struct which encapsulates the
//! outcome of a majorization solve: the final configuration, the final
//! stress, iterations consumed, and how the loop terminated.
//!
//! ## Design notes
//!
//! * **Terminal states**: The loop ends either `Converged` (the relative
//!   stress improvement fell to the tolerance) or `Exhausted` (iteration
//!   budget used up). Exhaustion is not an error; the best configuration
//!   reached is returned silently, and callers that care can inspect
//!   `termination` and `iterations_used`.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `stress` is the stress of `coordinates` (recomputed nowhere else).
//! * `iterations_used` counts completed update steps, so it is 0 when the
//!   iteration budget was 0 and at most the configured maximum.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Coordinates;

// ============================================================================
// Termination
// ============================================================================

/// How the majorization loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The relative stress improvement fell to the tolerance.
    ///
    /// A stress *increase* also lands here: it makes the relative
    /// improvement negative, which satisfies any nonnegative tolerance.
    /// The two cases are indistinguishable by design.
    Converged,

    /// The iteration budget was consumed without meeting the tolerance.
    Exhausted,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a majorization solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SmacofResult<T> {
    /// The final configuration.
    pub coordinates: Coordinates<T>,

    /// Weighted stress of the final configuration.
    pub stress: T,

    /// Number of update steps actually performed.
    pub iterations_used: usize,

    /// How the loop ended.
    pub termination: Termination,
}

impl<T: Float> SmacofResult<T> {
    /// Whether the loop met its tolerance test.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmacofResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Points:      {}", self.coordinates.n_points())?;
        writeln!(f, "  Dimensions:  {}", self.coordinates.dims())?;
        writeln!(f, "  Stress:      {}", self.stress)?;
        writeln!(f, "  Iterations:  {}", self.iterations_used)?;
        writeln!(
            f,
            "  Termination: {}",
            match self.termination {
                Termination::Converged => "Converged",
                Termination::Exhausted => "Exhausted",
            }
        )?;

        writeln!(f)?;
        writeln!(f, "Coordinates:")?;
        let labels = ["X", "Y", "Z"];
        write!(f, "  ")?;
        for axis in 0..self.coordinates.dims() {
            write!(f, "{:>12}", labels.get(axis).unwrap_or(&"?"))?;
        }
        writeln!(f)?;
        for i in 0..self.coordinates.n_points() {
            write!(f, "  ")?;
            for &value in self.coordinates.row(i) {
                write!(f, "{:>12.5}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
