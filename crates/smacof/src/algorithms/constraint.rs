//! Constraint policies for the majorization update.
//!
//! ## Purpose
//!
//! This module decides, per point and per axis, whether a coordinate is
//! recomputed by the majorization update or pinned to a prescribed value.
//! Three mutually exclusive regimes exist: fully unconstrained, one global
//! axis fixed to the initial configuration, and per-entry anchoring.
//!
//! ## Design notes
//!
//! * **Tagged anchors**: A coordinate is `Pinned(value)` or `Free` — an
//!   explicit tag, never a NaN sentinel, so pinning cannot be confused with
//!   a genuine NaN produced by degenerate arithmetic elsewhere.
//! * **Per-axis predicate**: The update asks `is_free(point, axis)` instead
//!   of branching on dimension-specific code paths, which is what lets one
//!   code path serve 2D and 3D alike.
//! * **Zero-based internally**: `FixedAxis` stores a 0-based axis index; the
//!   public API converts from the 1-based convention it exposes.
//!
//! ## Invariants
//!
//! * An `AnchorGrid` has exactly one entry per coordinate of the
//!   configuration it constrains (validated at the API boundary).
//! * Pinned values win over the initial configuration from the first update
//!   onward.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SmacofError;
use crate::primitives::matrix::Coordinates;

// ============================================================================
// Anchors
// ============================================================================

/// One coordinate's constraint state: pinned to a value, or free to move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor<T> {
    /// The coordinate is recomputed by the majorization update.
    Free,

    /// The coordinate is held at this value every iteration.
    Pinned(T),
}

impl<T> Anchor<T> {
    /// Whether this entry leaves the coordinate free to move.
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self, Anchor::Free)
    }
}

/// An n×d grid of per-coordinate anchors, row-major like [`Coordinates`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorGrid<T> {
    entries: Vec<Anchor<T>>,
    dims: usize,
}

impl<T> AnchorGrid<T> {
    /// Create a grid from flat row-major entries.
    ///
    /// Fails if the entry count is not a multiple of `dims`, or `dims` is 0.
    pub fn from_entries(entries: Vec<Anchor<T>>, dims: usize) -> Result<Self, SmacofError> {
        if dims == 0 || entries.len() % dims != 0 {
            return Err(SmacofError::RaggedShape {
                len: entries.len(),
                dims,
            });
        }
        Ok(Self { entries, dims })
    }

    /// A grid of the given shape with every coordinate free.
    pub fn all_free(n: usize, dims: usize) -> Self
    where
        T: Copy,
    {
        Self {
            entries: vec![Anchor::Free; n * dims],
            dims,
        }
    }

    /// Number of points (rows).
    #[inline]
    pub fn n_points(&self) -> usize {
        self.entries.len() / self.dims
    }

    /// Number of spatial dimensions (columns).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// The anchor for point `i` on `axis` (0-based).
    #[inline]
    pub fn get(&self, i: usize, axis: usize) -> &Anchor<T> {
        &self.entries[i * self.dims + axis]
    }
}

// ============================================================================
// Constraint Policy
// ============================================================================

/// The constraint regime a solve runs under.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint<T> {
    /// Every coordinate of every point is free.
    None,

    /// One global axis (0-based) is held at the initial configuration's
    /// values for all points; all other axes are free.
    FixedAxis(usize),

    /// Each coordinate is individually pinned or free per the grid.
    Anchored(AnchorGrid<T>),
}

impl<T: Copy> Constraint<T> {
    /// Whether the coordinate of `point` on `axis` is recomputed.
    #[inline]
    pub fn is_free(&self, point: usize, axis: usize) -> bool {
        match self {
            Constraint::None => true,
            Constraint::FixedAxis(fixed) => axis != *fixed,
            Constraint::Anchored(grid) => grid.get(point, axis).is_free(),
        }
    }

    /// The value a pinned coordinate is held at, if this coordinate is
    /// pinned.
    ///
    /// Under `FixedAxis` the value comes from the configuration at solve
    /// start; under `Anchored` it comes from the grid itself.
    #[inline]
    pub fn pinned(&self, initial: &Coordinates<T>, point: usize, axis: usize) -> Option<T> {
        match self {
            Constraint::None => None,
            Constraint::FixedAxis(fixed) => {
                (axis == *fixed).then(|| initial.get(point, axis))
            }
            Constraint::Anchored(grid) => match grid.get(point, axis) {
                Anchor::Pinned(value) => Some(*value),
                Anchor::Free => None,
            },
        }
    }

    /// Whether `point` has at least one free axis.
    ///
    /// Points with no free axis never divide by their weight-row sum, so
    /// the positive-row-sum requirement does not apply to them.
    #[inline]
    pub fn point_has_free_axis(&self, point: usize, dims: usize) -> bool {
        (0..dims).any(|axis| self.is_free(point, axis))
    }
}
