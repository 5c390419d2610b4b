//! Error types for SMACOF operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running a stress-majorization solve, covering input validation, parameter
//! constraints, and constraint-specification mismatches.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected sizes).
//! * **Deferred**: Builder misconfiguration is caught and stored, then surfaced by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape validation**: Non-square matrices, ragged coordinate data, anchor grids of the wrong shape.
//! 2. **Value validation**: Non-finite entries, negative weights or distances, asymmetric matrices.
//! 3. **Constraint validation**: Axis indices out of range, free points with zero total weight.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for SMACOF operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmacofError {
    /// The initial configuration contains no points.
    EmptyConfiguration,

    /// Configurations must have 2 or 3 spatial dimensions.
    UnsupportedDimension(usize),

    /// Flat data length is not a multiple of the dimension count.
    RaggedShape {
        /// Length of the flat data provided.
        len: usize,
        /// Dimension count the data was declared with.
        dims: usize,
    },

    /// Flat data length does not match the declared square size.
    NonSquareMatrix {
        /// Length of the flat data provided.
        len: usize,
        /// Declared side length.
        n: usize,
    },

    /// A matrix does not match the configuration's point count.
    MatrixSizeMismatch {
        /// Which matrix ("weights" or "distances").
        name: &'static str,
        /// Side length of the matrix provided.
        got: usize,
        /// Expected side length (number of points).
        expected: usize,
    },

    /// A matrix that must be symmetric is not.
    AsymmetricMatrix {
        /// Which matrix ("weights" or "distances").
        name: &'static str,
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        col: usize,
    },

    /// A matrix entry that must be nonnegative is negative.
    NegativeEntry {
        /// Which matrix ("weights" or "distances").
        name: &'static str,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The fixed-axis index is outside `1..=dims`.
    InvalidAxis {
        /// The 1-based axis index provided.
        axis: usize,
        /// Number of spatial dimensions in the configuration.
        dims: usize,
    },

    /// The anchor grid's shape differs from the configuration's shape.
    AnchorShapeMismatch {
        /// Points in the anchor grid.
        got_points: usize,
        /// Dimensions in the anchor grid.
        got_dims: usize,
        /// Points in the configuration.
        expected_points: usize,
        /// Dimensions in the configuration.
        expected_dims: usize,
    },

    /// A point with at least one free coordinate has a nonpositive weight-row
    /// sum, which would make the majorization normalizer divide by zero.
    ZeroWeightRow {
        /// Index of the offending point.
        point: usize,
    },

    /// Convergence tolerance must be finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmacofError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyConfiguration => write!(f, "Configuration contains no points"),
            Self::UnsupportedDimension(dims) => {
                write!(f, "Unsupported dimension count: {dims} (must be 2 or 3)")
            }
            Self::RaggedShape { len, dims } => {
                write!(
                    f,
                    "Flat data of length {len} is not a multiple of {dims} dimensions"
                )
            }
            Self::NonSquareMatrix { len, n } => {
                write!(
                    f,
                    "Flat data of length {len} does not form a {n}x{n} matrix"
                )
            }
            Self::MatrixSizeMismatch {
                name,
                got,
                expected,
            } => {
                write!(
                    f,
                    "Size mismatch: {name} matrix is {got}x{got}, configuration has {expected} points"
                )
            }
            Self::AsymmetricMatrix { name, row, col } => {
                write!(
                    f,
                    "The {name} matrix is not symmetric at ({row}, {col})"
                )
            }
            Self::NegativeEntry { name, row, col } => {
                write!(f, "Negative {name} entry at ({row}, {col})")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidAxis { axis, dims } => {
                write!(
                    f,
                    "Invalid fixed axis: {axis} (must be between 1 and {dims})"
                )
            }
            Self::AnchorShapeMismatch {
                got_points,
                got_dims,
                expected_points,
                expected_dims,
            } => {
                write!(
                    f,
                    "Anchor grid is {got_points}x{got_dims}, configuration is {expected_points}x{expected_dims}"
                )
            }
            Self::ZeroWeightRow { point } => {
                write!(
                    f,
                    "Point {point} has free coordinates but a zero weight-row sum"
                )
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmacofError {}
