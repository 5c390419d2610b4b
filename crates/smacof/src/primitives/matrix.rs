//! Dense storage for point configurations and square matrices.
//!
//! ## Purpose
//!
//! This module provides the two dense containers the solver operates on: an
//! n×d coordinate configuration and an n×n square matrix (target distances,
//! weights). Both store their entries in a flat row-major `Vec` so that rows
//! are contiguous slices and whole-buffer copies are cheap.
//!
//! ## Design notes
//!
//! * **Row-major**: Row i of a configuration is `data[i*dims .. (i+1)*dims]`.
//! * **Shape-checked**: Flat constructors reject data that does not tile the
//!   declared shape; nothing else is validated here.
//! * **Owned**: Constructors take ownership or copy; the solver never aliases
//!   caller memory.
//!
//! ## Non-goals
//!
//! * This module does not validate symmetry, signs, or finiteness
//!   (handled by the engine's validator).
//! * This module does not provide linear-algebra operations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::SmacofError;

// ============================================================================
// Coordinates
// ============================================================================

/// An n×d point configuration in row-major flat storage.
///
/// Row i holds the d coordinates of point i. The solver supports d ∈ {2, 3};
/// the container itself only requires d ≥ 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates<T> {
    data: Vec<T>,
    dims: usize,
}

impl<T> Coordinates<T> {
    /// Create a configuration from flat row-major data.
    ///
    /// Fails if `data.len()` is not a multiple of `dims`, or if `dims` is 0.
    pub fn from_flat(data: Vec<T>, dims: usize) -> Result<Self, SmacofError> {
        if dims == 0 || data.len() % dims != 0 {
            return Err(SmacofError::RaggedShape {
                len: data.len(),
                dims,
            });
        }
        Ok(Self { data, dims })
    }

    /// Create a configuration from fixed-size rows.
    pub fn from_rows<const D: usize>(rows: &[[T; D]]) -> Self
    where
        T: Copy,
    {
        let mut data = Vec::with_capacity(rows.len() * D);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self { data, dims: D }
    }

    /// Create an all-zero configuration of the given shape.
    pub fn zeros(n: usize, dims: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            data: vec![T::zero(); n * dims],
            dims,
        }
    }

    /// Number of points (rows).
    #[inline]
    pub fn n_points(&self) -> usize {
        self.data.len() / self.dims
    }

    /// Number of spatial dimensions (columns).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Whether the configuration holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coordinates of point `i` as a slice of length `dims`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dims..(i + 1) * self.dims]
    }

    /// Mutable coordinates of point `i`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let dims = self.dims;
        &mut self.data[i * dims..(i + 1) * dims]
    }

    /// Single coordinate of point `i` on `axis` (0-based).
    #[inline]
    pub fn get(&self, i: usize, axis: usize) -> T
    where
        T: Copy,
    {
        self.data[i * self.dims + axis]
    }

    /// The flat row-major backing data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The flat row-major backing data, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Reshape to n×dims and overwrite every entry with `src`'s entries.
    ///
    /// Reuses the existing allocation when possible.
    pub(crate) fn copy_from(&mut self, src: &Coordinates<T>)
    where
        T: Copy,
    {
        self.dims = src.dims;
        self.data.clear();
        self.data.extend_from_slice(&src.data);
    }

    /// Reshape to n×dims, filling with zeros and reusing the allocation.
    pub(crate) fn reset(&mut self, n: usize, dims: usize)
    where
        T: Zero + Clone,
    {
        self.dims = dims;
        self.data.clear();
        self.data.resize(n * dims, T::zero());
    }
}

// ============================================================================
// SquareMatrix
// ============================================================================

/// An n×n matrix in row-major flat storage.
///
/// Used for the target-distance and weight matrices. Entries are read but
/// never written during a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    n: usize,
}

impl<T> SquareMatrix<T> {
    /// Create a matrix from flat row-major data.
    ///
    /// Fails if `data.len() != n * n`.
    pub fn from_flat(data: Vec<T>, n: usize) -> Result<Self, SmacofError> {
        if data.len() != n * n {
            return Err(SmacofError::NonSquareMatrix {
                len: data.len(),
                n,
            });
        }
        Ok(Self { data, n })
    }

    /// Create a matrix with `value` everywhere off the diagonal and zero on it.
    pub fn constant_off_diagonal(n: usize, value: T) -> Self
    where
        T: Zero + Copy,
    {
        let mut data = vec![value; n * n];
        for i in 0..n {
            data[i * n + i] = T::zero();
        }
        Self { data, n }
    }

    /// Side length.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry at (`i`, `j`).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T
    where
        T: Copy,
    {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice of length n.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// The flat row-major backing data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
