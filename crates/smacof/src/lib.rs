//! # SMACOF — Constrained Stress Majorization for Rust
//!
//! A weighted multidimensional-scaling (MDS) solver: given a matrix of
//! target pairwise distances, a matrix of weights, and an initial layout,
//! it refines the layout to minimize weighted *stress* using the
//! majorization (Guttman-transform) iteration — optionally holding one
//! coordinate axis, or an arbitrary set of per-point coordinates, fixed.
//!
//! ## What is stress majorization?
//!
//! Stress is the weighted sum of squared differences between the realized
//! and target pairwise distances of a point configuration. Majorization
//! minimizes it by repeatedly replacing the objective with a quadratic
//! surrogate whose minimizer has a closed form: each point moves to a
//! weighted average of the positions its neighbors' target distances imply.
//! The iteration is a local-descent heuristic; it converges to a stationary
//! configuration, not a certified global optimum.
//!
//! ## Quick Start
//!
//! ```rust
//! use smacof::prelude::*;
//!
//! // A slightly squashed triangle that should become equilateral.
//! let y = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.8, 0.4]]);
//!
//! // Target distances: every pair at distance 1.
//! let d = SquareMatrix::from_flat(
//!     vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
//!     3,
//! )?;
//!
//! // Uniform weights off the diagonal.
//! let w = SquareMatrix::constant_off_diagonal(3, 1.0);
//!
//! let model = Smacof::new()
//!     .max_iterations(200)
//!     .tolerance(1e-6)
//!     .build()?;
//!
//! let result = model.solve(&y, &w, &d)?;
//! println!("{}", result);
//! # Result::<(), SmacofError>::Ok(())
//! ```
//!
//! ## Constrained solves
//!
//! Two constraint regimes are available beyond the unconstrained solve:
//!
//! * **Axis-fixed** — one global axis (1-based index) is held at the initial
//!   configuration's values for every point; the remaining axes are free:
//!
//! ```rust
//! use smacof::prelude::*;
//! # let y = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.8, 0.4]]);
//! # let d = SquareMatrix::constant_off_diagonal(3, 1.0);
//! # let w = SquareMatrix::constant_off_diagonal(3, 1.0);
//!
//! let model = Smacof::new().build()?;
//! let result = model.solve_axis_fixed(&y, 2, &w, &d)?;
//! // Axis 2 of the output is bit-for-bit the initial axis 2.
//! # Result::<(), SmacofError>::Ok(())
//! ```
//!
//! * **Anchored** — every coordinate is individually either pinned to a
//!   concrete value or marked free:
//!
//! ```rust
//! use smacof::prelude::*;
//! # let y = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.8, 0.4]]);
//! # let d = SquareMatrix::constant_off_diagonal(3, 1.0);
//! # let w = SquareMatrix::constant_off_diagonal(3, 1.0);
//!
//! // Pin the first point entirely; let everything else float.
//! let anchors = AnchorGrid::from_entries(
//!     vec![Pinned(0.0), Pinned(0.0), Free, Free, Free, Free],
//!     2,
//! )?;
//!
//! let model = Smacof::new().build()?;
//! let result = model.solve_anchored(&y, &anchors, &w, &d)?;
//! # Result::<(), SmacofError>::Ok(())
//! ```
//!
//! ## Evaluating stress directly
//!
//! ```rust
//! use smacof::prelude::*;
//! # let x = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
//! # let d = SquareMatrix::constant_off_diagonal(2, 1.0);
//! # let w = SquareMatrix::constant_off_diagonal(2, 1.0);
//!
//! let s = evaluate_stress(&x, &w, &d)?;
//! assert!(s >= 0.0);
//! # Result::<(), SmacofError>::Ok(())
//! ```
//!
//! ## Result and error handling
//!
//! Solves return `Result<SmacofResult<T>, SmacofError>`. The result carries
//! the final coordinates, the final stress, the number of iterations
//! consumed, and whether the loop [`Converged`](prelude::Termination) or
//! exhausted its iteration budget. The `?` operator is idiomatic:
//!
//! ```rust
//! use smacof::prelude::*;
//! # let y = Coordinates::from_rows(&[[0.0, 0.0], [1.0, 0.0]]);
//! # let d = SquareMatrix::constant_off_diagonal(2, 1.0);
//! # let w = SquareMatrix::constant_off_diagonal(2, 1.0);
//!
//! let model = Smacof::new().build()?;
//! match model.solve(&y, &w, &d) {
//!     Ok(result) => println!("stress {} after {} iterations", result.stress, result.iterations_used),
//!     Err(e) => eprintln!("solve failed: {}", e),
//! }
//! # Result::<(), SmacofError>::Ok(())
//! ```
//!
//! ## Minimal usage (no_std / embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smacof = { version = "0.1", default-features = false }
//! ```
//!
//! Use `f32` coordinates and small configurations to keep the O(n²) distance
//! loops cheap on constrained targets.
//!
//! ## References
//!
//! - de Leeuw, J. (1977). "Applications of Convex Analysis to
//!   Multidimensional Scaling"
//! - Gansner, E. R., Koren, Y., North, S. (2004). "Graph Drawing by Stress
//!   Majorization"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - constraint policies and the majorization update.
mod algorithms;

// Layer 4: Engine - orchestration, validation, and output types.
mod engine;

// High-level fluent API for stress-majorization solves.
mod api;

// Standard SMACOF prelude.
pub mod prelude {
    pub use crate::algorithms::constraint::{
        Anchor,
        Anchor::{Free, Pinned},
        AnchorGrid,
    };
    pub use crate::api::{
        evaluate_stress, SmacofBuilder as Smacof, SmacofError, SmacofModel, SmacofResult,
    };
    pub use crate::primitives::buffer::SolveBuffer;
    pub use crate::engine::output::{
        Termination,
        Termination::{Converged, Exhausted},
    };
    pub use crate::primitives::matrix::{Coordinates, SquareMatrix};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
