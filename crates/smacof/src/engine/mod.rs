//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the solve: it validates inputs at the API
//! boundary, drives the majorization fixed-point loop with its stopping
//! rule, and packages results for callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The majorization fixed-point loop.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for solves.
pub mod output;
