//! Layer 3: Algorithms
//!
//! This layer implements the core logic of the solver: the constraint
//! policies that decide which coordinates are free, and the Guttman
//! (majorization) update step. It is orchestrated by the engine layer.

// Constraint policies: which coordinates move and which are pinned.
pub mod constraint;

// The majorization (Guttman transform) update step.
pub mod guttman;
