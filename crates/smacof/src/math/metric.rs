//! Euclidean metric between coordinate rows.
//!
//! The majorization update divides by pairwise distances, so the metric
//! comes with a floor below which a pair is treated as coincident and its
//! contribution skipped rather than divided through.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Distances at or below this floor are treated as coincident.
///
/// Near-duplicate points would otherwise blow up the `1/distance` term in
/// the majorization update.
pub const DISTANCE_FLOOR: f64 = 1e-5;

/// The distance floor converted to the working float type.
#[inline]
pub fn distance_floor<T: Float>() -> T {
    T::from(DISTANCE_FLOOR).unwrap_or_else(T::epsilon)
}

// ============================================================================
// Metric
// ============================================================================

/// Euclidean distance between two coordinate rows of equal length.
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    let mut sum = T::zero();
    for (&ai, &bi) in a.iter().zip(b.iter()) {
        let delta = ai - bi;
        sum = sum + delta * delta;
    }
    sum.sqrt()
}
