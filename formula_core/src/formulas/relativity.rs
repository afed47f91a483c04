//! # Special Relativity
//!
//! Rest-mass energy equivalence.

use crate::constants::SPEED_OF_LIGHT;

/// Rest energy of a mass
///
/// # Formula
/// E = m·c²
///
/// where `c` is [`SPEED_OF_LIGHT`]. Negative mass is not rejected; the result
/// is simply negative.
///
/// # Example
/// ```rust
/// use formula_core::formulas::energy;
///
/// // One gram is roughly 90 TJ
/// let e = energy(0.001);
/// assert!((e / 8.987_551_787_368_176e13 - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn energy(mass: f64) -> f64 {
    mass * SPEED_OF_LIGHT * SPEED_OF_LIGHT
}
