//! # Electrical Circuits
//!
//! DC power and Ohm's law. There is no AC branch: every calculation assumes a
//! power factor of 1.0.

use crate::constants::ZERO_CURRENT_EPSILON;

/// Power dissipated or delivered in a DC circuit, P = V·I
#[inline]
pub fn electrical_power(voltage: f64, current: f64) -> f64 {
    voltage * current
}

/// Resistance from Ohm's law
///
/// # Formula
/// R = V / I
///
/// A current of exactly zero is not an error. It is replaced by
/// [`ZERO_CURRENT_EPSILON`] (1×10⁻⁶ A), so the result is a large but finite
/// resistance instead of infinity.
///
/// # Example
/// ```rust
/// use formula_core::formulas::resistance;
///
/// let r = resistance(10.0, 0.0);
/// assert!(r.is_finite());
/// assert!((r - 1e7).abs() < 1e-3);
/// ```
#[inline]
pub fn resistance(voltage: f64, current: f64) -> f64 {
    let current = if current == 0.0 {
        tracing::debug!(epsilon = ZERO_CURRENT_EPSILON, "zero current replaced by epsilon");
        ZERO_CURRENT_EPSILON
    } else {
        current
    };
    voltage / current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_electrical_power() {
        assert_eq!(electrical_power(12.0, 2.0), 24.0);
        assert_eq!(electrical_power(-12.0, 2.0), -24.0);
    }

    #[test]
    fn test_resistance_ohms_law() {
        assert_eq!(resistance(10.0, 2.0), 5.0);
        assert_eq!(resistance(-10.0, 2.0), -5.0);
    }

    #[test]
    fn test_resistance_zero_current_is_finite() {
        let r = resistance(10.0, 0.0);
        assert!(r.is_finite(), "R = {}", r);
        assert!((r / 1e7 - 1.0).abs() < 1e-9, "R = {}", r);
    }

    #[test]
    fn test_resistance_negative_zero_current() {
        // -0.0 == 0.0, so the substitution also covers it
        assert_eq!(resistance(10.0, -0.0), resistance(10.0, 0.0));
    }

    #[test]
    fn test_resistance_tiny_current_is_not_substituted() {
        let r = resistance(1.0, 1e-9);
        assert!((r / 1e9 - 1.0).abs() < 1e-12, "R = {}", r);
    }
}
