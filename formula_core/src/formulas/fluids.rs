//! # Fluids and Waves
//!
//! Hydrostatic pressure and the small-angle simple pendulum. Both use the fixed
//! surface gravity [`STANDARD_GRAVITY`] (g = 9.81 m/s²).

use crate::constants::{PI, STANDARD_GRAVITY};
use crate::errors::{require_positive, FormulaResult};

/// Gauge pressure at depth `height` below the surface of a fluid
///
/// ```text
///   ~~~~~~~~~~~~~~~~  surface (P = 0)
///        │
///        │ h
///        ↓
///        ●  P = ρ g h
/// ```
///
/// # Formula
/// P = ρ·g·h
///
/// # Arguments
/// * `density` - Fluid density ρ (kg/m³). Not validated.
/// * `height` - Depth h (m). Negative depths are clamped to zero rather than
///   rejected, so a point above the surface reads zero pressure.
#[inline]
pub fn fluid_pressure(density: f64, height: f64) -> f64 {
    let height = if height < 0.0 {
        tracing::debug!(height, "negative height clamped to zero");
        0.0
    } else {
        height
    };
    density * STANDARD_GRAVITY * height
}

/// Period of a simple pendulum (small-angle approximation)
///
/// # Formula
/// T = 2π·√(L/g)
///
/// # Errors
/// `InvalidArgument` on `length` if it is zero or negative.
///
/// # Example
/// ```rust
/// use formula_core::formulas::pendulum_period;
///
/// // A "seconds pendulum" is just under a metre long
/// let t = pendulum_period(0.994).unwrap();
/// assert!((t - 2.0).abs() < 0.001);
/// ```
#[inline]
pub fn pendulum_period(length: f64) -> FormulaResult<f64> {
    require_positive("length", length)?;
    Ok(2.0 * PI * (length / STANDARD_GRAVITY).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fluid_pressure_water_column() {
        // 1000 kg/m³ water, 10 m down: 1000 * 9.81 * 10 = 98100 Pa
        assert!(approx_eq(fluid_pressure(1000.0, 10.0), 98_100.0));
    }

    #[test]
    fn test_fluid_pressure_clamps_negative_height() {
        assert_eq!(fluid_pressure(1000.0, -5.0), 0.0);
        assert_eq!(fluid_pressure(1000.0, -5.0), fluid_pressure(1000.0, 0.0));
    }

    #[test]
    fn test_fluid_pressure_does_not_validate_density() {
        assert!(approx_eq(fluid_pressure(-1.0, 1.0), -9.81));
    }

    #[test]
    fn test_pendulum_period_length_equal_to_g() {
        // L = g makes the root 1, so T = 2π
        let t = pendulum_period(STANDARD_GRAVITY).unwrap();
        assert!(approx_eq(t, 2.0 * PI), "T = {}", t);
    }

    #[test]
    fn test_pendulum_period_rejects_non_positive_length() {
        assert_eq!(pendulum_period(0.0).unwrap_err().parameter(), Some("length"));
        assert_eq!(pendulum_period(-2.0).unwrap_err().parameter(), Some("length"));
    }
}
