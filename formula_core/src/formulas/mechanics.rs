//! # Classical Mechanics Formulas
//!
//! Kinematics under constant acceleration, Newton's second law, energy, work
//! and universal gravitation.
//!
//! ## Notation
//!
//! - `v0` = Initial velocity
//! - `a` = Acceleration
//! - `t` = Elapsed time
//! - `m` = Mass
//! - `F` = Force
//! - `d` = Displacement
//! - `k` = Spring constant
//! - `x` = Spring displacement from rest length
//! - `G` = Gravitational constant (fixed, see [`GRAVITATIONAL_CONSTANT`])
//!
//! ## Units
//!
//! SI throughout. No conversion is performed: pass metres, seconds, kilograms
//! and newtons and read back metres, m/s, newtons or joules.

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::errors::{require_non_negative, require_positive, FormulaResult};

// =============================================================================
// KINEMATICS
// Straight-line motion with constant acceleration
// =============================================================================

/// Distance travelled under constant acceleration
///
/// # Formula
/// d = v₀·t + ½·a·t²
///
/// No argument is validated. A negative `t` extrapolates backwards in time.
///
/// # Example
/// ```rust
/// use formula_core::formulas::distance;
///
/// // Dropped from rest, 2 s of free fall at 9.8 m/s²
/// let d = distance(0.0, 9.8, 2.0);
/// assert!((d - 19.6).abs() < 1e-9);
/// ```
#[inline]
pub fn distance(v0: f64, a: f64, t: f64) -> f64 {
    v0 * t + (0.5 * a) * (t * t)
}

/// Final velocity after accelerating for `t` seconds
///
/// # Formula
/// v = v₀ + a·t
///
/// # Errors
/// `InvalidArgument` on `t` if `t < 0`.
#[inline]
pub fn final_velocity(v0: f64, a: f64, t: f64) -> FormulaResult<f64> {
    require_non_negative("t", t)?;
    Ok(v0 + a * t)
}

// =============================================================================
// DYNAMICS AND ENERGY
// =============================================================================

/// Newton's second law, F = m·a
#[inline]
pub fn force(mass: f64, acceleration: f64) -> f64 {
    mass * acceleration
}

/// Translational kinetic energy
///
/// # Formula
/// KE = ½·m·v²
#[inline]
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity * velocity
}

/// Work done by a force acting **parallel** to the displacement
///
/// The general formula is W = F·d·cos(θ). This function has no angle
/// parameter: it assumes θ = 0, so cos(θ) = 1.
///
/// # Formula
/// W = F·d
///
/// Resolve an inclined force into its parallel component before calling.
///
/// # Errors
/// `InvalidArgument` on `force` or `displacement` if either is negative.
/// `force` is checked first.
#[inline]
pub fn work(force: f64, displacement: f64) -> FormulaResult<f64> {
    require_non_negative("force", force)?;
    require_non_negative("displacement", displacement)?;
    Ok(force * displacement)
}

/// Elastic potential energy stored in an ideal (Hookean) spring
///
/// # Formula
/// PE = ½·k·x²
///
/// # Arguments
/// * `spring_constant` - the formula's `k` (N/m). The parameter name does not
///   match the symbol; the registry records the binding.
/// * `displacement` - the formula's `x` (m). Compression and extension store
///   the same energy.
///
/// # Example
/// ```rust
/// use formula_core::formulas::spring_energy;
///
/// // k = 200 N/m compressed by 0.1 m
/// let pe = spring_energy(200.0, -0.1);
/// assert!((pe - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn spring_energy(spring_constant: f64, displacement: f64) -> f64 {
    (0.5 * spring_constant) * (displacement * displacement)
}

// =============================================================================
// GRAVITATION
// =============================================================================

/// Newton's law of universal gravitation
///
/// ```text
///    m1 ●←─────── r ───────→● m2
///        F →             ← F
/// ```
///
/// # Formula
/// F = G·m₁·m₂ / r²
///
/// `G` is [`GRAVITATIONAL_CONSTANT`] and cannot be overridden.
///
/// # Errors
/// `InvalidArgument` naming the first of `mass1`, `mass2`, `distance` that is
/// zero or negative.
#[inline]
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64) -> FormulaResult<f64> {
    require_positive("mass1", mass1)?;
    require_positive("mass2", mass2)?;
    require_positive("distance", distance)?;
    Ok(GRAVITATIONAL_CONSTANT * mass1 * mass2 / (distance * distance))
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-12
    }

    #[test]
    fn test_distance_free_fall() {
        // 0.5 * 9.8 * 2^2 = 19.6 m
        let d = distance(0.0, 9.8, 2.0);
        assert!(approx_eq(d, 19.6), "d = {}", d);
    }

    #[test]
    fn test_distance_with_initial_velocity() {
        // 3*4 + 0.5*2*16 = 12 + 16 = 28
        assert!(approx_eq(distance(3.0, 2.0, 4.0), 28.0));
    }

    #[test]
    fn test_distance_groups_half_acceleration_and_time_squared() {
        // (0.5 * 0.3) * (0.7 * 0.7) rounds differently from 0.5 * 0.3 * 0.7 * 0.7
        assert_eq!(distance(0.0, 0.3, 0.7), 0.07349999999999998);
        assert_eq!(distance(2.0, 0.3, 0.7), 2.0 * 0.7 + (0.5 * 0.3) * (0.7 * 0.7));
    }

    #[test]
    fn test_final_velocity() {
        // 9.8 * 2 is an exact doubling, so this holds bit for bit
        assert_eq!(final_velocity(0.0, 9.8, 2.0).unwrap(), 19.6);
    }

    #[test]
    fn test_final_velocity_zero_time_returns_v0() {
        assert_eq!(final_velocity(7.5, 100.0, 0.0).unwrap(), 7.5);
    }

    #[test]
    fn test_final_velocity_rejects_negative_time() {
        let err = final_velocity(0.0, 1.0, -1.0).unwrap_err();
        assert!(matches!(err, FormulaError::InvalidArgument { .. }));
        assert_eq!(err.parameter(), Some("t"));
    }

    #[test]
    fn test_force() {
        assert!(approx_eq(force(10.0, 9.81), 98.1));
        assert!(approx_eq(force(2.0, -3.0), -6.0));
    }

    #[test]
    fn test_kinetic_energy() {
        // 0.5 * 2 * 3^2 = 9 J, direction of travel does not matter
        assert!(approx_eq(kinetic_energy(2.0, 3.0), 9.0));
        assert!(approx_eq(kinetic_energy(2.0, -3.0), 9.0));
    }

    #[test]
    fn test_work_parallel_force() {
        assert!(approx_eq(work(10.0, 5.0).unwrap(), 50.0));
        assert_eq!(work(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_work_rejects_negative_inputs() {
        assert_eq!(work(-1.0, 5.0).unwrap_err().parameter(), Some("force"));
        assert_eq!(work(1.0, -5.0).unwrap_err().parameter(), Some("displacement"));
        // force is reported first when both are bad
        assert_eq!(work(-1.0, -5.0).unwrap_err().parameter(), Some("force"));
    }

    #[test]
    fn test_spring_energy_binds_spring_constant_to_k() {
        // PE = 0.5 * k * x^2 with k = spring_constant = 50, x = 0.2
        let k = 50.0;
        let x = 0.2;
        assert!(approx_eq(spring_energy(k, x), 0.5 * k * x * x));
        assert!(approx_eq(spring_energy(k, x), 1.0));
    }

    #[test]
    fn test_spring_energy_groups_half_k_and_x_squared() {
        assert_eq!(spring_energy(0.3, 0.7), 0.07349999999999998);
        assert_eq!(spring_energy(0.3, -0.7), spring_energy(0.3, 0.7));
    }

    #[test]
    fn test_gravitational_force_earth_moon() {
        // Earth 5.972e24 kg, Moon 7.348e22 kg, 3.844e8 m apart => ~1.98e20 N
        let f = gravitational_force(5.972e24, 7.348e22, 3.844e8).unwrap();
        assert!((f / 1.98e20 - 1.0).abs() < 0.01, "F = {}", f);
    }

    #[test]
    fn test_gravitational_force_uses_fixed_constant() {
        let f = gravitational_force(1.0, 1.0, 1.0).unwrap();
        assert_eq!(f, GRAVITATIONAL_CONSTANT);
    }

    #[test]
    fn test_gravitational_force_rejects_non_positive() {
        assert_eq!(gravitational_force(0.0, 5.0, 10.0).unwrap_err().parameter(), Some("mass1"));
        assert_eq!(gravitational_force(1.0, -5.0, 10.0).unwrap_err().parameter(), Some("mass2"));
        assert_eq!(gravitational_force(1.0, 5.0, 0.0).unwrap_err().parameter(), Some("distance"));
    }
}
