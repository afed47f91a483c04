//! Property-based tests for formula_core using proptest.
//!
//! Covers: purity (bit-identical repeat calls), energy scaling, domain
//! boundaries of the validating formulas, permissive pass-through of the
//! non-validating ones.

use formula_core::constants::{SPEED_OF_LIGHT, ZERO_CURRENT_EPSILON};
use formula_core::formulas::*;
use formula_core::registry::{Formula, ALL_FORMULAS};
use formula_core::FormulaError;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn positive() -> impl Strategy<Value = f64> {
    1.0e-3f64..1.0e6
}

// ── Purity ───────────────────────────────────────────────────────────

proptest! {
    /// Every registered formula returns bit-identical output on repeat calls.
    #[test]
    fn every_formula_is_idempotent(
        idx in 0..ALL_FORMULAS.len(),
        raw in prop::collection::vec(0.5f64..1000.0, 4),
    ) {
        let formula = ALL_FORMULAS[idx];
        // Whole numbers keep the integer-count parameters valid
        let args: Vec<f64> = raw.iter().take(formula.arity()).map(|v| v.round()).collect();

        let first = formula.evaluate(&args);
        let second = formula.evaluate(&args);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.to_bits(), b.to_bits());
            }
            (Err(a), Err(b)) => {
                prop_assert_eq!(a, b);
            }
            (a, b) => {
                prop_assert!(false, "diverged: {:?} vs {:?}", a, b);
            }
        }
    }

    /// Direct calls agree with registry dispatch bit for bit.
    #[test]
    fn registry_matches_direct_calls(a in finite(), b in finite(), c in finite()) {
        prop_assert_eq!(Formula::Distance.evaluate(&[a, b, c]).unwrap().to_bits(), distance(a, b, c).to_bits());
        prop_assert_eq!(Formula::Force.evaluate(&[a, b]).unwrap().to_bits(), force(a, b).to_bits());
        prop_assert_eq!(Formula::SpringEnergy.evaluate(&[a, b]).unwrap().to_bits(), spring_energy(a, b).to_bits());
        prop_assert_eq!(Formula::Resistance.evaluate(&[a, b]).unwrap().to_bits(), resistance(a, b).to_bits());
    }
}

// ── Relativity ───────────────────────────────────────────────────────

proptest! {
    /// E = m·c² within 1e-6 relative for non-negative mass.
    #[test]
    fn energy_matches_mc_squared(m in 0.0f64..1.0e6) {
        let expected = m * 299_792_458.0_f64.powi(2);
        let e = energy(m);
        if expected == 0.0 {
            prop_assert_eq!(e, 0.0);
        } else {
            prop_assert!(((e - expected) / expected).abs() < 1e-6);
        }
    }

    #[test]
    fn energy_uses_speed_of_light_constant(m in positive()) {
        prop_assert_eq!(energy(m), m * SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    }
}

// ── Validation Boundaries ────────────────────────────────────────────

proptest! {
    #[test]
    fn final_velocity_rejects_only_negative_time(v0 in finite(), a in finite(), t in finite()) {
        let result = final_velocity(v0, a, t);
        if t < 0.0 {
            let err = result.unwrap_err();
            let is_invalid_argument = matches!(err, FormulaError::InvalidArgument { .. });
            prop_assert!(is_invalid_argument, "unexpected error: {:?}", err);
            prop_assert_eq!(err.parameter(), Some("t"));
        } else {
            prop_assert_eq!(result.unwrap(), v0 + a * t);
        }
    }

    #[test]
    fn gravitational_force_positive_inputs_give_positive_force(
        m1 in positive(),
        m2 in positive(),
        r in positive(),
    ) {
        let f = gravitational_force(m1, m2, r).unwrap();
        prop_assert!(f > 0.0);
    }

    #[test]
    fn gravitational_force_reports_first_bad_parameter(m1 in -1.0e6f64..=0.0, m2 in -1.0e6f64..=0.0) {
        let err = gravitational_force(m1, m2, -1.0).unwrap_err();
        prop_assert_eq!(err.parameter(), Some("mass1"));
    }

    #[test]
    fn work_is_product_for_non_negative(f in 0.0f64..1.0e6, d in 0.0f64..1.0e6) {
        prop_assert_eq!(work(f, d).unwrap(), f * d);
    }

    #[test]
    fn pendulum_period_grows_with_length(l in positive()) {
        let shorter = pendulum_period(l).unwrap();
        let longer = pendulum_period(l * 4.0).unwrap();
        // Quadrupling the length doubles the period
        prop_assert!((longer / shorter - 2.0).abs() < 1e-9);
    }
}

// ── Permissive Formulas ──────────────────────────────────────────────

proptest! {
    #[test]
    fn fluid_pressure_clamps_negative_height(rho in finite(), h in -1.0e6f64..0.0) {
        prop_assert_eq!(fluid_pressure(rho, h), fluid_pressure(rho, 0.0));
    }

    #[test]
    fn resistance_never_infinite_for_finite_voltage(v in finite()) {
        let r = resistance(v, 0.0);
        prop_assert!(r.is_finite());
        prop_assert_eq!(r, v / ZERO_CURRENT_EPSILON);
    }

    #[test]
    fn circle_area_ignores_radius_sign(r in finite()) {
        prop_assert_eq!(circle_area(r), circle_area(-r));
    }

    #[test]
    fn triangle_area_is_non_negative_for_valid_triangles(
        a in 1.0f64..100.0,
        b in 1.0f64..100.0,
        t in 0.05f64..0.95,
    ) {
        // Third side strictly between |a-b| and a+b
        let lo = (a - b).abs();
        let c = lo + t * ((a + b) - lo);
        prop_assume!(satisfies_triangle_inequality(a, b, c));
        let area = triangle_area(a, b, c);
        prop_assert!(area >= 0.0, "area = {}", area);
    }

    #[test]
    fn compound_interest_single_period_is_simple_growth(p in positive(), r in 0.0f64..1.0) {
        let amount = compound_interest(p, r, 1, 1);
        prop_assert!((amount - p * (1.0 + r)).abs() <= 1e-9 * amount.abs().max(1.0));
    }
}
