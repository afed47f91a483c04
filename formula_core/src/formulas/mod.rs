//! # Formula Functions
//!
//! One pure function per formula, grouped by physical domain. Every function is
//! a leaf: none calls another, none holds state, and identical inputs always
//! give bit-identical outputs.
//!
//! ## Modules
//!
//! - [`mechanics`] - Kinematics, force, energy, work, gravitation
//! - [`fluids`] - Hydrostatic pressure, pendulum period
//! - [`electricity`] - DC power, Ohm's law
//! - [`geometry`] - Circle area, Heron's formula
//! - [`finance`] - Simple and compound interest
//! - [`relativity`] - Mass-energy equivalence
//!
//! ## Validation
//!
//! Functions with a domain constraint return
//! [`FormulaResult`](crate::errors::FormulaResult) and fail with
//! `InvalidArgument`:
//!
//! | Function | Constraint |
//! |----------|------------|
//! | [`final_velocity`] | t ≥ 0 |
//! | [`work`] | force ≥ 0, displacement ≥ 0 |
//! | [`gravitational_force`] | mass1, mass2, distance > 0 |
//! | [`pendulum_period`] | length > 0 |
//!
//! All others return a bare `f64` and accept any input, including values that
//! make no physical sense.

pub mod electricity;
pub mod finance;
pub mod fluids;
pub mod geometry;
pub mod mechanics;
pub mod relativity;

pub use electricity::{electrical_power, resistance};
pub use finance::{compound_interest, simple_interest};
pub use fluids::{fluid_pressure, pendulum_period};
pub use geometry::{circle_area, satisfies_triangle_inequality, triangle_area};
pub use mechanics::{
    distance,
    final_velocity,
    force,
    gravitational_force,
    kinetic_energy,
    spring_energy,
    work,
};
pub use relativity::energy;
