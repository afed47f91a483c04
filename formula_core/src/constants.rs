//! # Fixed Constants
//!
//! Physical and numerical constants baked into the formulas. None of these are
//! configurable: callers cannot override G, g or c through any function
//! signature.

/// Speed of light in vacuum (m/s), used in E = m·c²
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian gravitational constant (N·m²/kg²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Standard gravitational acceleration at Earth's surface (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// π
pub const PI: f64 = std::f64::consts::PI;

/// Stand-in divisor for a current of exactly zero in Ohm's law
pub const ZERO_CURRENT_EPSILON: f64 = 1e-6;
