//! # Formula Registry
//!
//! Central registry of every formula in [`crate::formulas`], with metadata
//! describing each symbol and how it reaches the implementation.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe formula identification via the [`Formula`] enum
//! - Name lookup (`"spring_energy"`, `"springEnergy"`, `"spring-energy"`)
//! - Generic evaluation from an argument slice, for JSON and CLI front ends
//! - Symbol bindings: which Rust parameter carries each formula symbol, which
//!   symbols are fixed constants, and which are not supported at all
//!
//! ## Usage
//!
//! ```rust
//! use formula_core::registry::{Formula, VariableRole};
//!
//! let formula: Formula = "springEnergy".parse().unwrap();
//! assert_eq!(formula, Formula::SpringEnergy);
//!
//! // The formula says `k`, the function says `spring_constant`
//! let meta = formula.metadata();
//! let k = meta.variable("k").unwrap();
//! assert_eq!(k.role, VariableRole::Input { parameter: "spring_constant" });
//!
//! let pe = formula.evaluate(&[200.0, 0.1]).unwrap();
//! assert!((pe - 1.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{GRAVITATIONAL_CONSTANT, PI, SPEED_OF_LIGHT, STANDARD_GRAVITY, ZERO_CURRENT_EPSILON};
use crate::errors::{FormulaError, FormulaResult};
use crate::formulas;

// ============================================================================
// Domains
// ============================================================================

/// Physical domain a formula belongs to, used for grouping in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Mechanics,
    FluidsAndWaves,
    Electricity,
    Geometry,
    Finance,
    Relativity,
}

impl Domain {
    /// Display name for the domain
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Mechanics => "Mechanics",
            Domain::FluidsAndWaves => "Fluids & Waves",
            Domain::Electricity => "Electricity",
            Domain::Geometry => "Geometry",
            Domain::Finance => "Finance",
            Domain::Relativity => "Relativity",
        }
    }

    /// Sort order for listings (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            Domain::Mechanics => 1,
            Domain::FluidsAndWaves => 2,
            Domain::Electricity => 3,
            Domain::Geometry => 4,
            Domain::Finance => 5,
            Domain::Relativity => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// How a formula symbol is represented in the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariableRole {
    /// Supplied by the caller through the named function parameter
    Input { parameter: &'static str },
    /// The value the function returns
    Output,
    /// Fixed inside the function body; callers cannot change it
    Constant { value: f64 },
    /// Appears in the general formula but the implementation drops it
    Unsupported,
}

/// Definition of a symbol used in a formula.
#[derive(Debug, Clone, Serialize)]
pub struct Variable {
    /// Symbol as written in the formula (e.g., "k", "v0", "θ")
    pub symbol: &'static str,
    pub role: VariableRole,
    pub description: &'static str,
    /// SI units, or "" for dimensionless quantities
    pub units: &'static str,
}

impl Variable {
    pub const fn input(
        symbol: &'static str,
        parameter: &'static str,
        description: &'static str,
        units: &'static str,
    ) -> Self {
        Self { symbol, role: VariableRole::Input { parameter }, description, units }
    }

    pub const fn output(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, role: VariableRole::Output, description, units }
    }

    pub const fn constant(
        symbol: &'static str,
        value: f64,
        description: &'static str,
        units: &'static str,
    ) -> Self {
        Self { symbol, role: VariableRole::Constant { value }, description, units }
    }

    pub const fn unsupported(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, role: VariableRole::Unsupported, description, units }
    }

    /// The function parameter bound to this symbol, if it is an input
    pub fn parameter(&self) -> Option<&'static str> {
        match self.role {
            VariableRole::Input { parameter } => Some(parameter),
            _ => None,
        }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Spring Potential Energy")
    pub name: &'static str,
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Every symbol of the formula, inputs in call order
    pub variables: Vec<Variable>,
    /// Assumptions or limitations of the implementation
    pub assumptions: Vec<&'static str>,
    pub domain: Domain,
    /// Source module where the implementation lives
    pub source_module: &'static str,
    /// Function name implementing the formula
    pub source_function: &'static str,
}

impl FormulaMetadata {
    /// Look up a variable by its formula symbol
    pub fn variable(&self, symbol: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.symbol == symbol)
    }

    /// Input variables in call order
    pub fn inputs(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|v| v.parameter().is_some())
    }

    /// Units of the returned value
    pub fn output_units(&self) -> &'static str {
        self.variables
            .iter()
            .find(|v| v.role == VariableRole::Output)
            .map(|v| v.units)
            .unwrap_or("")
    }
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every formula exposed by [`crate::formulas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    // Mechanics
    /// d = v0·t + ½·a·t²
    Distance,
    /// v = v0 + a·t
    FinalVelocity,
    /// F = m·a
    Force,
    /// KE = ½·m·v²
    KineticEnergy,
    /// W = F·d (θ = 0)
    Work,
    /// PE = ½·k·x²
    SpringEnergy,
    /// F = G·m1·m2/r²
    GravitationalForce,

    // Fluids & waves
    /// P = ρ·g·h
    FluidPressure,
    /// T = 2π·√(L/g)
    PendulumPeriod,

    // Electricity
    /// P = V·I
    ElectricalPower,
    /// R = V/I
    Resistance,

    // Geometry
    /// A = π·r²
    CircleArea,
    /// Heron's formula
    TriangleArea,

    // Finance
    /// I = P·(r/100)·t
    SimpleInterest,
    /// A = P·(1 + r/n)^(n·t)
    CompoundInterest,

    // Relativity
    /// E = m·c²
    Energy,
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::Distance,
    Formula::FinalVelocity,
    Formula::Force,
    Formula::KineticEnergy,
    Formula::Work,
    Formula::SpringEnergy,
    Formula::GravitationalForce,
    Formula::FluidPressure,
    Formula::PendulumPeriod,
    Formula::ElectricalPower,
    Formula::Resistance,
    Formula::CircleArea,
    Formula::TriangleArea,
    Formula::SimpleInterest,
    Formula::CompoundInterest,
    Formula::Energy,
];

impl Formula {
    /// Stable snake_case identifier, matching the function name
    pub fn key(&self) -> &'static str {
        match self {
            Formula::Distance => "distance",
            Formula::FinalVelocity => "final_velocity",
            Formula::Force => "force",
            Formula::KineticEnergy => "kinetic_energy",
            Formula::Work => "work",
            Formula::SpringEnergy => "spring_energy",
            Formula::GravitationalForce => "gravitational_force",
            Formula::FluidPressure => "fluid_pressure",
            Formula::PendulumPeriod => "pendulum_period",
            Formula::ElectricalPower => "electrical_power",
            Formula::Resistance => "resistance",
            Formula::CircleArea => "circle_area",
            Formula::TriangleArea => "triangle_area",
            Formula::SimpleInterest => "simple_interest",
            Formula::CompoundInterest => "compound_interest",
            Formula::Energy => "energy",
        }
    }

    /// Function parameter names in call order
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Formula::Distance => &["v0", "a", "t"],
            Formula::FinalVelocity => &["v0", "a", "t"],
            Formula::Force => &["mass", "acceleration"],
            Formula::KineticEnergy => &["mass", "velocity"],
            Formula::Work => &["force", "displacement"],
            Formula::SpringEnergy => &["spring_constant", "displacement"],
            Formula::GravitationalForce => &["mass1", "mass2", "distance"],
            Formula::FluidPressure => &["density", "height"],
            Formula::PendulumPeriod => &["length"],
            Formula::ElectricalPower => &["voltage", "current"],
            Formula::Resistance => &["voltage", "current"],
            Formula::CircleArea => &["radius"],
            Formula::TriangleArea => &["a", "b", "c"],
            Formula::SimpleInterest => &["principal", "annual_rate_percent", "years"],
            Formula::CompoundInterest => &["principal", "rate", "compounds_per_year", "years"],
            Formula::Energy => &["mass"],
        }
    }

    /// Number of arguments the formula takes
    pub fn arity(&self) -> usize {
        self.parameters().len()
    }

    /// Evaluate the formula from a positional argument slice.
    ///
    /// Whole-number parameters (`years`, `compounds_per_year`) must be passed
    /// as integral floats within `i32` range.
    ///
    /// # Errors
    /// - `ArgumentCount` if `args.len()` differs from [`Formula::arity`]
    /// - `InvalidArgument` for a non-integral count, or whatever the formula
    ///   itself rejects
    pub fn evaluate(&self, args: &[f64]) -> FormulaResult<f64> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(FormulaError::argument_count(self.key(), expected, args.len()));
        }

        tracing::trace!(formula = self.key(), ?args, "evaluating");
        match self {
            Formula::Distance => Ok(formulas::distance(args[0], args[1], args[2])),
            Formula::FinalVelocity => formulas::final_velocity(args[0], args[1], args[2]),
            Formula::Force => Ok(formulas::force(args[0], args[1])),
            Formula::KineticEnergy => Ok(formulas::kinetic_energy(args[0], args[1])),
            Formula::Work => formulas::work(args[0], args[1]),
            Formula::SpringEnergy => Ok(formulas::spring_energy(args[0], args[1])),
            Formula::GravitationalForce => formulas::gravitational_force(args[0], args[1], args[2]),
            Formula::FluidPressure => Ok(formulas::fluid_pressure(args[0], args[1])),
            Formula::PendulumPeriod => formulas::pendulum_period(args[0]),
            Formula::ElectricalPower => Ok(formulas::electrical_power(args[0], args[1])),
            Formula::Resistance => Ok(formulas::resistance(args[0], args[1])),
            Formula::CircleArea => Ok(formulas::circle_area(args[0])),
            Formula::TriangleArea => Ok(formulas::triangle_area(args[0], args[1], args[2])),
            Formula::SimpleInterest => {
                let years = whole_number("years", args[2])?;
                Ok(formulas::simple_interest(args[0], args[1], years))
            }
            Formula::CompoundInterest => {
                let compounds_per_year = whole_number("compounds_per_year", args[2])?;
                let years = whole_number("years", args[3])?;
                Ok(formulas::compound_interest(args[0], args[1], compounds_per_year, years))
            }
            Formula::Energy => Ok(formulas::energy(args[0])),
        }
    }

    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            // Mechanics
            Formula::Distance => FormulaMetadata {
                name: "Distance Under Constant Acceleration",
                description: "Displacement after time t starting at velocity v0",
                formula_plain: "d = v0*t + 0.5*a*t^2",
                variables: vec![
                    Variable::input("v0", "v0", "Initial velocity", "m/s"),
                    Variable::input("a", "a", "Acceleration", "m/s^2"),
                    Variable::input("t", "t", "Elapsed time", "s"),
                    Variable::output("d", "Distance", "m"),
                ],
                assumptions: vec!["Acceleration is constant", "Straight-line motion"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "distance",
            },

            Formula::FinalVelocity => FormulaMetadata {
                name: "Final Velocity",
                description: "Velocity after accelerating for time t",
                formula_plain: "v = v0 + a*t",
                variables: vec![
                    Variable::input("v0", "v0", "Initial velocity", "m/s"),
                    Variable::input("a", "a", "Acceleration", "m/s^2"),
                    Variable::input("t", "t", "Elapsed time (t >= 0)", "s"),
                    Variable::output("v", "Final velocity", "m/s"),
                ],
                assumptions: vec!["Acceleration is constant", "Negative time is rejected"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "final_velocity",
            },

            Formula::Force => FormulaMetadata {
                name: "Newton's Second Law",
                description: "Net force required to accelerate a mass",
                formula_plain: "F = m*a",
                variables: vec![
                    Variable::input("m", "mass", "Mass", "kg"),
                    Variable::input("a", "acceleration", "Acceleration", "m/s^2"),
                    Variable::output("F", "Force", "N"),
                ],
                assumptions: vec!["Constant mass"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "force",
            },

            Formula::KineticEnergy => FormulaMetadata {
                name: "Kinetic Energy",
                description: "Translational kinetic energy of a moving mass",
                formula_plain: "KE = 0.5*m*v^2",
                variables: vec![
                    Variable::input("m", "mass", "Mass", "kg"),
                    Variable::input("v", "velocity", "Speed", "m/s"),
                    Variable::output("KE", "Kinetic energy", "J"),
                ],
                assumptions: vec!["Non-relativistic speed"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "kinetic_energy",
            },

            Formula::Work => FormulaMetadata {
                name: "Work (Parallel Force)",
                description: "Work done by a force acting along the displacement",
                formula_plain: "W = F*d*cos(theta), computed as W = F*d",
                variables: vec![
                    Variable::input("F", "force", "Force magnitude (>= 0)", "N"),
                    Variable::input("d", "displacement", "Displacement magnitude (>= 0)", "m"),
                    Variable::unsupported("θ", "Angle between force and displacement", "rad"),
                    Variable::output("W", "Work", "J"),
                ],
                assumptions: vec![
                    "θ = 0, so cos(θ) = 1; the angle term is not supported",
                    "Negative force or displacement is rejected",
                ],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "work",
            },

            Formula::SpringEnergy => FormulaMetadata {
                name: "Spring Potential Energy",
                description: "Elastic energy stored in a spring displaced by x",
                formula_plain: "PE = 0.5*k*x^2",
                variables: vec![
                    Variable::input("k", "spring_constant", "Spring constant", "N/m"),
                    Variable::input("x", "displacement", "Displacement from rest length", "m"),
                    Variable::output("PE", "Potential energy", "J"),
                ],
                assumptions: vec!["Ideal Hookean spring", "Symbol k is passed as spring_constant"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "spring_energy",
            },

            Formula::GravitationalForce => FormulaMetadata {
                name: "Universal Gravitation",
                description: "Attractive force between two point masses",
                formula_plain: "F = G*m1*m2/r^2",
                variables: vec![
                    Variable::constant("G", GRAVITATIONAL_CONSTANT, "Gravitational constant", "N*m^2/kg^2"),
                    Variable::input("m1", "mass1", "First mass (> 0)", "kg"),
                    Variable::input("m2", "mass2", "Second mass (> 0)", "kg"),
                    Variable::input("r", "distance", "Centre-to-centre distance (> 0)", "m"),
                    Variable::output("F", "Gravitational force", "N"),
                ],
                assumptions: vec!["G is fixed and cannot be overridden", "Point masses"],
                domain: Domain::Mechanics,
                source_module: "formulas/mechanics.rs",
                source_function: "gravitational_force",
            },

            // Fluids & waves
            Formula::FluidPressure => FormulaMetadata {
                name: "Hydrostatic Pressure",
                description: "Gauge pressure at depth h in a fluid of density ρ",
                formula_plain: "P = rho*g*h",
                variables: vec![
                    Variable::input("ρ", "density", "Fluid density", "kg/m^3"),
                    Variable::constant("g", STANDARD_GRAVITY, "Gravitational acceleration", "m/s^2"),
                    Variable::input("h", "height", "Depth below surface", "m"),
                    Variable::output("P", "Pressure", "Pa"),
                ],
                assumptions: vec!["Incompressible fluid", "Negative height is clamped to zero"],
                domain: Domain::FluidsAndWaves,
                source_module: "formulas/fluids.rs",
                source_function: "fluid_pressure",
            },

            Formula::PendulumPeriod => FormulaMetadata {
                name: "Simple Pendulum Period",
                description: "Period of small oscillations of a simple pendulum",
                formula_plain: "T = 2*pi*sqrt(L/g)",
                variables: vec![
                    Variable::constant("π", PI, "Pi", ""),
                    Variable::input("L", "length", "Pendulum length (> 0)", "m"),
                    Variable::constant("g", STANDARD_GRAVITY, "Gravitational acceleration", "m/s^2"),
                    Variable::output("T", "Period", "s"),
                ],
                assumptions: vec!["Small-angle approximation", "Massless rod, point bob"],
                domain: Domain::FluidsAndWaves,
                source_module: "formulas/fluids.rs",
                source_function: "pendulum_period",
            },

            // Electricity
            Formula::ElectricalPower => FormulaMetadata {
                name: "Electrical Power",
                description: "Power in a DC circuit",
                formula_plain: "P = V*I",
                variables: vec![
                    Variable::input("V", "voltage", "Voltage", "V"),
                    Variable::input("I", "current", "Current", "A"),
                    Variable::output("P", "Power", "W"),
                ],
                assumptions: vec!["DC circuit (power factor 1.0)"],
                domain: Domain::Electricity,
                source_module: "formulas/electricity.rs",
                source_function: "electrical_power",
            },

            Formula::Resistance => FormulaMetadata {
                name: "Ohm's Law Resistance",
                description: "Resistance from voltage across and current through a conductor",
                formula_plain: "R = V/I",
                variables: vec![
                    Variable::input("V", "voltage", "Voltage", "V"),
                    Variable::input("I", "current", "Current", "A"),
                    Variable::constant("ε", ZERO_CURRENT_EPSILON, "Substitute for zero current", "A"),
                    Variable::output("R", "Resistance", "Ω"),
                ],
                assumptions: vec!["Ohmic conductor", "I = 0 is replaced by ε = 1e-6"],
                domain: Domain::Electricity,
                source_module: "formulas/electricity.rs",
                source_function: "resistance",
            },

            // Geometry
            Formula::CircleArea => FormulaMetadata {
                name: "Circle Area",
                description: "Area enclosed by a circle of radius r",
                formula_plain: "A = pi*r^2",
                variables: vec![
                    Variable::constant("π", PI, "Pi", ""),
                    Variable::input("r", "radius", "Radius", "m"),
                    Variable::output("A", "Area", "m^2"),
                ],
                assumptions: vec!["Negative radius is accepted; its sign is squared away"],
                domain: Domain::Geometry,
                source_module: "formulas/geometry.rs",
                source_function: "circle_area",
            },

            Formula::TriangleArea => FormulaMetadata {
                name: "Triangle Area (Heron)",
                description: "Area of a triangle from its three side lengths",
                formula_plain: "s = (a+b+c)/2, A = sqrt(s*(s-a)*(s-b)*(s-c))",
                variables: vec![
                    Variable::input("a", "a", "First side", "m"),
                    Variable::input("b", "b", "Second side", "m"),
                    Variable::input("c", "c", "Third side", "m"),
                    Variable::output("A", "Area", "m^2"),
                ],
                assumptions: vec!["Triangle inequality is not enforced; impossible sides give NaN"],
                domain: Domain::Geometry,
                source_module: "formulas/geometry.rs",
                source_function: "triangle_area",
            },

            // Finance
            Formula::SimpleInterest => FormulaMetadata {
                name: "Simple Interest",
                description: "Interest earned without compounding",
                formula_plain: "I = P*(r/100)*t",
                variables: vec![
                    Variable::input("P", "principal", "Principal", "currency"),
                    Variable::input("r", "annual_rate_percent", "Annual rate in percent", "%"),
                    Variable::input("t", "years", "Whole years", "yr"),
                    Variable::output("I", "Interest", "currency"),
                ],
                assumptions: vec!["Rate is a percentage (5 means 5%)", "Returns interest only"],
                domain: Domain::Finance,
                source_module: "formulas/finance.rs",
                source_function: "simple_interest",
            },

            Formula::CompoundInterest => FormulaMetadata {
                name: "Compound Interest",
                description: "Final amount with n compounding periods per year",
                formula_plain: "A = P*(1 + r/n)^(n*t)",
                variables: vec![
                    Variable::input("P", "principal", "Principal", "currency"),
                    Variable::input("r", "rate", "Annual rate as a fraction", ""),
                    Variable::input("n", "compounds_per_year", "Compounding periods per year", ""),
                    Variable::input("t", "years", "Whole years", "yr"),
                    Variable::output("A", "Final amount", "currency"),
                ],
                assumptions: vec![
                    "Rate is a fraction (0.05 means 5%)",
                    "n = 0 is not rejected and returns the principal",
                ],
                domain: Domain::Finance,
                source_module: "formulas/finance.rs",
                source_function: "compound_interest",
            },

            // Relativity
            Formula::Energy => FormulaMetadata {
                name: "Mass-Energy Equivalence",
                description: "Rest energy of a mass",
                formula_plain: "E = m*c^2",
                variables: vec![
                    Variable::input("m", "mass", "Mass", "kg"),
                    Variable::constant("c", SPEED_OF_LIGHT, "Speed of light", "m/s"),
                    Variable::output("E", "Energy", "J"),
                ],
                assumptions: vec!["Rest mass only"],
                domain: Domain::Relativity,
                source_module: "formulas/relativity.rs",
                source_function: "energy",
            },
        }
    }

    /// Get all formulas in a specific domain
    pub fn in_domain(domain: Domain) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().domain == domain)
            .copied()
            .collect()
    }

    /// Get all domains in sort order
    pub fn all_domains() -> Vec<Domain> {
        use Domain::*;
        let mut domains = vec![Mechanics, FluidsAndWaves, Electricity, Geometry, Finance, Relativity];
        domains.sort_by_key(|d| d.sort_order());
        domains
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    /// Case-insensitive lookup that ignores `_`, `-` and spaces, so
    /// `gravitational_force`, `gravitationalForce` and `Gravitational-Force`
    /// all resolve to [`Formula::GravitationalForce`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ALL_FORMULAS
            .iter()
            .find(|f| normalize(f.key()) == wanted)
            .copied()
            .ok_or_else(|| FormulaError::unknown_formula(s))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Convert a whole-number argument to `i32`, rejecting fractions and overflow.
fn whole_number(parameter: &str, value: f64) -> FormulaResult<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.fract() != 0.0 || !in_range {
        return Err(FormulaError::invalid_argument(
            parameter,
            value,
            "must be a whole number within i32 range",
        ));
    }
    Ok(value as i32)
}

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a complete FORMULAS.md reference document.
///
/// Lists every formula by domain with its plain-text form, symbol table
/// (including which function parameter carries each symbol), and assumptions.
///
/// # Example
///
/// ```rust
/// use formula_core::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("# Formula Reference"));
/// assert!(markdown.contains("## Mechanics"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula implemented by `formula_core`, with the function parameter bound
to each symbol. Symbols marked *constant* are fixed inside the function and
cannot be passed in; symbols marked *unsupported* appear in the general
formula but are dropped by the implementation.

---

"#,
    );

    let domains = Formula::all_domains();

    for domain in &domains {
        let formulas = Formula::in_domain(*domain);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", domain.display_name()));

        for formula in formulas {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("| Symbol | Binding | Description | Units |\n");
            output.push_str("|--------|---------|-------------|-------|\n");
            for var in &meta.variables {
                let binding = match var.role {
                    VariableRole::Input { parameter } => format!("`{}`", parameter),
                    VariableRole::Output => "return value".to_string(),
                    VariableRole::Constant { value } => format!("constant {:e}", value),
                    VariableRole::Unsupported => "unsupported".to_string(),
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    var.symbol, binding, var.description, var.units
                ));
            }
            output.push('\n');

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Domains:** {}\n",
        ALL_FORMULAS.len(),
        domains.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
