//! # JSON Evaluation API
//!
//! Request/response types for evaluating a formula by name, for callers that
//! speak JSON (scripts, LLM tool calls, the CLI's `--json` mode).
//!
//! Follows the same shape as every other calculation entry point:
//!
//! - [`Evaluation`] - input (formula plus positional arguments)
//! - [`EvaluationResult`] - output (value plus units)
//! - [`evaluate`] - pure function from one to the other
//!
//! ## JSON Example
//!
//! ```json
//! { "formula": "gravitational_force", "args": [5.972e24, 7.348e22, 3.844e8] }
//! ```
//!
//! ```rust
//! use formula_core::evaluation::{evaluate, Evaluation};
//!
//! let request: Evaluation =
//!     serde_json::from_str(r#"{ "formula": "triangle_area", "args": [3, 4, 5] }"#).unwrap();
//! let result = evaluate(&request).unwrap();
//! assert_eq!(result.value, 6.0);
//! assert_eq!(result.units, "m^2");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::registry::Formula;

/// A formula and the positional arguments to call it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub formula: Formula,
    /// Arguments in the order given by [`Formula::parameters`]
    #[serde(default)]
    pub args: Vec<f64>,
}

impl Evaluation {
    pub fn new(formula: Formula, args: impl Into<Vec<f64>>) -> Self {
        Self { formula, args: args.into() }
    }
}

/// Outcome of a successful evaluation.
///
/// `value` may be NaN for permissive formulas fed impossible inputs (e.g. a
/// triangle that cannot close); serde_json writes that as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub formula: Formula,
    pub value: f64,
    /// Units of `value`, as listed in the formula metadata
    pub units: String,
}

/// Evaluate a formula request.
///
/// # Errors
/// Whatever [`Formula::evaluate`] reports: wrong argument count, non-integral
/// counts, or a formula's own `InvalidArgument`.
pub fn evaluate(input: &Evaluation) -> FormulaResult<EvaluationResult> {
    let value = input.formula.evaluate(&input.args)?;
    Ok(EvaluationResult {
        formula: input.formula,
        value,
        units: input.formula.metadata().output_units().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    #[test]
    fn test_evaluate_resistance_zero_current() {
        let result = evaluate(&Evaluation::new(Formula::Resistance, [10.0, 0.0])).unwrap();
        assert!(result.value.is_finite());
        assert_eq!(result.units, "Ω");
    }

    #[test]
    fn test_evaluate_error_propagates() {
        let err = evaluate(&Evaluation::new(Formula::PendulumPeriod, [-1.0])).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_missing_args_default_to_empty() {
        let request: Evaluation = serde_json::from_str(r#"{ "formula": "energy" }"#).unwrap();
        assert!(request.args.is_empty());
        assert_eq!(
            evaluate(&request).unwrap_err(),
            FormulaError::argument_count("energy", 1, 0)
        );
    }

    #[test]
    fn test_unknown_formula_is_a_deserialization_error() {
        let parsed = serde_json::from_str::<Evaluation>(r#"{ "formula": "warp", "args": [] }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_result_json() {
        let result = evaluate(&Evaluation::new(Formula::Force, [2.0, 3.0])).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["formula"], "force");
        assert_eq!(json["value"], 6.0);
        assert_eq!(json["units"], "N");
    }
}
