//! # Error Types
//!
//! Structured error types for formula_core. Formula functions only ever raise
//! [`FormulaError::InvalidArgument`]; the remaining variants come from the
//! registry layer, where formulas are looked up by name and fed an argument
//! slice.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{FormulaError, FormulaResult};
//!
//! fn require_length(length: f64) -> FormulaResult<()> {
//!     if length <= 0.0 {
//!         return Err(FormulaError::invalid_argument(
//!             "length",
//!             length,
//!             "must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_length(-1.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_ARGUMENT");
//! assert_eq!(err.parameter(), Some("length"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula_core operations
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Structured error type for formula evaluation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FormulaError {
    /// An argument violates the formula's domain constraint
    #[error("Invalid argument '{parameter}' = {value}: {constraint}")]
    InvalidArgument {
        parameter: String,
        value: String,
        constraint: String,
    },

    /// No formula is registered under the requested name
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// Generic evaluation received the wrong number of arguments
    #[error("Formula '{formula}' takes {expected} argument(s), got {actual}")]
    ArgumentCount {
        formula: String,
        expected: usize,
        actual: usize,
    },
}

impl FormulaError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(parameter: impl Into<String>, value: f64, constraint: impl Into<String>) -> Self {
        FormulaError::InvalidArgument {
            parameter: parameter.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        FormulaError::UnknownFormula { name: name.into() }
    }

    /// Create an ArgumentCount error
    pub fn argument_count(formula: impl Into<String>, expected: usize, actual: usize) -> Self {
        FormulaError::ArgumentCount {
            formula: formula.into(),
            expected,
            actual,
        }
    }

    /// Name of the offending parameter, if the error concerns one
    pub fn parameter(&self) -> Option<&str> {
        match self {
            FormulaError::InvalidArgument { parameter, .. } => Some(parameter),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FormulaError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            FormulaError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            FormulaError::ArgumentCount { .. } => "ARGUMENT_COUNT",
        }
    }
}

/// Reject `value` unless it is strictly positive.
pub(crate) fn require_positive(parameter: &str, value: f64) -> FormulaResult<()> {
    if value <= 0.0 {
        tracing::debug!(parameter, value, "rejected non-positive argument");
        return Err(FormulaError::invalid_argument(parameter, value, "must be greater than zero"));
    }
    Ok(())
}

/// Reject `value` if it is negative. Zero passes.
pub(crate) fn require_non_negative(parameter: &str, value: f64) -> FormulaResult<()> {
    if value < 0.0 {
        tracing::debug!(parameter, value, "rejected negative argument");
        return Err(FormulaError::invalid_argument(parameter, value, "must not be negative"));
    }
    Ok(())
}
