//! # formula_core - Formula Evaluation Library
//!
//! Pure, stateless implementations of common physics and finance formulas,
//! with a registry that documents how every formula symbol maps onto the Rust
//! function signature.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every formula is a leaf function; same input, same bits out
//! - **Explicit constants**: G, g, c, π are named constants, never parameters
//! - **Rich Errors**: constraint violations carry the parameter name and rule
//! - **Permissive where documented**: some formulas accept nonsensical input and
//!   return a nonsensical (possibly NaN) number instead of an error
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::formulas::{final_velocity, triangle_area};
//! use formula_core::FormulaError;
//!
//! assert_eq!(triangle_area(3.0, 4.0, 5.0), 6.0);
//!
//! let v = final_velocity(0.0, 9.8, 2.0).unwrap();
//! assert_eq!(v, 19.6);
//!
//! let err = final_velocity(0.0, 1.0, -1.0).unwrap_err();
//! assert!(matches!(err, FormulaError::InvalidArgument { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - The formula functions, grouped by domain
//! - [`constants`] - Fixed physical and numerical constants
//! - [`registry`] - Formula metadata, name lookup, generic evaluation
//! - [`evaluation`] - JSON request/response wrapper over the registry
//! - [`errors`] - Structured error types

pub mod constants;
pub mod errors;
pub mod evaluation;
pub mod formulas;
pub mod registry;

// Re-export commonly used types at crate root for convenience
pub use errors::{FormulaError, FormulaResult};
pub use evaluation::{evaluate, Evaluation, EvaluationResult};
pub use registry::{Domain, Formula, FormulaMetadata, ALL_FORMULAS};
