//! # calc_core - Arithmetic Calculation Engine
//!
//! `calc_core` provides six elementary operations (add, subtract, multiply,
//! divide, power, square root) behind a stateless [`Calculator`]. Operations
//! that can fail return a structured [`CalcError`] instead of panicking.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Exact boundaries**: Zero divisors and negative radicands are rejected
//!   by exact comparison, never by tolerance
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.multiply(6.0, 7.0), 42.0);
//! assert!(calc.divide(10.0, 0.0).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - The six operations
//! - [`operation`] - Serializable descriptions of single calls
//! - [`errors`] - Structured error types
//! - [`float_serde`] - JSON-safe serde for non-finite `f64` values

pub mod calculator;
pub mod errors;
pub mod float_serde;
pub mod operation;

// Re-export commonly used types at crate root for convenience
pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult};
pub use operation::{Evaluation, Operation};
