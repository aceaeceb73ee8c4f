//! # Error Types
//!
//! Structured error types for calc_core. Only invalid operands raise errors;
//! there are no internal failure modes. Each variant keeps the operand that
//! triggered it so callers can report it back.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_reciprocal(x: f64) -> CalcResult<f64> {
//!     if x == 0.0 {
//!         return Err(CalcError::division_by_zero(1.0));
//!     }
//!     Ok(1.0 / x)
//! }
//!
//! assert_eq!(checked_reciprocal(0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Failure kinds signaled by the calculator.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The divisor of a division was exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero {
        #[serde(with = "crate::float_serde")]
        dividend: f64,
    },

    /// Square root requested for a strictly negative number
    #[error("Cannot calculate square root of negative number: {radicand}")]
    NegativeRadicand {
        #[serde(with = "crate::float_serde")]
        radicand: f64,
    },
}

impl CalcError {
    /// Create a DivisionByZero error
    pub fn division_by_zero(dividend: f64) -> Self {
        CalcError::DivisionByZero { dividend }
    }

    /// Create a NegativeRadicand error
    pub fn negative_radicand(radicand: f64) -> Self {
        CalcError::NegativeRadicand { radicand }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::NegativeRadicand { .. } => "NEGATIVE_RADICAND",
        }
    }

    /// Name of the operation that raised this error
    pub fn operation(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "divide",
            CalcError::NegativeRadicand { .. } => "sqrt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::negative_radicand(-4.0);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"type":"NegativeRadicand","details":{"radicand":-4.0}}"#);

        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_non_finite_operand_serialization() {
        let error = CalcError::negative_radicand(f64::NEG_INFINITY);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"type":"NegativeRadicand","details":{"radicand":"-inf"}}"#);

        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::division_by_zero(10.0).error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::negative_radicand(-1.0).error_code(), "NEGATIVE_RADICAND");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::division_by_zero(10.0).to_string(), "Cannot divide by zero");
        assert_eq!(
            CalcError::negative_radicand(-1.0).to_string(),
            "Cannot calculate square root of negative number: -1"
        );
    }

    #[test]
    fn test_error_operation() {
        assert_eq!(CalcError::division_by_zero(1.0).operation(), "divide");
        assert_eq!(CalcError::negative_radicand(-1.0).operation(), "sqrt");
    }
}
