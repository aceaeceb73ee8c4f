//! # Calculator
//!
//! The six elementary operations. `Calculator` carries no state, so a single
//! value can be copied freely or shared across threads.
//!
//! ## Boundary Handling
//!
//! - `divide` rejects a divisor that is exactly `0.0` (no epsilon).
//! - `sqrt` rejects `a < 0.0`; `-0.0` yields `+0.0` and NaN passes through.
//! - `power` follows IEEE-754 for every input, including `0 ^ -1 = inf`.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::{CalcError, Calculator};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(5.0, 3.0), 8.0);
//! assert_eq!(calc.divide(7.0, 2.0), Ok(3.5));
//! assert!(matches!(calc.sqrt(-1.0), Err(CalcError::NegativeRadicand { .. })));
//! ```

use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Stateless arithmetic calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// `a + b`
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// `a - b`
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// `a * b`
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// `a / b`, failing with [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            debug!(dividend = a, "rejecting division by zero");
            return Err(CalcError::division_by_zero(a));
        }
        Ok(a / b)
    }

    /// `a` raised to the power `b`.
    pub fn power(&self, a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    /// Principal square root, failing with [`CalcError::NegativeRadicand`]
    /// when `a < 0`.
    pub fn sqrt(&self, a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            debug!(radicand = a, "rejecting square root of negative number");
            return Err(CalcError::negative_radicand(a));
        }
        // -0.0 passes the check above; adding 0.0 drops its sign
        Ok(a.sqrt() + 0.0)
    }
}
