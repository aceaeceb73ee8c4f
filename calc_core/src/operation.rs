//! # Operations
//!
//! A data description of a single calculator call. Each [`Operation`] owns its
//! operands, so a list of them can be stored, serialized, and evaluated later.
//!
//! ## JSON Example
//!
//! ```json
//! { "op": "divide", "a": 15.0, "b": 3.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::{Calculator, Operation};
//!
//! let op = Operation::Power { a: 2.0, b: 3.0 };
//! let evaluation = op.evaluate(&Calculator::new()).unwrap();
//! assert_eq!(evaluation.to_string(), "2 ^ 3 = 8");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::errors::CalcResult;
use crate::float_serde;

/// One calculator call with its operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add {
        #[serde(with = "float_serde")]
        a: f64,
        #[serde(with = "float_serde")]
        b: f64,
    },
    Subtract {
        #[serde(with = "float_serde")]
        a: f64,
        #[serde(with = "float_serde")]
        b: f64,
    },
    Multiply {
        #[serde(with = "float_serde")]
        a: f64,
        #[serde(with = "float_serde")]
        b: f64,
    },
    Divide {
        #[serde(with = "float_serde")]
        a: f64,
        #[serde(with = "float_serde")]
        b: f64,
    },
    Power {
        #[serde(with = "float_serde")]
        a: f64,
        #[serde(with = "float_serde")]
        b: f64,
    },
    Sqrt {
        #[serde(with = "float_serde")]
        a: f64,
    },
}

impl Operation {
    /// Operation name as used in JSON and logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::Power { .. } => "power",
            Operation::Sqrt { .. } => "sqrt",
        }
    }

    /// Operator symbol used in the human-readable form
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "+",
            Operation::Subtract { .. } => "-",
            Operation::Multiply { .. } => "*",
            Operation::Divide { .. } => "/",
            Operation::Power { .. } => "^",
            Operation::Sqrt { .. } => "\u{221a}",
        }
    }

    /// Run this operation on `calc`.
    pub fn evaluate(&self, calc: &Calculator) -> CalcResult<Evaluation> {
        let value = match *self {
            Operation::Add { a, b } => calc.add(a, b),
            Operation::Subtract { a, b } => calc.subtract(a, b),
            Operation::Multiply { a, b } => calc.multiply(a, b),
            Operation::Divide { a, b } => calc.divide(a, b)?,
            Operation::Power { a, b } => calc.power(a, b),
            Operation::Sqrt { a } => calc.sqrt(a)?,
        };
        Ok(Evaluation {
            operation: *self,
            value,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Sqrt { a } => write!(f, "{}{}", self.symbol(), a),
            Operation::Add { a, b }
            | Operation::Subtract { a, b }
            | Operation::Multiply { a, b }
            | Operation::Divide { a, b }
            | Operation::Power { a, b } => write!(f, "{} {} {}", a, self.symbol(), b),
        }
    }
}

/// A successful operation together with its result.
///
/// Non-finite values (`0 ^ -1`, overflow, NaN) are written as `"inf"`,
/// `"-inf"` or `"NaN"` so they read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    #[serde(with = "float_serde")]
    pub value: f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.operation, self.value)
    }
}
