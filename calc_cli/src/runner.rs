//! Demo runner: evaluates a fixed list of operations and prints each result.

use std::io::Write;

use anyhow::Result;
use calc_core::{Calculator, Evaluation, Operation};
use tracing::{debug, info};

/// The sample calls exercised by the demo, one per operation.
pub const DEMO_CASES: [Operation; 6] = [
    Operation::Add { a: 5.0, b: 4.0 },
    Operation::Subtract { a: 10.0, b: 4.0 },
    Operation::Multiply { a: 6.0, b: 7.0 },
    Operation::Divide { a: 15.0, b: 3.0 },
    Operation::Power { a: 2.0, b: 3.0 },
    Operation::Sqrt { a: 16.0 },
];

/// Evaluate `cases` in order, writing one line per result to `out`.
///
/// Stops at the first failing operation; the returned error wraps the
/// [`calc_core::CalcError`] (or the I/O error from `out`).
pub fn run<W: Write>(cases: &[Operation], out: &mut W) -> Result<Vec<Evaluation>> {
    let calc = Calculator::new();

    writeln!(out, "=== Calculator Demo ===")?;
    writeln!(out, "Testing basic operations...")?;

    let mut evaluations = Vec::with_capacity(cases.len());
    for op in cases {
        debug!(operation = op.name(), "evaluating {}", op);
        let evaluation = op.evaluate(&calc)?;
        writeln!(out, "{}", evaluation)?;
        evaluations.push(evaluation);
    }

    writeln!(out)?;
    writeln!(out, "All operations completed successfully!")?;
    info!(count = evaluations.len(), "demo finished");

    Ok(evaluations)
}
