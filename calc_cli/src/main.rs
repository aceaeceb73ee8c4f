//! # Calculator CLI
//!
//! Runs every calc_core operation once with fixed sample inputs and prints
//! the results. Any calculator error is reported and the process exits with
//! a nonzero status.

mod runner;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use calc_core::{CalcError, Evaluation};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exercise each calculator operation and report the results.
#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about)]
struct Cli {
    /// Also print the results (or the error) as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = runner::run(&runner::DEMO_CASES, &mut io::stdout().lock());
    report(outcome, cli.json, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Turn the demo outcome into an exit status, printing the JSON results or
/// the error description along the way.
fn report<O: Write, E: Write>(
    outcome: Result<Vec<Evaluation>>,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> ExitCode {
    let written = match outcome {
        Ok(evaluations) => write_results(&evaluations, json, out).map(|()| ExitCode::SUCCESS),
        Err(e) => write_error(&e, json, err).map(|()| ExitCode::FAILURE),
    };
    written.unwrap_or_else(|e| {
        tracing::warn!("failed to write report: {}", e);
        ExitCode::FAILURE
    })
}

fn write_results<O: Write>(evaluations: &[Evaluation], json: bool, out: &mut O) -> io::Result<()> {
    if json {
        writeln!(out)?;
        writeln!(out, "JSON Output:")?;
        writeln!(out, "{}", serde_json::to_string_pretty(evaluations)?)?;
    }
    Ok(())
}

fn write_error<E: Write>(error: &anyhow::Error, json: bool, err: &mut E) -> io::Result<()> {
    writeln!(err, "Error: {}", error)?;
    if json {
        if let Some(calc_err) = error.downcast_ref::<CalcError>() {
            writeln!(err)?;
            writeln!(err, "Error JSON:")?;
            writeln!(err, "{}", serde_json::to_string_pretty(calc_err)?)?;
        }
    }
    Ok(())
}
