//! Command-line driver for the Tally calculator.
//!
//! Builds a [`Calculator`] with the built-in operations and either runs the
//! configured demonstration scenarios, evaluates a single named operation, or
//! lists what is registered.

pub mod cli;
pub mod config;
pub mod demo;
pub mod logging;

use anyhow::Context;
use cli::{Cli, Command};
use config::TallyConfig;
use std::io::Write;
use std::process::ExitCode;
use tally_calculator::Calculator;
use tracing::{debug, info};

/// Executes the selected command, writing results to `out` and scenario
/// failures to `err`.
pub fn run(
    cli: &Cli,
    config: &TallyConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let calculator = Calculator::with_builtins();
    debug!(operations = ?calculator.operation_names(), "Calculator ready");

    match cli.command.as_ref().unwrap_or(&Command::Demo) {
        Command::Demo => {
            let summary = demo::run_demo(&calculator, &config.demo.scenarios, out, err)?;
            info!(succeeded = summary.succeeded, failed = summary.failed, "Demo finished");
            Ok(if summary.failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Calc { name, a, b } => {
            let result = calculator
                .calculate(name, *a, *b)
                .with_context(|| format!("failed to calculate '{name}' with {a} and {b}"))?;
            writeln!(out, "{result}")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            for name in calculator.operation_names() {
                let description =
                    calculator.operation(name).map(|op| op.description()).unwrap_or_default();
                writeln!(out, "{name:<12} {description}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
