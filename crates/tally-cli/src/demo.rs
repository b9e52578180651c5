//! Sample scenario runner.

use crate::config::Scenario;
use std::io::Write;
use tally_calculator::Calculator;
use tracing::warn;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs every scenario in order. Results go to `out` as `label: value`; a
/// failing scenario is reported on `err` and the run continues.
pub fn run_demo(
    calculator: &Calculator,
    scenarios: &[Scenario],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<DemoSummary> {
    let mut summary = DemoSummary::default();

    for scenario in scenarios {
        match calculator.calculate(&scenario.operation, scenario.a, scenario.b) {
            Ok(value) => {
                writeln!(out, "{}: {}", scenario.label, value)?;
                summary.succeeded += 1;
            }
            Err(error) => {
                warn!(
                    scenario = %scenario.label,
                    operation = %scenario.operation,
                    category = error.category(),
                    %error,
                    "Scenario failed"
                );
                writeln!(err, "{}: error: {}", scenario.label, error)?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    fn scenario(label: &str, operation: &str, a: f64, b: f64) -> Scenario {
        Scenario { label: label.to_string(), operation: operation.to_string(), a, b }
    }

    #[test]
    fn default_scenarios_print_expected_results() {
        let calculator = Calculator::with_builtins();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary =
            run_demo(&calculator, &DemoConfig::default().scenarios, &mut out, &mut err).unwrap();

        assert_eq!(summary, DemoSummary { succeeded: 5, failed: 0 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Suma: 15\nResta: 15\nMultiplicación: 15\nDivisión: 10\nPotencia: 8\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn failures_are_reported_and_run_continues() {
        let calculator = Calculator::with_builtins();
        let scenarios = vec![
            scenario("Cero", "dividir", 1.0, 0.0),
            scenario("Raíz", "raiz", 9.0, 2.0),
            scenario("Suma", "sumar", 1.0, 2.0),
        ];
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary = run_demo(&calculator, &scenarios, &mut out, &mut err).unwrap();

        assert_eq!(summary, DemoSummary { succeeded: 1, failed: 2 });
        assert_eq!(String::from_utf8(out).unwrap(), "Suma: 3\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Cero: error: cannot divide by zero\nRaíz: error: operation 'raiz' is not registered\n"
        );
    }
}
