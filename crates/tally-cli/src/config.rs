use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TallyConfig {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub scenarios: Vec<Scenario>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { scenarios: default_scenarios() }
    }
}

/// One named calculation run by the demo.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub label: String,
    pub operation: String,
    pub a: f64,
    pub b: f64,
}

impl Scenario {
    fn new(label: &str, operation: &str, a: f64, b: f64) -> Self {
        Self { label: label.to_string(), operation: operation.to_string(), a, b }
    }
}

fn default_log_filter() -> String {
    "tally=info".to_string()
}

fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Suma", "sumar", 10.0, 5.0),
        Scenario::new("Resta", "restar", 20.0, 5.0),
        Scenario::new("Multiplicación", "multiplicar", 5.0, 3.0),
        Scenario::new("División", "dividir", 30.0, 3.0),
        Scenario::new("Potencia", "potencia", 2.0, 3.0),
    ]
}

impl TallyConfig {
    /// Loads configuration from `path` (defaults when `None`), then applies
    /// `TALLY_LOG` and `TALLY_LOG_JSON` from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                Self::from_toml_str(&contents)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(filter) = lookup("TALLY_LOG") {
            self.logging.filter = filter;
        }
        if let Some(json) = lookup("TALLY_LOG_JSON") {
            self.logging.json = json
                .parse::<bool>()
                .with_context(|| format!("TALLY_LOG_JSON must be true or false, got '{json}'"))?;
        }
        Ok(())
    }
}
