use crate::config::TallyConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Open/closed calculator driver
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Dispatches named binary operations to pluggable implementations")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the configured sample scenarios (default)
    Demo,

    /// Run one registered operation
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Registered operation name, e.g. `sumar`
        name: String,
        a: f64,
        b: f64,
    },

    /// List registered operations
    List,
}

impl Cli {
    /// Command-line flags take precedence over file and environment settings.
    pub fn apply_overrides(&self, config: &mut TallyConfig) {
        if self.json {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.filter = "tally=debug,info".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc() {
        let cli = Cli::try_parse_from(["tally", "calc", "potencia", "2", "0.5"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Calc { name: "potencia".to_string(), a: 2.0, b: 0.5 })
        );
    }

    #[test]
    fn rejects_non_numeric_operand() {
        assert!(Cli::try_parse_from(["tally", "calc", "sumar", "diez", "5"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["tally", "--json", "-v", "list"]).unwrap();
        let mut config = TallyConfig::default();
        cli.apply_overrides(&mut config);
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, "tally=debug,info");
        assert_eq!(cli.command, Some(Command::List));
    }
}
