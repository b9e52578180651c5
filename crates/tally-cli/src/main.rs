use clap::Parser;
use std::process::ExitCode;
use tally_cli::cli::Cli;
use tally_cli::config::TallyConfig;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = TallyConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    tally_cli::logging::init(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        json_logs = config.logging.json,
        "Starting Tally calculator"
    );

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    tally_cli::run(&cli, &config, &mut stdout.lock(), &mut stderr.lock())
}
