//! `tagstr`: parse and render tag strings from the command line.

use std::io;

use clap::Parser;
use eyre::Result;
use tracing::debug;

use tagstring_cli::cli::Cli;
use tagstring_cli::commands::run;
use tagstring_cli::config::CliConfig;
use tagstring_cli::error::CliError;
use tagstring_cli::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), ?config, "starting tagstr");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &config, &mut stdin.lock(), &mut stdout.lock())
}

fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    Ok(cli.apply_to(CliConfig::from_env()?))
}
