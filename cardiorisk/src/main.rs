// cardiorisk/src/main.rs
//! CardioRisk entry point.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use cardiorisk::cli::{Cli, Commands};
use cardiorisk::commands::{attributes, network, score, serve};
use cardiorisk::logger;
use cardiorisk::ui::output_format::error_msg;
use cardiorisk::ui::theme::{build_theme_map, ThemeStyle};
use cardiorisk_core::CalculatorConfig;

fn main() -> ExitCode {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let theme = build_theme_map(cli.theme.as_deref()).context("Theme error")?;

    match &cli.command {
        Commands::Serve(cmd) => {
            let config = CalculatorConfig::resolve(cli.config.as_deref())?;
            debug!("Resolved configuration: {:?}", config);
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(serve::run_serve(config, cmd))
        }
        Commands::Score(cmd) => score::run_score(cmd, &theme),
        Commands::Network { pretty } => network::run_network(&mut std::io::stdout().lock(), *pretty),
        Commands::Attributes => attributes::run_attributes(&theme),
    }
}
