// cardiorisk/src/commands/serve.rs
//! `serve`: runs the HTTP service.

use anyhow::Result;
use log::info;

use cardiorisk_core::{merge_config, CalculatorConfig, ServerConfig, WeightedAverageEngine};

use crate::cli::ServeCommand;
use crate::server::{run_server, AppState};

/// Applies `--host` / `--port` (or their environment variables) over the config.
pub fn apply_overrides(config: CalculatorConfig, cmd: &ServeCommand) -> Result<CalculatorConfig> {
    let overrides = CalculatorConfig {
        server: ServerConfig {
            host: cmd.host.clone(),
            port: cmd.port,
        },
        ..Default::default()
    };
    let merged = merge_config(config, Some(overrides));
    merged.validate()?;
    Ok(merged)
}

pub async fn run_serve(config: CalculatorConfig, cmd: &ServeCommand) -> Result<()> {
    let config = apply_overrides(config, cmd)?;
    info!(
        "Starting CardioRisk service (CORS origin '{}', {} allowed header(s))",
        config.allow_origin(),
        config.allow_headers().len()
    );
    // The service is lenient: invalid values are logged and scored as 0.0.
    run_server(&config, AppState::new(WeightedAverageEngine::new())).await
}
