// cardiorisk/src/cli.rs
//! Command-line interface definition for the `cardiorisk` application.
//! License: MIT OR APACHE 2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cardiorisk",
    author = "CardioRisk Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Estimate heart-disease risk from categorical patient attributes",
    long_about = "CardioRisk combines ten fixed conditional-probability tables into a weighted estimate of heart-disease probability and explains which factors drove it. Run it as an HTTP service (`serve`) or score a single record from the terminal (`score`).",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file merged over the built-in defaults.
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Path to a YAML theme file for terminal output.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the HTTP service exposing `/calculate-risk`.
    #[command(about = "Run the HTTP service exposing /calculate-risk.")]
    Serve(ServeCommand),

    /// Scores one patient record read from a file or stdin.
    #[command(about = "Score a single patient record (JSON) from a file or stdin.")]
    Score(ScoreCommand),

    /// Prints the network layout and metadata as JSON.
    #[command(about = "Print the network layout and attribute metadata as JSON.")]
    Network {
        /// Pretty-print the JSON output.
        #[arg(long, help = "Pretty-print the JSON output.")]
        pretty: bool,
    },

    /// Lists every input attribute with its accepted values and default.
    #[command(about = "List every input attribute, grouped, with accepted values.")]
    Attributes,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeCommand {
    /// Address to bind; overrides the configuration file.
    #[arg(long, env = "CARDIORISK_HOST", value_name = "HOST", help = "Address to bind (overrides the config file).")]
    pub host: Option<String>,

    /// Port to bind; overrides the configuration file.
    #[arg(long, short = 'p', env = "CARDIORISK_PORT", value_name = "PORT", help = "Port to bind (overrides the config file).")]
    pub port: Option<u16>,
}

/// Arguments for the `score` command.
#[derive(Parser, Debug)]
pub struct ScoreCommand {
    /// Path to a JSON patient record (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the record from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Overrides individual fields, e.g. `--set bp=High_BP`.
    #[arg(long = "set", short = 's', value_name = "FIELD=VALUE", help = "Set a field, e.g. --set bp=High_BP (repeatable).")]
    pub set: Vec<String>,

    /// Print the raw JSON result instead of a report.
    #[arg(long, help = "Print the JSON result instead of a report.")]
    pub json: bool,

    /// Refuse records carrying values outside their enumeration.
    #[arg(long, help = "Fail on values outside an attribute's accepted values.")]
    pub strict: bool,
}
