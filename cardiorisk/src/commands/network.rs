// cardiorisk/src/commands/network.rs
//! `network`: prints the reference data exactly as `GET /calculate-risk` does.

use anyhow::{Context, Result};
use std::io::Write;

use cardiorisk_core::{headless_reference_json, reference_data};

pub fn run_network<W: Write>(writer: &mut W, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(reference_data()).context("Failed to serialize reference data")?
    } else {
        headless_reference_json()?
    };
    writeln!(writer, "{}", json)?;
    Ok(())
}
