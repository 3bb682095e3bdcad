// cardiorisk/src/ui/mod.rs
//! Terminal rendering: colour theme, status messages and report tables.

pub mod output_format;
pub mod report;
pub mod theme;
