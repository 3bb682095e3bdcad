// cardiorisk/src/commands/mod.rs
//! Implementations of the CLI subcommands.

pub mod attributes;
pub mod network;
pub mod score;
pub mod serve;
