// cardiorisk/src/lib.rs
//! # CardioRisk Application
//!
//! The command-line front end and HTTP service for `cardiorisk-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod server;
pub mod ui;

pub use server::{build_router, cors_layer, run_server, AppState};
