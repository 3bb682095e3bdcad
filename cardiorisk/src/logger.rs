// cardiorisk/src/logger.rs
//! Logger setup for the `cardiorisk` binary.
//!
//! Logging goes to stderr through `env_logger`, so stdout stays clean for JSON
//! and report output.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// With `level_override` set, that level applies to every module and
/// `RUST_LOG` is ignored. Otherwise `RUST_LOG` decides, defaulting to `info`.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        Some(level) => {
            let mut b = Builder::new();
            b.filter_level(level);
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("info")),
    };

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}

/// The override implied by the global `--quiet` / `--debug` flags.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
