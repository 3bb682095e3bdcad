// cardiorisk-core/src/engines/mod.rs
//! Concrete implementations of the `RiskEngine` trait.
//!
//! License: MIT OR APACHE 2.0

pub mod weighted_engine;
