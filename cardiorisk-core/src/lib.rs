// cardiorisk-core/src/lib.rs
//! # CardioRisk Core Library
//!
//! `cardiorisk-core` turns categorical patient records into an estimated
//! probability of heart disease, with a ranked explanation of which factors
//! drove the estimate. It has no I/O of its own apart from configuration
//! loading; the HTTP server and the CLI live in the `cardiorisk` crate.
//!
//! The estimate is a weighted average of ten independent conditional
//! probabilities (see `cardiorisk-cpt`). It is not Bayesian inference: there
//! is no joint distribution and no propagation between attributes.
//!
//! ## Modules
//!
//! * `patient`: `PatientRecord`, its fields, labels, groups and defaults.
//! * `score`: the published `ScoreResult` shape, `RiskLevel`, `InfluenceBand`.
//! * `engine`: the `RiskEngine` trait.
//! * `engines`: concrete engines (`WeightedAverageEngine`).
//! * `reference`: network diagram, attribute bins and estimation metadata.
//! * `validators`: enumeration checks and display formatting of values.
//! * `config`: server and CORS configuration with embedded defaults.
//! * `headless`: one-shot JSON helpers.
//! * `errors`: the `CardioRiskError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use cardiorisk_core::{PatientField, PatientRecord, RiskEngine, WeightedAverageEngine};
//!
//! let engine = WeightedAverageEngine::new();
//! let record = PatientRecord::new().with(PatientField::Thal, "Reversible_Defect");
//! let result = engine.score(&record).unwrap();
//! assert_eq!(result.top_factors.len(), 3);
//! assert!(result.disease_probability > 40.38);
//! ```
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod patient;
pub mod reference;
pub mod score;
pub mod validators;

/// Re-exports the configuration types and the merge helper.
pub use config::{config_candidate_paths, merge_config, CalculatorConfig, CorsConfig, ServerConfig};

/// Re-exports the custom error type.
pub use errors::CardioRiskError;

pub use engine::RiskEngine;
/// The unrounded scorer output that [`RiskEngine::assess`] returns.
pub use cardiorisk_cpt::RawAssessment;
pub use engines::weighted_engine::{ValuePolicy, WeightedAverageEngine};

pub use patient::{AttributeGroup, PatientField, PatientRecord};
pub use score::{AttributeProbabilities, InfluenceBand, RiskLevel, ScoreResult, TopFactor};
pub use reference::{reference_data, NetworkEdge, NetworkNode, NetworkStructure, ReferenceData};
pub use validators::{find_invalid_values, format_option_label, validate_record, InvalidValue};

/// Re-exports the one-shot helpers.
pub use headless::{headless_reference_json, headless_score_json};
