// cardiorisk-cpt/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod attributes;
pub mod tables;
pub mod weights;
pub mod rounding;
pub mod engine;

/// P(disease = positive) for a single attribute value, or a fused estimate.
pub type Probability = f64;

pub use attributes::{Attribute, AttributeMap, UnknownAttribute};
pub use engine::{FactorScore, RawAssessment, RiskScorer};
pub use tables::{table_for, ConditionalTable, CptEntry, DiseaseState};
pub use weights::WeightTable;
