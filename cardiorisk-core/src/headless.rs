// cardiorisk-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use of the calculator without a server:
//! JSON in, JSON out.

use log::debug;

use crate::engine::RiskEngine;
use crate::engines::weighted_engine::{ValuePolicy, WeightedAverageEngine};
use crate::errors::{CardioRiskError, Result};
use crate::patient::PatientRecord;
use crate::reference::reference_data;

/// Scores a JSON patient record and returns the JSON `ScoreResult`.
///
/// # Arguments
///
/// * `body` - The raw JSON object, as it would arrive in a request body.
/// * `policy` - Whether out-of-enumeration values are tolerated.
pub fn headless_score_json(body: &[u8], policy: ValuePolicy) -> Result<String> {
    let record = PatientRecord::from_json(body)?;
    let engine: Box<dyn RiskEngine> = Box::new(WeightedAverageEngine::with_policy(policy));
    debug!("Headless scoring with engine '{}'", engine.name());
    let result = engine.score(&record)?;
    serde_json::to_string(&result).map_err(|e| CardioRiskError::SerializationError(e.to_string()))
}

/// Returns the reference data (network layout and metadata) as JSON.
pub fn headless_reference_json() -> Result<String> {
    serde_json::to_string(reference_data())
        .map_err(|e| CardioRiskError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_headless_score_empty_record() -> Result<()> {
        let json: Value = serde_json::from_str(&headless_score_json(b"{}", ValuePolicy::Lenient)?).unwrap();
        assert_eq!(json["disease_probability"], 40.38);
        assert_eq!(json["top_factors"].as_array().unwrap().len(), 3);
        Ok(())
    }

    #[test]
    fn test_headless_score_malformed() {
        let err = headless_score_json(b"{not json", ValuePolicy::Lenient).unwrap_err();
        assert!(matches!(err, CardioRiskError::MalformedRecord(_)));
    }

    #[test]
    fn test_headless_reference() -> Result<()> {
        let json: Value = serde_json::from_str(&headless_reference_json()?).unwrap();
        assert_eq!(json["network"]["nodes"].as_array().unwrap().len(), 14);
        assert_eq!(json["metadata"]["ess_value"], 10);
        Ok(())
    }
}
