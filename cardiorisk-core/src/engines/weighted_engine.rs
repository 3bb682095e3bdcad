// cardiorisk-core/src/engines/weighted_engine.rs
//! A `RiskEngine` that folds ten independent table lookups into one weighted
//! average.
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use cardiorisk_cpt::{RawAssessment, RiskScorer};

use crate::engine::RiskEngine;
use crate::errors::Result;
use crate::patient::PatientRecord;
use crate::validators::{find_invalid_values, validate_record};

/// How the engine treats values outside their enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValuePolicy {
    /// Warn and score the value as probability `0.0`.
    #[default]
    Lenient,
    /// Refuse the record with [`crate::errors::CardioRiskError::InvalidValues`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedAverageEngine {
    scorer: RiskScorer,
    policy: ValuePolicy,
}

impl WeightedAverageEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ValuePolicy) -> Self {
        Self {
            scorer: RiskScorer::new(),
            policy,
        }
    }

    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }
}

impl RiskEngine for WeightedAverageEngine {
    fn name(&self) -> &'static str {
        "weighted-average"
    }

    fn assess(&self, record: &PatientRecord) -> Result<RawAssessment> {
        match self.policy {
            ValuePolicy::Strict => validate_record(record)?,
            ValuePolicy::Lenient => {
                for value in find_invalid_values(record) {
                    warn!(
                        "Value '{}' is not valid for attribute '{}'; it contributes 0.0",
                        value.value, value.field
                    );
                }
            }
        }

        let raw = self.scorer.assess(&record.scored_values());
        debug!(
            "[{}] positive={:.6} negative={:.6} top={}",
            self.name(),
            raw.positive,
            raw.negative,
            raw.ranking[0].attribute
        );
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CardioRiskError;
    use crate::patient::PatientField;

    #[test]
    fn test_lenient_scores_unknown_value_as_zero() {
        let engine = WeightedAverageEngine::new();
        let record = PatientRecord::new().with(PatientField::Bp, "Unknown_Bucket");
        let result = engine.score(&record).unwrap();
        assert_eq!(result.all_probabilities.get(cardiorisk_cpt::Attribute::Bp), 0.0);
        assert_eq!(result.positive_prob, 0.3688);
        assert_eq!(result.top_factors[0].attribute, "bp");
        assert_eq!(result.top_factors[0].influence, 50.0);
    }

    #[test]
    fn test_strict_rejects_unknown_value() {
        let engine = WeightedAverageEngine::with_policy(ValuePolicy::Strict);
        let record = PatientRecord::new().with(PatientField::Cp, "Sharp");
        let err = engine.score(&record).unwrap_err();
        assert!(matches!(err, CardioRiskError::InvalidValues(ref v) if v.len() == 1));
    }

    #[test]
    fn test_unused_fields_do_not_change_the_score() {
        let engine = WeightedAverageEngine::new();
        let plain = engine.score(&PatientRecord::new()).unwrap();
        let with_symptoms = engine
            .score(
                &PatientRecord::new()
                    .with(PatientField::Age, "Old")
                    .with(PatientField::Exang, "Yes")
                    .with(PatientField::Cp, "Typical_Angina"),
            )
            .unwrap();
        assert_eq!(plain, with_symptoms);
    }
}
