// cardiorisk-core/tests/scoring_integration_tests.rs
use cardiorisk_core::engines::weighted_engine::WeightedAverageEngine;
use cardiorisk_core::patient::{PatientField, PatientRecord};
use cardiorisk_core::reference::{bins, reference_data};
use cardiorisk_core::{RiskEngine, ScoreResult};
use cardiorisk_cpt::Attribute;

const EPSILON: f64 = 1e-9;

fn score(record: &PatientRecord) -> ScoreResult {
    WeightedAverageEngine::new().score(record).unwrap()
}

fn assert_invariants(result: &ScoreResult) {
    assert!((result.positive_prob + result.negative_prob - 1.0).abs() < 1e-4);
    assert_eq!(result.confidence, result.positive_prob.max(result.negative_prob));
    assert!((result.disease_probability - result.positive_prob * 100.0).abs() < 0.01 + EPSILON);

    assert_eq!(result.top_factors.len(), 3);
    for pair in result.top_factors.windows(2) {
        assert!(pair[0].influence >= pair[1].influence);
    }
    for factor in &result.top_factors {
        assert!(Attribute::from_key(&factor.attribute).is_some());
    }
}

#[test_log::test]
fn test_empty_record_equals_explicit_baseline() {
    let empty = score(&PatientRecord::new());
    let baseline = score(&PatientRecord::baseline());
    assert_eq!(empty, baseline);
    assert_eq!(empty.disease_probability, 40.38);
    assert_invariants(&empty);
}

#[test_log::test]
fn test_unknown_value_degrades() {
    let result = score(&PatientRecord::new().with(PatientField::Bp, "Unknown_Bucket"));
    assert_eq!(result.all_probabilities.get(Attribute::Bp), 0.0);
    assert_eq!(result.all_probabilities.get(Attribute::Chol), 0.44);
    assert_eq!(result.positive_prob, 0.3688);
    assert_invariants(&result);
}

#[test]
fn test_scoring_is_idempotent() {
    let record = PatientRecord::new()
        .with(PatientField::Oldpeak, "Ischemia")
        .with(PatientField::Slope, "Downsloping");
    let first = serde_json::to_string(&score(&record)).unwrap();
    let second = serde_json::to_string(&score(&record)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_single_value_change_keeps_invariants() {
    for attribute in Attribute::ALL {
        let field = PatientField::from_key(attribute.key()).unwrap();
        for value in bins(attribute.key()).unwrap() {
            let result = score(&PatientRecord::new().with(field, *value));
            assert_invariants(&result);
        }
    }
}

#[test]
fn test_worst_case_record_is_high_risk() {
    let record = PatientRecord::new()
        .with(PatientField::Sex, "Male")
        .with(PatientField::Bp, "High_BP")
        .with(PatientField::Chol, "High_Chol")
        .with(PatientField::Fbs, "High_Sugar")
        .with(PatientField::Restecg, "ST_Abnorm")
        .with(PatientField::Thalach, "Low_Rate")
        .with(PatientField::Oldpeak, "Severe_Ischemia")
        .with(PatientField::Slope, "Downsloping")
        .with(PatientField::Ca, "3.0_Vessels")
        .with(PatientField::Thal, "Reversible_Defect");
    let result = score(&record);
    assert_invariants(&result);
    assert_eq!(result.risk_level(), cardiorisk_core::RiskLevel::High);
    assert_eq!(result.confidence, result.positive_prob);
    assert_eq!(result.top_factors[0].attribute, "ca");
}

#[test]
fn test_parallel_scoring_is_consistent() {
    let expected = score(&PatientRecord::new());
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| score(&PatientRecord::new())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_reference_bins_cover_every_field() {
    let data = reference_data();
    for field in PatientField::ALL {
        let values = data.metadata.attribute_bins.get(field.key()).unwrap();
        assert!(values.iter().any(|v| v == field.default_value()));
    }
}
