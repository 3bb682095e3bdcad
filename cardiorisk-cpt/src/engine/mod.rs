//! The low-level weighted-average risk scorer.
//!
//! Each scored attribute is resolved independently against its conditional
//! table, then the ten probabilities are folded into one estimate with the
//! fixed [`WeightTable`]. There is no joint distribution and no evidence
//! propagation between attributes.

use crate::attributes::{Attribute, AttributeMap};
use crate::tables::table_for;
use crate::weights::WeightTable;
use crate::Probability;
use libm::{fabs, fmax};

/// The neutral probability that influence is measured against.
pub const NEUTRAL_PROBABILITY: Probability = 0.5;

/// A single attribute's contribution, before any rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    pub attribute: Attribute,
    pub probability: Probability,
    /// `|probability - 0.5|`
    pub deviation: f64,
}

impl FactorScore {
    pub fn new(attribute: Attribute, probability: Probability) -> Self {
        Self {
            attribute,
            probability,
            deviation: fabs(probability - NEUTRAL_PROBABILITY),
        }
    }
}

/// Unrounded outcome of one assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawAssessment {
    pub positive: Probability,
    pub negative: Probability,
    /// `max(positive, negative)`
    pub confidence: Probability,
    /// Per-attribute `P(positive | value)` in declaration order.
    pub probabilities: AttributeMap<Probability>,
    /// All ten factors, most influential first.
    pub ranking: [FactorScore; Attribute::COUNT],
}

impl RawAssessment {
    /// The `n` most influential factors (clamped to the number of attributes).
    pub fn top(&self, n: usize) -> &[FactorScore] {
        &self.ranking[..n.min(Attribute::COUNT)]
    }
}

/// Resolves and fuses attribute probabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    weights: WeightTable,
}

impl RiskScorer {
    pub const fn new() -> Self {
        Self {
            weights: WeightTable::STANDARD,
        }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Scores a fully resolved record: one value per attribute.
    ///
    /// Callers substitute defaults for absent attributes before calling; a
    /// value that is not in its table contributes `0.0`.
    pub fn assess(&self, values: &AttributeMap<&str>) -> RawAssessment {
        let probabilities =
            AttributeMap::from_fn(|attribute| table_for(attribute).positive(values[attribute]));

        let positive = self.fuse(&probabilities);
        let negative = 1.0 - positive;

        RawAssessment {
            positive,
            negative,
            confidence: fmax(positive, negative),
            probabilities,
            ranking: rank(&probabilities),
        }
    }

    /// `sum(p_i * w_i) / sum(w_i)`, accumulated in declaration order.
    fn fuse(&self, probabilities: &AttributeMap<Probability>) -> Probability {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (attribute, probability) in probabilities.iter() {
            let weight = self.weights.weight(attribute);
            weighted_sum += probability * weight;
            total_weight += weight;
        }
        weighted_sum / total_weight
    }
}

/// Orders factors by descending deviation from 0.5.
///
/// Equal deviations keep declaration order, which makes the ranking identical
/// to a stable sort over the attributes as declared.
fn rank(probabilities: &AttributeMap<Probability>) -> [FactorScore; Attribute::COUNT] {
    let mut ranking =
        core::array::from_fn(|i| FactorScore::new(Attribute::ALL[i], probabilities.values()[i]));
    ranking.sort_unstable_by(|a: &FactorScore, b: &FactorScore| {
        b.deviation
            .total_cmp(&a.deviation)
            .then(a.attribute.cmp(&b.attribute))
    });
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn baseline() -> AttributeMap<&'static str> {
        AttributeMap::from_fn(Attribute::default_value)
    }

    #[test]
    fn test_baseline_weighted_average() {
        let raw = RiskScorer::new().assess(&baseline());
        // 4.361 / 10.8
        assert!((raw.positive - 4.361 / 10.8).abs() < EPSILON);
        assert!((raw.positive + raw.negative - 1.0).abs() < EPSILON);
        assert_eq!(raw.confidence, raw.negative);
    }

    #[test]
    fn test_baseline_ranking_breaks_ties_by_declaration_order() {
        let raw = RiskScorer::new().assess(&baseline());
        let top: [Attribute; 3] = [
            raw.top(3)[0].attribute,
            raw.top(3)[1].attribute,
            raw.top(3)[2].attribute,
        ];
        // thal deviates by 0.24; oldpeak and ca tie at 0.22.
        assert_eq!(top, [Attribute::Thal, Attribute::Oldpeak, Attribute::Ca]);
    }

    #[test]
    fn test_ranking_is_sorted_descending() {
        let mut values = baseline();
        values[Attribute::Ca] = "3.0_Vessels";
        values[Attribute::Sex] = "Female";
        let raw = RiskScorer::new().assess(&values);
        for pair in raw.ranking.windows(2) {
            assert!(pair[0].deviation >= pair[1].deviation);
        }
        assert_eq!(raw.ranking[0].attribute, Attribute::Ca);
    }

    #[test]
    fn test_unknown_value_zeroes_only_that_term() {
        let mut values = baseline();
        values[Attribute::Bp] = "Unknown_Bucket";
        let raw = RiskScorer::new().assess(&values);
        assert_eq!(raw.probabilities[Attribute::Bp], 0.0);
        assert_eq!(raw.probabilities[Attribute::Chol], 0.44);
        assert!((raw.positive - 3.983 / 10.8).abs() < EPSILON);
        assert_eq!(raw.ranking[0].attribute, Attribute::Bp);
    }

    #[test]
    fn test_top_is_clamped() {
        let raw = RiskScorer::new().assess(&baseline());
        assert_eq!(raw.top(50).len(), Attribute::COUNT);
        assert!(raw.top(0).is_empty());
    }

    #[test]
    fn test_high_risk_record_flips_confidence_side() {
        let values = AttributeMap::new([
            "Male",
            "High_BP",
            "High_Chol",
            "Low_Rate",
            "Severe_Ischemia",
            "Downsloping",
            "3.0_Vessels",
            "Reversible_Defect",
            "High_Sugar",
            "ST_Abnorm",
        ]);
        let raw = RiskScorer::new().assess(&values);
        assert!(raw.positive > 0.5);
        assert_eq!(raw.confidence, raw.positive);
    }
}
