// cardiorisk-core/src/score.rs
//! The published shape of an assessment.
//!
//! [`ScoreResult`] is built from a [`RawAssessment`] by rounding: fractions to
//! four places, the disease percentage to two, influence to one. The JSON field
//! names are part of the public contract and must not change.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use cardiorisk_cpt::rounding::{round_to, to_percent};
use cardiorisk_cpt::{Attribute, AttributeMap, FactorScore, RawAssessment};

/// Number of factors reported in [`ScoreResult::top_factors`].
pub const TOP_FACTOR_COUNT: usize = 3;

/// One of the most influential attributes of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopFactor {
    pub attribute: String,
    pub probability: f64,
    /// `|probability - 0.5|` as a percentage.
    pub influence: f64,
    pub label: String,
}

impl TopFactor {
    pub fn from_factor(factor: &FactorScore) -> Self {
        Self {
            attribute: factor.attribute.key().to_string(),
            probability: round_to(factor.probability, 4),
            influence: to_percent(factor.deviation, 1),
            label: factor.attribute.label().to_string(),
        }
    }

    pub fn band(&self) -> InfluenceBand {
        InfluenceBand::from_influence(self.influence)
    }
}

/// Rounded `P(positive | value)` for every scored attribute.
///
/// Serializes as a JSON object keyed in attribute declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeProbabilities(AttributeMap<f64>);

impl AttributeProbabilities {
    pub fn get(&self, attribute: Attribute) -> f64 {
        self.0[attribute]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.0.iter().map(|(attribute, p)| (attribute, *p))
    }
}

impl Serialize for AttributeProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Attribute::COUNT))?;
        for (attribute, probability) in self.iter() {
            map.serialize_entry(attribute.key(), &probability)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeProbabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProbabilitiesVisitor;

        impl<'de> Visitor<'de> for ProbabilitiesVisitor {
            type Value = AttributeProbabilities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of scored attribute keys to probabilities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values: [Option<f64>; Attribute::COUNT] = [None; Attribute::COUNT];
                while let Some(key) = access.next_key::<String>()? {
                    let attribute = Attribute::from_key(&key).ok_or_else(|| {
                        serde::de::Error::unknown_field(&key, &[])
                    })?;
                    values[attribute.index()] = Some(access.next_value()?);
                }
                let mut map = AttributeMap::new([0.0; Attribute::COUNT]);
                for attribute in Attribute::ALL {
                    map[attribute] = values[attribute.index()]
                        .ok_or_else(|| serde::de::Error::missing_field(attribute.key()))?;
                }
                Ok(AttributeProbabilities(map))
            }
        }

        deserializer.deserialize_map(ProbabilitiesVisitor)
    }
}

/// The answer to a scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `positive_prob` as a percentage, two decimals.
    pub disease_probability: f64,
    pub positive_prob: f64,
    pub negative_prob: f64,
    pub confidence: f64,
    pub top_factors: Vec<TopFactor>,
    pub all_probabilities: AttributeProbabilities,
}

impl ScoreResult {
    pub fn from_raw(raw: &RawAssessment) -> Self {
        Self {
            disease_probability: to_percent(raw.positive, 2),
            positive_prob: round_to(raw.positive, 4),
            negative_prob: round_to(raw.negative, 4),
            confidence: round_to(raw.confidence, 4),
            top_factors: raw
                .top(TOP_FACTOR_COUNT)
                .iter()
                .map(TopFactor::from_factor)
                .collect(),
            all_probabilities: AttributeProbabilities(AttributeMap::from_fn(|attribute| {
                round_to(raw.probabilities[attribute], 4)
            })),
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_percentage(self.disease_probability)
    }
}

/// Coarse classification of `disease_probability`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            RiskLevel::Low
        } else if percentage < 60.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Risk factors are largely within normal ranges.",
            RiskLevel::Moderate => "Some risk factors are elevated; clinical follow-up is advised.",
            RiskLevel::High => "Several strong risk factors are present; clinical evaluation is recommended.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::Moderate => write!(f, "Moderate Risk"),
            RiskLevel::High => write!(f, "High Risk"),
        }
    }
}

/// How strongly a top factor pulls away from the neutral 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InfluenceBand {
    Mild,
    Notable,
    Strong,
}

impl InfluenceBand {
    pub fn from_influence(influence: f64) -> Self {
        if influence >= 20.0 {
            InfluenceBand::Strong
        } else if influence >= 10.0 {
            InfluenceBand::Notable
        } else {
            InfluenceBand::Mild
        }
    }
}

impl fmt::Display for InfluenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InfluenceBand::Mild => "mild",
            InfluenceBand::Notable => "notable",
            InfluenceBand::Strong => "strong",
        })
    }
}
