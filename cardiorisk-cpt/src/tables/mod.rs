// cardiorisk-cpt/src/tables/mod.rs
//! Conditional probability tables, one per scored attribute.
//!
//! Each row maps an attribute value to `P(disease | value)` for both disease
//! states. Rows are kept in the order the values are presented to users.

use crate::attributes::Attribute;
use crate::Probability;
use libm::fabs;

/// The two states of the disease node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiseaseState {
    Negative,
    Positive,
}

impl DiseaseState {
    pub const ALL: [DiseaseState; 2] = [DiseaseState::Negative, DiseaseState::Positive];

    pub const fn as_str(self) -> &'static str {
        match self {
            DiseaseState::Negative => "Negative",
            DiseaseState::Positive => "Positive",
        }
    }
}

/// `(P(negative), P(positive))` for a single attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CptEntry {
    pub negative: Probability,
    pub positive: Probability,
}

impl CptEntry {
    pub const fn new(negative: Probability, positive: Probability) -> Self {
        Self { negative, positive }
    }

    pub const fn get(&self, state: DiseaseState) -> Probability {
        match state {
            DiseaseState::Negative => self.negative,
            DiseaseState::Positive => self.positive,
        }
    }

    /// Whether the pair sums to 1.0 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        fabs(self.negative + self.positive - 1.0) <= tolerance
    }
}

/// An immutable value -> [`CptEntry`] mapping for one attribute.
#[derive(Debug)]
pub struct ConditionalTable {
    attribute: Attribute,
    rows: &'static [(&'static str, CptEntry)],
}

impl ConditionalTable {
    pub const fn new(attribute: Attribute, rows: &'static [(&'static str, CptEntry)]) -> Self {
        Self { attribute, rows }
    }

    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub const fn rows(&self) -> &'static [(&'static str, CptEntry)] {
        self.rows
    }

    /// Valid values for the attribute, in presentation order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.rows.iter().map(|(value, _)| *value)
    }

    pub fn get(&self, value: &str) -> Option<&CptEntry> {
        self.rows
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Looks up `P(disease = state | value)`.
    ///
    /// A value outside the table yields `0.0` instead of an error, so a single
    /// unrecognised input degrades one term of the fusion rather than the whole
    /// assessment.
    pub fn probability(&self, value: &str, state: DiseaseState) -> Probability {
        match self.get(value) {
            Some(entry) => entry.get(state),
            None => 0.0,
        }
    }

    /// Shorthand for `probability(value, DiseaseState::Positive)`.
    pub fn positive(&self, value: &str) -> Probability {
        self.probability(value, DiseaseState::Positive)
    }
}

pub static SEX_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Sex,
    &[
        ("Female", CptEntry::new(0.75, 0.25)),
        ("Male", CptEntry::new(0.44, 0.56)),
    ],
);

pub static BP_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Bp,
    &[
        ("Normal", CptEntry::new(0.58, 0.42)),
        ("Elevated", CptEntry::new(0.52, 0.48)),
        ("High_BP", CptEntry::new(0.48, 0.52)),
    ],
);

pub static CHOL_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Chol,
    &[
        ("Desirable", CptEntry::new(0.56, 0.44)),
        ("Borderline", CptEntry::new(0.52, 0.48)),
        ("High_Chol", CptEntry::new(0.48, 0.52)),
    ],
);

pub static HR_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Thalach,
    &[
        ("Low_Rate", CptEntry::new(0.38, 0.62)),
        ("Normal_Rate", CptEntry::new(0.54, 0.46)),
        ("High_Rate", CptEntry::new(0.68, 0.32)),
    ],
);

pub static OLDPEAK_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Oldpeak,
    &[
        ("No_Depression", CptEntry::new(0.72, 0.28)),
        ("Ischemia", CptEntry::new(0.35, 0.65)),
        ("Severe_Ischemia", CptEntry::new(0.18, 0.82)),
    ],
);

pub static SLOPE_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Slope,
    &[
        ("Upsloping", CptEntry::new(0.70, 0.30)),
        ("Flat", CptEntry::new(0.42, 0.58)),
        ("Downsloping", CptEntry::new(0.28, 0.72)),
    ],
);

pub static CA_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Ca,
    &[
        ("0.0_Vessels", CptEntry::new(0.72, 0.28)),
        ("1.0_Vessels", CptEntry::new(0.35, 0.65)),
        ("2.0_Vessels", CptEntry::new(0.22, 0.78)),
        ("3.0_Vessels", CptEntry::new(0.12, 0.88)),
        ("nan_Vessels", CptEntry::new(0.50, 0.50)),
    ],
);

pub static THAL_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Thal,
    &[
        ("Normal", CptEntry::new(0.74, 0.26)),
        ("Fixed_Defect", CptEntry::new(0.38, 0.62)),
        ("Reversible_Defect", CptEntry::new(0.28, 0.72)),
    ],
);

pub static FBS_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Fbs,
    &[
        ("Normal_Sugar", CptEntry::new(0.55, 0.45)),
        ("High_Sugar", CptEntry::new(0.48, 0.52)),
    ],
);

pub static RESTECG_TO_DISEASE: ConditionalTable = ConditionalTable::new(
    Attribute::Restecg,
    &[
        ("Normal", CptEntry::new(0.55, 0.45)),
        ("ST_Abnorm", CptEntry::new(0.48, 0.52)),
        ("LVH", CptEntry::new(0.50, 0.50)),
    ],
);

/// Returns the conditional table for `attribute`.
pub fn table_for(attribute: Attribute) -> &'static ConditionalTable {
    match attribute {
        Attribute::Sex => &SEX_TO_DISEASE,
        Attribute::Bp => &BP_TO_DISEASE,
        Attribute::Chol => &CHOL_TO_DISEASE,
        Attribute::Thalach => &HR_TO_DISEASE,
        Attribute::Oldpeak => &OLDPEAK_TO_DISEASE,
        Attribute::Slope => &SLOPE_TO_DISEASE,
        Attribute::Ca => &CA_TO_DISEASE,
        Attribute::Thal => &THAL_TO_DISEASE,
        Attribute::Fbs => &FBS_TO_DISEASE,
        Attribute::Restecg => &RESTECG_TO_DISEASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_every_row_sums_to_one() {
        for attribute in Attribute::ALL {
            for (value, entry) in table_for(attribute).rows() {
                assert!(
                    entry.is_normalized(EPSILON),
                    "{}={} does not sum to 1.0",
                    attribute,
                    value
                );
            }
        }
    }

    #[test]
    fn test_tables_are_wired_to_their_attribute() {
        for attribute in Attribute::ALL {
            assert_eq!(table_for(attribute).attribute(), attribute);
        }
    }

    #[test]
    fn test_default_values_are_table_keys() {
        for attribute in Attribute::ALL {
            assert!(table_for(attribute).contains(attribute.default_value()));
        }
    }

    #[test]
    fn test_positive_lookup() {
        assert_eq!(BP_TO_DISEASE.positive("High_BP"), 0.52);
        assert_eq!(CA_TO_DISEASE.positive("3.0_Vessels"), 0.88);
        assert_eq!(SEX_TO_DISEASE.probability("Female", DiseaseState::Negative), 0.75);
    }

    #[test]
    fn test_unknown_value_degrades_to_zero() {
        assert_eq!(BP_TO_DISEASE.positive("Unknown_Bucket"), 0.0);
        assert_eq!(BP_TO_DISEASE.probability("normal", DiseaseState::Negative), 0.0);
        assert_eq!(SEX_TO_DISEASE.positive(""), 0.0);
    }
}
