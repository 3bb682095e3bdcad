// File: cardiorisk-core/src/validators.rs
//! Enumeration checks for patient records.
//!
//! Scoring never rejects a record: a value outside its enumeration simply
//! contributes zero. These helpers let callers find such values so they can
//! warn about them, or refuse the record when running in strict mode.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;

use crate::errors::{CardioRiskError, Result};
use crate::patient::{PatientField, PatientRecord};
use crate::reference::attribute_bins;

// Every field's accepted values, built once from the reference bins.
static KNOWN_VALUES: Lazy<HashMap<&'static str, HashSet<&'static str>>> = Lazy::new(|| {
    attribute_bins()
        .map(|(key, values)| (key, values.iter().copied().collect()))
        .collect()
});

/// A supplied field value that is not in that field's enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub field: PatientField,
    pub value: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}='{}'", self.field, self.value)
    }
}

/// Whether `value` is one of the enumerated values for `field`.
pub fn is_known_value(field: PatientField, value: &str) -> bool {
    KNOWN_VALUES
        .get(field.key())
        .is_some_and(|values| values.contains(value))
}

/// Lists every supplied value that falls outside its enumeration.
///
/// Absent fields are never reported; they resolve to their defaults.
pub fn find_invalid_values(record: &PatientRecord) -> Vec<InvalidValue> {
    PatientField::ALL
        .iter()
        .filter_map(|&field| {
            let value = record.get(field)?;
            (!is_known_value(field, value)).then(|| InvalidValue {
                field,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Rejects a record carrying any out-of-enumeration value.
pub fn validate_record(record: &PatientRecord) -> Result<()> {
    let invalid = find_invalid_values(record);
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CardioRiskError::InvalidValues(invalid))
    }
}

/// Human-readable form of an enumeration value.
///
/// `"2.0_Vessels"` becomes `"20 Vessels"`: underscores turn into spaces and
/// dots are dropped.
pub fn format_option_label(value: &str) -> String {
    value
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == '_' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert!(is_known_value(PatientField::Bp, "High_BP"));
        assert!(is_known_value(PatientField::Cp, "Non_Anginal"));
        assert!(is_known_value(PatientField::Age, "Old"));
        assert!(!is_known_value(PatientField::Bp, "high_bp"));
        assert!(!is_known_value(PatientField::Ca, "4.0_Vessels"));
    }

    #[test]
    fn test_baseline_is_valid() {
        assert!(validate_record(&PatientRecord::baseline()).is_ok());
        assert!(validate_record(&PatientRecord::new()).is_ok());
    }

    #[test]
    fn test_invalid_values_are_listed_in_field_order() {
        let record = PatientRecord::new()
            .with(PatientField::Thal, "Bogus")
            .with(PatientField::Sex, "Other");
        let invalid = find_invalid_values(&record);
        assert_eq!(invalid.len(), 2);
        assert_eq!(invalid[0].field, PatientField::Sex);
        assert_eq!(invalid[1].to_string(), "thal='Bogus'");

        let err = validate_record(&record).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("sex='Other'"));
    }

    #[test]
    fn test_format_option_label() {
        assert_eq!(format_option_label("2.0_Vessels"), "20 Vessels");
        assert_eq!(format_option_label("Reversible_Defect"), "Reversible Defect");
        assert_eq!(format_option_label("Male"), "Male");
    }
}
