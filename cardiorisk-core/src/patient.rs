//! Patient records as submitted by callers.
//!
//! A record carries thirteen optional categorical fields. Ten of them are
//! scored; `age`, `exang` and `cp` are accepted and echoed into reference data
//! but never influence the estimate. Any scored field left out (or sent as
//! JSON `null`) takes its baseline value.

use serde::{Deserialize, Serialize};
use std::fmt;

use cardiorisk_cpt::{Attribute, AttributeMap};

/// Every field a patient record may carry, in input-panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Age,
    Sex,
    Bp,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
    Cp,
}

impl PatientField {
    pub const ALL: [PatientField; 13] = [
        PatientField::Age,
        PatientField::Sex,
        PatientField::Bp,
        PatientField::Chol,
        PatientField::Fbs,
        PatientField::Restecg,
        PatientField::Thalach,
        PatientField::Exang,
        PatientField::Oldpeak,
        PatientField::Slope,
        PatientField::Ca,
        PatientField::Thal,
        PatientField::Cp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PatientField::Age => "age",
            PatientField::Exang => "exang",
            PatientField::Cp => "cp",
            PatientField::Sex => "sex",
            PatientField::Bp => "bp",
            PatientField::Chol => "chol",
            PatientField::Fbs => "fbs",
            PatientField::Restecg => "restecg",
            PatientField::Thalach => "thalach",
            PatientField::Oldpeak => "oldpeak",
            PatientField::Slope => "slope",
            PatientField::Ca => "ca",
            PatientField::Thal => "thal",
        }
    }

    /// The scored attribute behind this field, if it is scored at all.
    pub fn scored(self) -> Option<Attribute> {
        match self {
            PatientField::Sex => Some(Attribute::Sex),
            PatientField::Bp => Some(Attribute::Bp),
            PatientField::Chol => Some(Attribute::Chol),
            PatientField::Fbs => Some(Attribute::Fbs),
            PatientField::Restecg => Some(Attribute::Restecg),
            PatientField::Thalach => Some(Attribute::Thalach),
            PatientField::Oldpeak => Some(Attribute::Oldpeak),
            PatientField::Slope => Some(Attribute::Slope),
            PatientField::Ca => Some(Attribute::Ca),
            PatientField::Thal => Some(Attribute::Thal),
            PatientField::Age | PatientField::Exang | PatientField::Cp => None,
        }
    }

    /// Form label shown next to the input control.
    pub fn label(self) -> &'static str {
        match self {
            PatientField::Age => "Age Group",
            PatientField::Sex => "Biological Sex",
            PatientField::Bp => "Blood Pressure",
            PatientField::Chol => "Cholesterol Level",
            PatientField::Fbs => "Fasting Blood Sugar",
            PatientField::Restecg => "Resting ECG",
            PatientField::Thalach => "Max Heart Rate",
            PatientField::Exang => "Exercise Induced Angina",
            PatientField::Oldpeak => "ST Depression (Oldpeak)",
            PatientField::Slope => "ST Slope",
            PatientField::Ca => "Major Vessels Colored",
            PatientField::Thal => "Thalassemia",
            PatientField::Cp => "Chest Pain Type",
        }
    }

    pub fn default_value(self) -> &'static str {
        match (self, self.scored()) {
            (_, Some(attribute)) => attribute.default_value(),
            (PatientField::Age, None) => "Middle",
            (PatientField::Exang, None) => "No",
            (_, None) => "Asymptomatic",
        }
    }

    pub fn group(self) -> AttributeGroup {
        match self {
            PatientField::Age | PatientField::Sex => AttributeGroup::Demographics,
            PatientField::Bp
            | PatientField::Chol
            | PatientField::Fbs
            | PatientField::Restecg
            | PatientField::Thal => AttributeGroup::ClinicalFactors,
            PatientField::Thalach | PatientField::Oldpeak | PatientField::Slope | PatientField::Ca => {
                AttributeGroup::ExerciseTestResults
            }
            PatientField::Exang | PatientField::Cp => AttributeGroup::Symptoms,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        PatientField::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl fmt::Display for PatientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Input-panel section a field is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeGroup {
    Demographics,
    ClinicalFactors,
    ExerciseTestResults,
    Symptoms,
}

impl AttributeGroup {
    pub const ALL: [AttributeGroup; 4] = [
        AttributeGroup::Demographics,
        AttributeGroup::ClinicalFactors,
        AttributeGroup::ExerciseTestResults,
        AttributeGroup::Symptoms,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AttributeGroup::Demographics => "Demographics",
            AttributeGroup::ClinicalFactors => "Clinical Factors",
            AttributeGroup::ExerciseTestResults => "Exercise Test Results",
            AttributeGroup::Symptoms => "Symptoms",
        }
    }

    pub fn fields(self) -> impl Iterator<Item = PatientField> {
        PatientField::ALL.into_iter().filter(move |f| f.group() == self)
    }
}

/// A (possibly partial) patient record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fbs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restecg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thalach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldpeak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp: Option<String>,
}

impl PatientRecord {
    /// An empty record; every field resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// The complete baseline record with every field set explicitly.
    pub fn baseline() -> Self {
        let mut record = Self::new();
        for field in PatientField::ALL {
            record.set(field, field.default_value());
        }
        record
    }

    /// Parses a record from a JSON body.
    pub fn from_json(body: &[u8]) -> crate::errors::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn get(&self, field: PatientField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: PatientField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Builder-style [`PatientRecord::set`].
    pub fn with(mut self, field: PatientField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The value a field is scored with: the supplied one, or its default.
    pub fn resolved(&self, field: PatientField) -> &str {
        self.get(field).unwrap_or_else(|| field.default_value())
    }

    /// The ten scored values, defaults substituted, indexed by attribute.
    pub fn scored_values(&self) -> AttributeMap<&str> {
        AttributeMap::from_fn(|attribute| match self.get(field_of(attribute)) {
            Some(value) => value,
            None => attribute.default_value(),
        })
    }

    fn slot(&self, field: PatientField) -> &Option<String> {
        match field {
            PatientField::Age => &self.age,
            PatientField::Sex => &self.sex,
            PatientField::Bp => &self.bp,
            PatientField::Chol => &self.chol,
            PatientField::Fbs => &self.fbs,
            PatientField::Restecg => &self.restecg,
            PatientField::Thalach => &self.thalach,
            PatientField::Exang => &self.exang,
            PatientField::Oldpeak => &self.oldpeak,
            PatientField::Slope => &self.slope,
            PatientField::Ca => &self.ca,
            PatientField::Thal => &self.thal,
            PatientField::Cp => &self.cp,
        }
    }

    fn slot_mut(&mut self, field: PatientField) -> &mut Option<String> {
        match field {
            PatientField::Age => &mut self.age,
            PatientField::Sex => &mut self.sex,
            PatientField::Bp => &mut self.bp,
            PatientField::Chol => &mut self.chol,
            PatientField::Fbs => &mut self.fbs,
            PatientField::Restecg => &mut self.restecg,
            PatientField::Thalach => &mut self.thalach,
            PatientField::Exang => &mut self.exang,
            PatientField::Oldpeak => &mut self.oldpeak,
            PatientField::Slope => &mut self.slope,
            PatientField::Ca => &mut self.ca,
            PatientField::Thal => &mut self.thal,
            PatientField::Cp => &mut self.cp,
        }
    }
}

/// The record field that carries a scored attribute.
pub fn field_of(attribute: Attribute) -> PatientField {
    match attribute {
        Attribute::Sex => PatientField::Sex,
        Attribute::Bp => PatientField::Bp,
        Attribute::Chol => PatientField::Chol,
        Attribute::Thalach => PatientField::Thalach,
        Attribute::Oldpeak => PatientField::Oldpeak,
        Attribute::Slope => PatientField::Slope,
        Attribute::Ca => PatientField::Ca,
        Attribute::Thal => PatientField::Thal,
        Attribute::Fbs => PatientField::Fbs,
        Attribute::Restecg => PatientField::Restecg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_empty_record() {
        let record = PatientRecord::from_json(b"{}").unwrap();
        assert_eq!(record, PatientRecord::new());
        assert_eq!(record.resolved(PatientField::Ca), "0.0_Vessels");
    }

    #[test]
    fn test_null_counts_as_absent() {
        let record = PatientRecord::from_json(br#"{"bp": null, "sex": "Female"}"#).unwrap();
        assert_eq!(record.bp, None);
        assert_eq!(record.resolved(PatientField::Bp), "Normal");
        assert_eq!(record.resolved(PatientField::Sex), "Female");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record = PatientRecord::from_json(br#"{"smoker": "Yes", "cp": "Typical_Angina"}"#).unwrap();
        assert_eq!(record.cp.as_deref(), Some("Typical_Angina"));
    }

    #[test]
    fn test_non_string_value_is_malformed() {
        assert!(PatientRecord::from_json(br#"{"bp": 140}"#).is_err());
        assert!(PatientRecord::from_json(b"[1, 2]").is_err());
        assert!(PatientRecord::from_json(b"").is_err());
    }

    #[test]
    fn test_baseline_sets_every_field() {
        let baseline = PatientRecord::baseline();
        for field in PatientField::ALL {
            assert_eq!(baseline.get(field), Some(field.default_value()));
        }
        assert_eq!(baseline.age.as_deref(), Some("Middle"));
        assert_eq!(baseline.cp.as_deref(), Some("Asymptomatic"));
    }

    #[test]
    fn test_scored_values_follow_attribute_order() {
        let record = PatientRecord::new().with(PatientField::Thal, "Fixed_Defect");
        let values = record.scored_values();
        assert_eq!(values[Attribute::Thal], "Fixed_Defect");
        assert_eq!(values[Attribute::Sex], "Male");
    }

    #[test]
    fn test_field_keys_and_groups() {
        for field in PatientField::ALL {
            assert_eq!(PatientField::from_key(field.key()), Some(field));
        }
        let clinical: Vec<_> = AttributeGroup::ClinicalFactors.fields().map(PatientField::key).collect();
        assert_eq!(clinical, ["bp", "chol", "fbs", "restecg", "thal"]);
        assert_eq!(PatientField::Cp.scored(), None);
        assert_eq!(field_of(Attribute::Ca), PatientField::Ca);
    }
}
