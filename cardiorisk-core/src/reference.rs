// cardiorisk-core/src/reference.rs
//! Static reference data: the causal-network diagram, the valid values of every
//! attribute and the estimation metadata.
//!
//! Everything here is informational. The scorer does not read the network; it
//! exists so that clients can draw the diagram and build their input forms.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use cardiorisk_cpt::{table_for, DiseaseState};

use crate::patient::PatientField;

/// Equivalent sample size used when the tables were estimated.
pub const ESS_VALUE: u32 = 10;

/// How the tables were estimated.
pub const ESTIMATION_METHOD: &str = "BayesianEstimator with BDeu Prior";

/// A node of the network diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    /// Layer of the diagram, 1 (demographics) to 5 (symptoms).
    pub tier: u8,
    pub x: i32,
    pub y: i32,
}

/// A directed edge of the network diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStructure {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl NetworkStructure {
    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Ids of the nodes with an edge into `id`.
    pub fn parents<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.target == id)
            .map(|e| e.source.as_str())
    }
}

/// Valid values per attribute, serialized in a fixed key order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBins(Vec<(String, Vec<String>)>);

impl AttributeBins {
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for AttributeBins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in &self.0 {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub ess_value: u32,
    pub estimation_method: String,
    pub attribute_bins: AttributeBins,
}

/// The full answer to a reference-data query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceData {
    pub network: NetworkStructure,
    pub metadata: Metadata,
}

// (id, label, tier, x, y)
const NODES: [(&str, &str, u8, i32, i32); 14] = [
    ("age", "Age", 1, 200, 50),
    ("sex", "Sex", 1, 400, 50),
    ("bp", "Blood Pressure", 2, 100, 150),
    ("chol", "Cholesterol", 2, 250, 150),
    ("fbs", "Fasting Blood Sugar", 2, 400, 200),
    ("restecg", "Resting ECG", 2, 550, 200),
    ("thal", "Thalassemia", 2, 500, 150),
    ("thalach", "Max Heart Rate", 3, 150, 300),
    ("oldpeak", "ST Depression", 3, 300, 300),
    ("slope", "Slope", 3, 450, 300),
    ("ca", "Vessels Colored", 3, 600, 300),
    ("disease", "Heart Disease", 4, 350, 450),
    ("cp", "Chest Pain", 5, 250, 600),
    ("exang", "Exercise Angina", 5, 450, 600),
];

const EDGES: [(&str, &str); 20] = [
    ("sex", "bp"),
    ("age", "bp"),
    ("sex", "chol"),
    ("age", "chol"),
    ("age", "thalach"),
    ("age", "ca"),
    ("chol", "ca"),
    ("thalach", "ca"),
    ("sex", "disease"),
    ("bp", "disease"),
    ("chol", "disease"),
    ("thalach", "disease"),
    ("oldpeak", "disease"),
    ("slope", "disease"),
    ("ca", "disease"),
    ("thal", "disease"),
    ("fbs", "disease"),
    ("restecg", "disease"),
    ("disease", "cp"),
    ("disease", "exang"),
];

const AGE_BINS: &[&str] = &["Young", "Middle", "Old"];
const EXANG_BINS: &[&str] = &["No", "Yes"];
const CP_BINS: &[&str] = &["Typical_Angina", "Atypical_Angina", "Non_Anginal", "Asymptomatic"];

/// Published key order of `attribute_bins`.
const BIN_ORDER: [&str; 14] = [
    "age", "sex", "bp", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak", "slope", "ca",
    "thal", "cp", "disease",
];

static BINS: Lazy<Vec<(&'static str, Vec<&'static str>)>> = Lazy::new(|| {
    BIN_ORDER
        .iter()
        .map(|&key| (key, bins_for(key)))
        .collect()
});

fn bins_for(key: &'static str) -> Vec<&'static str> {
    match key {
        "age" => AGE_BINS.to_vec(),
        "exang" => EXANG_BINS.to_vec(),
        "cp" => CP_BINS.to_vec(),
        "disease" => DiseaseState::ALL.iter().map(|s| s.as_str()).collect(),
        _ => PatientField::from_key(key)
            .and_then(PatientField::scored)
            .map(|attribute| table_for(attribute).values().collect())
            .unwrap_or_default(),
    }
}

/// Every attribute's valid values, in published order (the `disease` node last).
pub fn attribute_bins() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    BINS.iter().map(|(key, values)| (*key, values.as_slice()))
}

/// Valid values of a single attribute or of `disease`.
pub fn bins(key: &str) -> Option<&'static [&'static str]> {
    attribute_bins().find(|(k, _)| *k == key).map(|(_, v)| v)
}

static REFERENCE: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    network: NetworkStructure {
        nodes: NODES
            .iter()
            .map(|&(id, label, tier, x, y)| NetworkNode {
                id: id.to_string(),
                label: label.to_string(),
                tier,
                x,
                y,
            })
            .collect(),
        edges: EDGES
            .iter()
            .map(|&(source, target)| NetworkEdge {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect(),
    },
    metadata: Metadata {
        ess_value: ESS_VALUE,
        estimation_method: ESTIMATION_METHOD.to_string(),
        attribute_bins: AttributeBins(
            attribute_bins()
                .map(|(key, values)| {
                    (key.to_string(), values.iter().map(|v| v.to_string()).collect())
                })
                .collect(),
        ),
    },
});

/// The reference data, built on first use and shared afterwards.
pub fn reference_data() -> &'static ReferenceData {
    &REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_network_shape() {
        let network = &reference_data().network;
        assert_eq!(network.nodes.len(), 14);
        assert_eq!(network.edges.len(), 20);

        let ids: HashSet<_> = network.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), 14);
        for edge in &network.edges {
            assert!(ids.contains(edge.source.as_str()), "dangling {}", edge.source);
            assert!(ids.contains(edge.target.as_str()), "dangling {}", edge.target);
        }
    }

    #[test]
    fn test_disease_has_ten_parents() {
        let network = &reference_data().network;
        let parents: Vec<_> = network.parents("disease").collect();
        assert_eq!(
            parents,
            ["sex", "bp", "chol", "thalach", "oldpeak", "slope", "ca", "thal", "fbs", "restecg"]
        );
        let disease = network.node("disease").unwrap();
        assert_eq!((disease.tier, disease.x, disease.y), (4, 350, 450));
    }

    #[test]
    fn test_bins_order_and_content() {
        let keys: Vec<_> = attribute_bins().map(|(k, _)| k).collect();
        assert_eq!(keys, BIN_ORDER);
        assert_eq!(bins("age"), Some(AGE_BINS));
        assert_eq!(bins("disease"), Some(&["Negative", "Positive"][..]));
        assert_eq!(bins("ca").map(<[_]>::len), Some(5));
        assert_eq!(bins("unknown"), None);
    }

    #[test]
    fn test_metadata_json() {
        let json = serde_json::to_value(reference_data()).unwrap();
        assert_eq!(json["metadata"]["ess_value"], 10);
        assert_eq!(json["metadata"]["estimation_method"], ESTIMATION_METHOD);
        assert_eq!(json["network"]["edges"][0]["source"], "sex");
        assert_eq!(json["network"]["edges"][0]["target"], "bp");
        assert_eq!(json["metadata"]["attribute_bins"]["sex"][0], "Female");
    }

    #[test]
    fn test_bins_serialize_in_published_order() {
        let text = serde_json::to_string(&reference_data().metadata.attribute_bins).unwrap();
        let age = text.find("\"age\"").unwrap();
        let cp = text.find("\"cp\"").unwrap();
        let disease = text.find("\"disease\"").unwrap();
        assert!(age < cp && cp < disease);
    }
}
