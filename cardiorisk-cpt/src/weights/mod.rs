// cardiorisk-cpt/src/weights/mod.rs

use crate::attributes::{Attribute, AttributeMap};

/// Relative predictive importance of each scored attribute.
///
/// The weights are fixed, not learned, and need not sum to 1; the scorer
/// divides by [`WeightTable::total`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable(AttributeMap<f64>);

impl WeightTable {
    /// The weighting used for every published assessment.
    pub const STANDARD: WeightTable = WeightTable(AttributeMap::new([
        1.0, // sex
        0.9, // bp
        0.9, // chol
        1.1, // thalach
        1.5, // oldpeak
        1.2, // slope
        1.4, // ca
        1.3, // thal
        0.7, // fbs
        0.8, // restecg
    ]));

    pub fn weight(&self, attribute: Attribute) -> f64 {
        self.0[attribute]
    }

    /// Sum of all weights, accumulated in declaration order.
    pub fn total(&self) -> f64 {
        self.0.values().iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.0.iter().map(|(attribute, weight)| (attribute, *weight))
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        WeightTable::STANDARD
    }
}
