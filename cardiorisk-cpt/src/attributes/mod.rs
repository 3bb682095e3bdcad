// cardiorisk-cpt/src/attributes/mod.rs
//! The ten scored patient attributes and a fixed-size map keyed by them.
//!
//! Declaration order matters: it is the order in which probabilities are
//! accumulated and the tie-break order when factors are ranked.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

/// A categorical patient attribute that contributes to the disease estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Sex,
    Bp,
    Chol,
    Thalach,
    Oldpeak,
    Slope,
    Ca,
    Thal,
    Fbs,
    Restecg,
}

impl Attribute {
    pub const COUNT: usize = 10;

    /// Every scored attribute in declaration order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Sex,
        Attribute::Bp,
        Attribute::Chol,
        Attribute::Thalach,
        Attribute::Oldpeak,
        Attribute::Slope,
        Attribute::Ca,
        Attribute::Thal,
        Attribute::Fbs,
        Attribute::Restecg,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The wire identifier (`"bp"`, `"thalach"`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Sex => "sex",
            Attribute::Bp => "bp",
            Attribute::Chol => "chol",
            Attribute::Thalach => "thalach",
            Attribute::Oldpeak => "oldpeak",
            Attribute::Slope => "slope",
            Attribute::Ca => "ca",
            Attribute::Thal => "thal",
            Attribute::Fbs => "fbs",
            Attribute::Restecg => "restecg",
        }
    }

    /// Display label used when the attribute is reported as an influential factor.
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Sex => "Sex",
            Attribute::Bp => "Blood Pressure",
            Attribute::Chol => "Cholesterol",
            Attribute::Thalach => "Max Heart Rate",
            Attribute::Oldpeak => "ST Depression",
            Attribute::Slope => "ST Slope",
            Attribute::Ca => "Vessels Colored",
            Attribute::Thal => "Thalassemia",
            Attribute::Fbs => "Fasting Blood Sugar",
            Attribute::Restecg => "Resting ECG",
        }
    }

    /// Value assumed when a patient record leaves the attribute out.
    pub const fn default_value(self) -> &'static str {
        match self {
            Attribute::Sex => "Male",
            Attribute::Bp => "Normal",
            Attribute::Chol => "Desirable",
            Attribute::Thalach => "Normal_Rate",
            Attribute::Oldpeak => "No_Depression",
            Attribute::Slope => "Flat",
            Attribute::Ca => "0.0_Vessels",
            Attribute::Thal => "Normal",
            Attribute::Fbs => "Normal_Sugar",
            Attribute::Restecg => "Normal",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Attribute::ALL.iter().copied().find(|a| a.key() == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name one of the scored attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAttribute;

impl fmt::Display for UnknownAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a scored attribute")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAttribute {}

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::from_key(s).ok_or(UnknownAttribute)
    }
}

/// One value per scored attribute, stored inline and indexed by [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeMap<T>([T; Attribute::COUNT]);

impl<T> AttributeMap<T> {
    pub const fn new(values: [T; Attribute::COUNT]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Attribute) -> T) -> Self {
        Self(core::array::from_fn(|i| f(Attribute::ALL[i])))
    }

    pub fn get(&self, attribute: Attribute) -> &T {
        &self.0[attribute.index()]
    }

    /// Iterates `(attribute, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> + '_ {
        Attribute::ALL.iter().copied().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; Attribute::COUNT] {
        &self.0
    }
}

impl<T> Index<Attribute> for AttributeMap<T> {
    type Output = T;

    fn index(&self, attribute: Attribute) -> &T {
        &self.0[attribute.index()]
    }
}

impl<T> IndexMut<Attribute> for AttributeMap<T> {
    fn index_mut(&mut self, attribute: Attribute) -> &mut T {
        &mut self.0[attribute.index()]
    }
}
