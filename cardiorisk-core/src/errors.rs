//! errors.rs - Custom error types for the cardiorisk-core library.
//!
//! The taxonomy follows the two failure classes of the calculator: input
//! errors, where the caller sent something unusable, and internal errors,
//! where something went wrong on our side.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::validators::InvalidValue;

/// All possible error types in the `cardiorisk-core` library.
///
/// `#[non_exhaustive]` so that new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CardioRiskError {
    #[error("Malformed patient record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("Patient record contains {} value(s) outside their enumeration: {}", .0.len(), format_invalid(.0))]
    InvalidValues(Vec<InvalidValue>),

    #[error("Failed to serialize response: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl CardioRiskError {
    /// Whether the error was caused by the caller's input rather than by us.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CardioRiskError::MalformedRecord(_) | CardioRiskError::InvalidValues(_)
        )
    }
}

fn format_invalid(values: &[InvalidValue]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias used throughout the core crate.
pub type Result<T, E = CardioRiskError> = std::result::Result<T, E>;
