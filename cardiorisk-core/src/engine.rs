// cardiorisk-core/src/engine.rs
//! Defines the core `RiskEngine` trait.
//!
//! The HTTP server and the CLI both score through this trait, so they never
//! depend on how an estimate is produced. Implementations must be stateless
//! across calls: any number of assessments may run in parallel.
//!
//! License: MIT OR APACHE 2.0

use cardiorisk_cpt::RawAssessment;

use crate::errors::Result;
use crate::patient::PatientRecord;
use crate::score::ScoreResult;

/// A trait that defines the core functionality of a risk engine.
pub trait RiskEngine: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Computes the unrounded assessment of a (possibly partial) record.
    ///
    /// Absent fields take their defaults. Whether out-of-enumeration values
    /// are tolerated is up to the implementation.
    fn assess(&self, record: &PatientRecord) -> Result<RawAssessment>;

    /// Computes the published, rounded result for a record.
    fn score(&self, record: &PatientRecord) -> Result<ScoreResult> {
        let raw = self.assess(record)?;
        Ok(ScoreResult::from_raw(&raw))
    }
}
