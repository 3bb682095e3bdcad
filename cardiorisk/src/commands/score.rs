// cardiorisk/src/commands/score.rs
//! `score`: one-shot scoring of a record from a file, stdin or `--set` flags.

use anyhow::{anyhow, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io::{self, Read, Write};

use cardiorisk_core::{
    find_invalid_values, PatientField, PatientRecord, RiskEngine, ValuePolicy, WeightedAverageEngine,
};

use crate::cli::ScoreCommand;
use crate::ui::output_format::{info_msg, warn_msg};
use crate::ui::report::print_score_report;
use crate::ui::theme::ThemeMap;

/// Reads the base record: the file if given, else stdin when it is piped,
/// else an empty record.
fn read_record(cmd: &ScoreCommand, theme: &ThemeMap) -> Result<PatientRecord> {
    let body = match &cmd.input_file {
        Some(path) => {
            info_msg(format!("Reading patient record from {}", path.display()), theme);
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None if !io::stdin().is_terminal() => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("Failed to read stdin")?;
            buf
        }
        None => Vec::new(),
    };

    if body.iter().all(u8::is_ascii_whitespace) {
        debug!("No record supplied; starting from an empty record.");
        return Ok(PatientRecord::new());
    }
    PatientRecord::from_json(&body).context("Invalid patient record")
}

/// Applies `FIELD=VALUE` overrides to a record.
pub fn apply_assignments(mut record: PatientRecord, assignments: &[String]) -> Result<PatientRecord> {
    for assignment in assignments {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got '{}'", assignment))?;
        let field = PatientField::from_key(key.trim())
            .ok_or_else(|| anyhow!("Unknown field '{}'", key.trim()))?;
        record.set(field, value.trim());
    }
    Ok(record)
}

pub fn run_score(cmd: &ScoreCommand, theme: &ThemeMap) -> Result<()> {
    let record = apply_assignments(read_record(cmd, theme)?, &cmd.set)?;

    let policy = if cmd.strict { ValuePolicy::Strict } else { ValuePolicy::Lenient };
    if policy == ValuePolicy::Lenient {
        for invalid in find_invalid_values(&record) {
            warn_msg(format!("{} is not an accepted value; it is scored as 0.0", invalid), theme);
        }
    }

    let engine = WeightedAverageEngine::with_policy(policy);
    let result = engine.score(&record).context("Scoring failed")?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string(&result)?)?;
    } else {
        let supports_color = stdout.is_terminal();
        print_score_report(&mut writer, &record, &result, theme, supports_color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_assignments() {
        let record = apply_assignments(
            PatientRecord::new(),
            &["bp=High_BP".to_string(), " cp = Non_Anginal ".to_string()],
        )
        .unwrap();
        assert_eq!(record.bp.as_deref(), Some("High_BP"));
        assert_eq!(record.cp.as_deref(), Some("Non_Anginal"));
    }

    #[test]
    fn test_apply_assignments_rejects_bad_input() {
        assert!(apply_assignments(PatientRecord::new(), &["bp".to_string()]).is_err());
        assert!(apply_assignments(PatientRecord::new(), &["smoker=Yes".to_string()]).is_err());
    }
}
