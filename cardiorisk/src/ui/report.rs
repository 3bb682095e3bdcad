// cardiorisk/src/ui/report.rs
//! Human-readable reports: the scored result and the attribute catalogue.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::{self, Write};

use cardiorisk_core::reference::bins;
use cardiorisk_core::{format_option_label, AttributeGroup, PatientRecord, ScoreResult};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

/// Writes the risk summary, the top factors and every attribute probability.
pub fn print_score_report<W: Write>(
    writer: &mut W,
    record: &PatientRecord,
    result: &ScoreResult,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let level = result.risk_level();
    writeln!(writer, "{}", paint("Heart Disease Risk Assessment", ThemeEntry::Header, theme, enable_colors))?;
    writeln!(
        writer,
        "{}  {}",
        paint(
            &format!("{:.2}%", result.disease_probability),
            ThemeEntry::for_risk(level),
            theme,
            enable_colors
        ),
        paint(&level.to_string(), ThemeEntry::for_risk(level), theme, enable_colors),
    )?;
    writeln!(writer, "{}", level.description())?;
    writeln!(
        writer,
        "positive {:.4} | negative {:.4} | confidence {:.4}",
        result.positive_prob, result.negative_prob, result.confidence
    )?;
    writeln!(writer)?;

    let mut factors = Table::new();
    factors
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Factor", "P(disease)", "Influence", "Band"]);
    for (i, factor) in result.top_factors.iter().enumerate() {
        let band = factor.band();
        factors.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&factor.label),
            Cell::new(format!("{:.4}", factor.probability)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", factor.influence)).set_alignment(CellAlignment::Right),
            Cell::new(paint(&band.to_string(), ThemeEntry::for_influence(band), theme, enable_colors)),
        ]);
    }
    writeln!(writer, "{}", paint("Top factors", ThemeEntry::Label, theme, enable_colors))?;
    writeln!(writer, "{factors}")?;
    writeln!(writer)?;

    let mut all = Table::new();
    all.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Attribute", "Value", "P(disease)"]);
    for (attribute, probability) in result.all_probabilities.iter() {
        let field = cardiorisk_core::patient::field_of(attribute);
        all.add_row(vec![
            Cell::new(attribute.label()),
            Cell::new(record.resolved(field)),
            Cell::new(format!("{:.4}", probability)).set_alignment(CellAlignment::Right),
        ]);
    }
    writeln!(writer, "{}", paint("All attributes", ThemeEntry::Label, theme, enable_colors))?;
    writeln!(writer, "{all}")?;
    Ok(())
}

/// Writes every input field, grouped as on the input panel.
pub fn print_attribute_catalogue<W: Write>(writer: &mut W, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    for group in AttributeGroup::ALL {
        writeln!(writer, "{}", paint(group.title(), ThemeEntry::Header, theme, enable_colors))?;
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Field", "Label", "Accepted values", "Default", "Scored"]);
        for field in group.fields() {
            let values = bins(field.key())
                .unwrap_or_default()
                .iter()
                .map(|v| format!("{} ({})", v, format_option_label(v)))
                .collect::<Vec<_>>()
                .join("\n");
            table.add_row(vec![
                Cell::new(field.key()),
                Cell::new(field.label()),
                Cell::new(values),
                Cell::new(field.default_value()),
                Cell::new(if field.scored().is_some() { "yes" } else { "no" }),
            ]);
        }
        writeln!(writer, "{table}")?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use cardiorisk_core::{RiskEngine, WeightedAverageEngine};

    #[test]
    fn test_score_report_plain() {
        let record = PatientRecord::new();
        let result = WeightedAverageEngine::new().score(&record).unwrap();
        let mut out = Vec::new();
        print_score_report(&mut out, &record, &result, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("40.38%  Moderate Risk"));
        assert!(text.contains("Thalassemia"));
        assert!(text.contains("24.0"));
        assert!(text.contains("0.0_Vessels"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_attribute_catalogue_lists_groups() {
        let mut out = Vec::new();
        print_attribute_catalogue(&mut out, &ThemeStyle::default_theme_map(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        for title in ["Demographics", "Clinical Factors", "Exercise Test Results", "Symptoms"] {
            assert!(text.contains(title));
        }
        assert!(text.contains("Reversible Defect"));
        assert!(text.contains("Chest Pain Type"));
    }
}
