//! Report generation.
//!
//! `build_report` is a pure function from an analysis outcome plus a
//! timestamp to a paginated document; `export_report` renders it to a PDF
//! with a filename derived from the detected make/model.

pub mod document;
pub mod layout;
pub mod pdf;

use crate::api::{display_value, AnalysisOutcome};
use crate::error::Result;
use chrono::{DateTime, Datelike, Local};
use document::{stamp_chrome, Align, Composer, ReportDocument, TableTheme};
use layout::{INK, MUTED};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const PRODUCT_NAME: &str = "AI Car Analyzer";
pub const REPORT_TITLE: &str = "AI-Powered Car Analysis Report";
const REPORT_SUBTITLE: &str =
    "This report was generated using advanced AI image recognition technology";

const DISCLAIMER: &str = "This estimation is based on AI analysis of the provided images and \
    should be considered as a reference only. The actual value may vary depending on market \
    conditions, specific details not visible in the images, and other factors. We recommend \
    consulting with a professional appraiser for an official valuation.";

/// Assembles the report document. Section order is fixed; a long
/// characteristics table flows onto extra pages and the chrome pass stamps
/// every page once the total count is known.
pub fn build_report(outcome: &AnalysisOutcome, generated_at: DateTime<Local>) -> ReportDocument {
    let mut c = Composer::new();

    c.line(
        format!("Generated on: {}", format_generated_at(generated_at)),
        10.0,
        MUTED,
        Align::Right,
    );
    c.advance(3.0);
    c.line(REPORT_TITLE, 14.0, INK, Align::Center);
    c.line(REPORT_SUBTITLE, 10.0, MUTED, Align::Center);
    c.advance(6.0);

    c.heading("Car Characteristics");
    let characteristic_rows: Vec<_> = outcome
        .characteristics()
        .iter()
        .map(|(key, value)| (title_case_key(key), display_value(value)))
        .collect();
    c.table(
        Some(("Characteristic", "Value")),
        &characteristic_rows,
        TableTheme::Striped,
    );
    c.section_gap();

    let price = outcome.price_estimation();
    c.heading("Price Estimation");
    c.table(
        None,
        &[
            (
                "Estimated Price Range".to_string(),
                price.estimated_price_range.clone(),
            ),
            ("Base Price".to_string(), format_grouped(price.base_price)),
            ("Brand Factor".to_string(), format!("{}x", price.brand_factor)),
            (
                "Condition Factor".to_string(),
                format!("{}x", price.condition_factor),
            ),
        ],
        TableTheme::Grid,
    );
    c.section_gap();

    c.line("Disclaimer:", 10.0, MUTED, Align::Left);
    c.paragraph(DISCLAIMER, 9.0, MUTED);

    if let AnalysisOutcome::Batch(batch) = outcome {
        c.section_gap();
        c.heading("Analysis Confidence Metrics");
        c.table(
            None,
            &[
                (
                    "Images Processed".to_string(),
                    batch.images_processed.to_string(),
                ),
                (
                    "Analysis Quality".to_string(),
                    batch.analysis_summary.analysis_quality.clone(),
                ),
                (
                    "Overall Confidence".to_string(),
                    format_confidence(batch.analysis_summary.overall_confidence),
                ),
            ],
            TableTheme::Plain,
        );
    }

    let mut report = c.finish(REPORT_TITLE);
    stamp_chrome(&mut report, PRODUCT_NAME, generated_at.year());
    report
}

/// Builds the report and writes it into `output_dir` under the derived
/// filename. Report failures never touch session state; the caller surfaces
/// them as a one-line alert.
pub fn export_report(
    outcome: &AnalysisOutcome,
    output_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let report = build_report(outcome, generated_at);
    let path = output_dir.join(report_filename(outcome, generated_at));
    pdf::save_report(&report, &path)?;
    Ok(path)
}

/// `body_style` → `Body Style`. Only the first letter of each word is
/// touched; the rest keeps whatever case the service sent.
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Thousands-grouped price. A fraction is kept only when one exists, with
/// trailing zeros trimmed, so `1500.5` renders as `1,500.5`.
pub fn format_grouped(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }

    let fraction = (value - value.trunc()).abs();
    if fraction > 1e-9 {
        let frac = format!("{fraction:.3}");
        let frac = frac.trim_start_matches('0').trim_end_matches('0');
        if frac != "." {
            grouped.push_str(frac);
        }
    }
    grouped
}

/// Confidence in [0, 1] as a rounded percentage.
pub fn format_confidence(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

/// Long human-readable form, e.g. "August 29, 2026 at 02:45 PM".
pub fn format_generated_at(timestamp: DateTime<Local>) -> String {
    timestamp.format("%B %-d, %Y at %I:%M %p").to_string()
}

fn named_value(characteristics: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    characteristics
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty() && *s != "Unknown")
        .map(|s| s.to_lowercase())
}

/// `toyota-corolla-analysis-report-2026-08-29T10-30-00.pdf`, falling back to
/// the plain base name when make is missing or the Unknown sentinel.
pub fn report_filename(outcome: &AnalysisOutcome, generated_at: DateTime<Local>) -> String {
    let characteristics = outcome.characteristics();

    let base = match named_value(characteristics, "make") {
        Some(make) => match named_value(characteristics, "model") {
            Some(model) => format!("{make}-{model}-analysis-report"),
            None => format!("{make}-analysis-report"),
        },
        None => "car-analysis-report".to_string(),
    };

    // filesystem-safe timestamp, whole-second precision
    format!("{base}-{}.pdf", generated_at.format("%Y-%m-%dT%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn single_outcome(characteristics: serde_json::Value) -> AnalysisOutcome {
        serde_json::from_value(json!({
            "characteristics": characteristics,
            "price_estimation": {
                "estimated_price_range": "$10,000-$12,000",
                "base_price": 11000,
                "brand_factor": 1.1,
                "condition_factor": 0.95
            }
        }))
        .expect("outcome")
    }

    fn timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 29, 14, 30, 5).unwrap()
    }

    #[test]
    fn test_title_case_key() {
        assert_eq!(title_case_key("body_style"), "Body Style");
        assert_eq!(title_case_key("make"), "Make");
        assert_eq!(title_case_key("estimated_year_range"), "Estimated Year Range");
        assert_eq!(title_case_key(""), "");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(11000.0), "11,000");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1234567.0), "1,234,567");
        assert_eq!(format_grouped(0.0), "0");
    }

    #[test]
    fn test_format_grouped_fraction_drops_trailing_zeros() {
        assert_eq!(format_grouped(1500.5), "1,500.5");
        assert_eq!(format_grouped(1500.25), "1,500.25");
        assert_eq!(format_grouped(12500.125), "12,500.125");
    }

    #[test]
    fn test_format_confidence_rounds() {
        assert_eq!(format_confidence(0.842), "84%");
        assert_eq!(format_confidence(0.845), "85%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.0), "0%");
    }

    #[test]
    fn test_filename_with_make_and_model() {
        let outcome = single_outcome(json!({"make": "Toyota", "model": "Corolla"}));
        let name = report_filename(&outcome, timestamp());
        assert!(name.starts_with("toyota-corolla-analysis-report-"));
        assert!(name.ends_with(".pdf"));
        assert_eq!(name, "toyota-corolla-analysis-report-2026-08-29T14-30-05.pdf");
    }

    #[test]
    fn test_filename_make_only() {
        let outcome = single_outcome(json!({"make": "Honda", "model": "Unknown"}));
        let name = report_filename(&outcome, timestamp());
        assert!(name.starts_with("honda-analysis-report-"));
    }

    #[test]
    fn test_filename_unknown_make_falls_back() {
        let outcome = single_outcome(json!({"make": "Unknown"}));
        let name = report_filename(&outcome, timestamp());
        assert!(name.starts_with("car-analysis-report-"));
    }

    #[test]
    fn test_generated_at_format() {
        let formatted = format_generated_at(timestamp());
        assert_eq!(formatted, "August 29, 2026 at 02:30 PM");
    }
}
