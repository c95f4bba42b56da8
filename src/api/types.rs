//! Wire types for the analysis service.
//!
//! Two response shapes exist: single-image (`/analyze`) and batch
//! (`/analyze-multiple`). Which fields are present is fully determined by
//! which endpoint was called, so the outcome is a tagged variant instead of
//! one struct with optional fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open-ended attribute mapping from the service, e.g. `body_style` →
/// `"Sedan"`. Keys are not enumerated client-side; iteration order follows
/// the response document (serde_json `preserve_order`).
pub type CharacteristicsMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceEstimation {
    pub estimated_price_range: String,
    pub base_price: f64,
    pub brand_factor: f64,
    pub condition_factor: f64,
}

/// Per-image result inside a batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualAnalysis {
    pub image_name: String,
    /// Service-reported certainty in [0, 1].
    pub confidence_score: f64,
    pub characteristics: CharacteristicsMap,
    #[serde(default)]
    pub analysis_notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub analysis_quality: String,
    pub overall_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleAnalysis {
    pub characteristics: CharacteristicsMap,
    pub price_estimation: PriceEstimation,
    #[serde(default)]
    pub raw_analysis: String,
    #[serde(default)]
    pub analysis_date: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub images_processed: u32,
    pub consolidated_characteristics: CharacteristicsMap,
    pub individual_analyses: Vec<IndividualAnalysis>,
    pub analysis_summary: AnalysisSummary,
    pub price_estimation: PriceEstimation,
    #[serde(default)]
    pub analysis_date: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Result of one successful analysis request. Immutable once produced.
///
/// Untagged so a saved outcome JSON round-trips: the batch shape is
/// recognized by its `individual_analyses` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Batch(BatchAnalysis),
    Single(SingleAnalysis),
}

impl AnalysisOutcome {
    /// Consolidated characteristics for a batch, direct for a single image.
    pub fn characteristics(&self) -> &CharacteristicsMap {
        match self {
            AnalysisOutcome::Batch(batch) => &batch.consolidated_characteristics,
            AnalysisOutcome::Single(single) => &single.characteristics,
        }
    }

    pub fn price_estimation(&self) -> &PriceEstimation {
        match self {
            AnalysisOutcome::Batch(batch) => &batch.price_estimation,
            AnalysisOutcome::Single(single) => &single.price_estimation,
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, AnalysisOutcome::Batch(_))
    }
}

/// Error response body; a missing body is treated as an empty object.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Displayable form of a characteristics value. The service sends strings,
/// but unexpected scalar values still render rather than fail.
pub fn display_value(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
