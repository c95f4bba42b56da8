//! Analysis service client.
//!
//! Strategy selection is a request-shape decision: exactly one file goes to
//! `/analyze` as a single multipart field, two or more go to
//! `/analyze-multiple` as a repeated field. Failure classification is shared
//! by both strategies. No retries; a failed attempt is terminal and the
//! caller decides what to do next.

pub mod types;

pub use types::{
    AnalysisOutcome, AnalysisSummary, BatchAnalysis, CharacteristicsMap, ErrorBody,
    IndividualAnalysis, PriceEstimation, SingleAnalysis, display_value,
};

use crate::error::{CarAiError, Result};
use crate::selection::{SelectedFile, SelectionSet};
use reqwest::multipart::{Form, Part};

pub const TRANSPORT_MESSAGE: &str = "Cannot connect to the analysis server. \
    Please check that the server is running and that no firewall is blocking the connection.";

pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// No local timeout is configured: failure is observed only through the
    /// transport's own failure signal.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CarAiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits the selection and returns the parsed outcome.
    ///
    /// The session guards against empty submissions; an empty set here is a
    /// caller bug and reported as a validation error rather than a request.
    pub async fn analyze(&self, selection: &SelectionSet) -> Result<AnalysisOutcome> {
        match selection.files() {
            [] => Err(CarAiError::Validation(
                "At least one image is required".to_string(),
            )),
            [file] => self.analyze_single(file).await,
            files => self.analyze_batch(files).await,
        }
    }

    async fn analyze_single(&self, file: &SelectedFile) -> Result<AnalysisOutcome> {
        let form = Form::new().part("file", file_part(file)?);
        let response = self.post_multipart("/analyze", form).await?;

        let single: SingleAnalysis = response
            .json()
            .await
            .map_err(|e| CarAiError::ApiParse(e.to_string()))?;
        Ok(AnalysisOutcome::Single(single))
    }

    async fn analyze_batch(&self, files: &[SelectedFile]) -> Result<AnalysisOutcome> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file_part(file)?);
        }
        let response = self.post_multipart("/analyze-multiple", form).await?;

        let batch: BatchAnalysis = response
            .json()
            .await
            .map_err(|e| CarAiError::ApiParse(e.to_string()))?;
        Ok(AnalysisOutcome::Batch(batch))
    }

    async fn post_multipart(&self, endpoint: &str, form: Form) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|_| CarAiError::Transport(TRANSPORT_MESSAGE.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(classify_failure(status, body.detail, &url))
    }
}

fn file_part(file: &SelectedFile) -> Result<Part> {
    Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.mime_type)
        .map_err(|e| CarAiError::Validation(format!("{}: invalid MIME type: {e}", file.file_name)))
}

/// Maps a non-success HTTP status to a user-facing error.
///
/// 404 is a configuration problem, 0/5xx an availability problem; anything
/// else surfaces the service's own `detail` message when one was sent.
pub fn classify_failure(status: u16, detail: Option<String>, url: &str) -> CarAiError {
    let message = match status {
        404 => format!(
            "Analysis endpoint not found. Make sure the analysis server is running \
             and reachable. Tried: {url}"
        ),
        0 | 500.. => {
            "Cannot connect to server. Please ensure the analysis server is running.".to_string()
        }
        _ => detail.unwrap_or_else(|| format!("Server error: {status}")),
    };

    CarAiError::Service { status, message }
}
