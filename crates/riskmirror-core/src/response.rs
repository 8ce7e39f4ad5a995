//! Decoding of `/analyze` responses into a single submission outcome

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw response body. Every field is optional on the wire; [`classify`]
/// decides which shape the server actually sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    pub error: Option<Value>,
    pub analysis: Option<String>,
    pub pdf_link: Option<String>,
    pub risk_score: Option<Value>,
}

/// Successful analysis as shown in the preview panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: String,
    pub pdf_link: String,
    pub risk_score: Option<f64>,
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success(AnalysisReport),
    /// Server-reported error, shown to the user verbatim
    ApplicationError(String),
    /// Network failure or unreadable response
    TransportError(String),
}

impl SubmitOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitOutcome::Success(_) => "success",
            SubmitOutcome::ApplicationError(_) => "application_error",
            SubmitOutcome::TransportError(_) => "transport_error",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }
}

impl AnalyzeResponse {
    /// Message carried by a truthy `error` field.
    ///
    /// `null`, `false`, `0` and `""` count as no error.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn into_outcome(self) -> SubmitOutcome {
        if let Some(message) = self.error_message() {
            return SubmitOutcome::ApplicationError(message);
        }

        let risk_score = self.risk_score.as_ref().and_then(Value::as_f64);
        match (self.analysis, self.pdf_link) {
            (Some(analysis), Some(pdf_link)) => SubmitOutcome::Success(AnalysisReport {
                analysis,
                pdf_link,
                risk_score,
            }),
            (None, _) => SubmitOutcome::TransportError(
                "Response is missing the analysis field".to_string(),
            ),
            (_, None) => SubmitOutcome::TransportError(
                "Response is missing the pdf_link field".to_string(),
            ),
        }
    }
}

/// Classify a response body. HTTP status is not an input: application
/// errors arrive as status 500 with a JSON `error` body.
pub fn classify(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<AnalyzeResponse>(body) {
        Ok(response) => response.into_outcome(),
        Err(e) => SubmitOutcome::TransportError(format!("Invalid response body: {}", e)),
    }
}
