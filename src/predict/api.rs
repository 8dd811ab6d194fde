//! Inference API client for side-by-side emotion predictions.

use serde::{Deserialize, Serialize};

use super::model::ModelResult;
use crate::http_client;

pub const DEFAULT_ENDPOINT: &str = "https://linukarivirihan-backend.hf.space/api/predict/";

const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Both model outputs for one sentence.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub baseline: ModelResult,
    /// Output of the graph-enhanced model.
    pub coteg: ModelResult,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Server returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Failed to read response: {0}")]
    Body(String),
    #[error("JSON error: {0}")]
    Json(String),
}

/// Send `text` to the inference service and parse both model results.
pub fn request_prediction(
    endpoint: &str,
    request: &PredictRequest,
    max_bytes: usize,
) -> Result<PredictResponse, PredictError> {
    let req = http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(request) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, max_bytes)
                .map(|body| truncate_error_body(&body))
                .unwrap_or_else(|err| err.to_string());
            return Err(PredictError::Status { code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_response_text(response, max_bytes)
        .map_err(|err| PredictError::Body(err.to_string()))?;
    parse_predict_response(&body)
}

fn parse_predict_response(body: &str) -> Result<PredictResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Json(err.to_string()))
}

fn truncate_error_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
