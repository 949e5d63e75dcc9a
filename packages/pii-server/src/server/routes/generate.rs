//! `POST /api/generate`
//!
//! Accepts the generate request shape of a local model server and answers
//! with a PII analysis of `prompt` instead of generated text.

use axum::{body::Bytes, extract::Extension, Json};
use chrono::{SecondsFormat, Utc};
use pii_engine::AnalysisResult;
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Accepted for compatibility; the configured model name is always reported
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub prompt: String,
    /// Accepted for compatibility; responses are never streamed
    #[serde(default)]
    pub stream: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub model: String,
    pub created_at: String,
    pub response: String,
    pub done: bool,
    pub analysis: AnalysisResult,
}

/// Human-readable one-line summary of an analysis
pub fn summarize(analysis: &AnalysisResult) -> String {
    if analysis.is_empty() {
        return "No PII detected in the provided text.".to_string();
    }

    format!(
        "PII detected: {}. Found {} entities with {:.2} confidence using {} method.",
        analysis.categories().join(", "),
        analysis.len(),
        analysis.confidence,
        analysis.method
    )
}

/// The body is parsed as JSON whatever its Content-Type, so plain `curl -d`
/// callers work.
pub async fn generate_handler(
    Extension(state): Extension<AppState>,
    body: Result<Bytes, axum::extract::rejection::BytesRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = body?;
    let request: GenerateRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    if let Some(requested) = request.model.as_deref() {
        if requested != state.model_name {
            tracing::debug!(requested, served = %state.model_name, "Serving request for another model name");
        }
    }

    let detector = state.detector.clone();
    let prompt = request.prompt;

    // Matching is CPU-bound; keep it off the async workers
    let analysis = tokio::task::spawn_blocking(move || {
        let analysis = detector.analyze(&prompt);
        analysis.to_char_offsets(&prompt)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Detector task failed: {}", e)))?;

    tracing::info!(
        entities = analysis.len(),
        method = %analysis.method,
        "Analyzed prompt"
    );

    Ok(Json(GenerateResponse {
        model: state.model_name.clone(),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        response: summarize(&analysis),
        done: true,
        analysis,
    }))
}
