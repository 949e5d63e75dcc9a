use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    model: String,
    method: String,
    categories: Vec<String>,
}

/// Health check endpoint
///
/// The detector is built before the listener binds, so a running server is
/// always able to analyze. Reports what it would analyze with.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_name.clone(),
        method: state.detector.method().to_string(),
        categories: state
            .detector
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
