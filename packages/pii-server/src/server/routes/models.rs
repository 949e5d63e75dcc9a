//! Canned model-management endpoints.
//!
//! Clients of a local model server list and pull models before generating.
//! There is no model to manage, so both answer with fixed data.

use std::convert::Infallible;

use axum::{
    body::{Body, Bytes},
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::server::app::AppState;

const PULL_STEPS: [&str; 4] = [
    "pulling manifest",
    "downloading model",
    "verifying sha256",
    "success",
];

#[derive(Serialize)]
pub struct TagsResponse {
    models: Vec<ModelTag>,
}

#[derive(Serialize)]
pub struct ModelTag {
    name: String,
    modified_at: String,
    size: u64,
    digest: String,
}

/// `GET /api/tags`
pub async fn tags_handler(Extension(state): Extension<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        models: vec![ModelTag {
            name: format!("{}:latest", state.model_name),
            modified_at: "2024-01-01T00:00:00Z".to_string(),
            size: 1024,
            digest: "sha256:dummy".to_string(),
        }],
    })
}

/// `POST /api/pull`
///
/// Streams one JSON object per line. The request body is ignored.
pub async fn pull_handler() -> Response {
    let lines = PULL_STEPS
        .iter()
        .map(|status| Ok::<_, Infallible>(Bytes::from(format!("{}\n", json!({ "status": status })))));

    let mut response = Body::from_stream(futures::stream::iter(lines)).into_response();
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-ndjson"),
    );
    response
}
