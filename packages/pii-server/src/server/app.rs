//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    routing::{get, post},
    Router,
};
use pii_engine::PiiDetector;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::error::{method_not_allowed, not_found};
use crate::server::routes::{generate_handler, health_handler, pull_handler, tags_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn PiiDetector>,
    pub model_name: String,
}

/// Build the Axum application router
///
/// The detector is built by the caller so tests can inject their own.
pub fn build_app(config: &Config, detector: Arc<dyn PiiDetector>) -> Router {
    let app_state = AppState {
        detector,
        model_name: config.model_name.clone(),
    };

    // CORS configuration - allow any origin, the service carries no credentials
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Ollama-compatible surface
        .route(
            "/api/generate",
            post(generate_handler).fallback(method_not_allowed),
        )
        .route("/api/pull", post(pull_handler).fallback(method_not_allowed))
        .route("/api/tags", get(tags_handler).fallback(method_not_allowed))
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .fallback(not_found)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(Extension(app_state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
