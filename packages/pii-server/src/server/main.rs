// Main entry point for the PII detection server

use anyhow::{Context, Result};
use pii_server::{
    kernel::create_pii_detector,
    server::{build_app, shutdown_signal},
    Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pii_server=debug,pii_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting local PII detection server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.model_name,
        method = %config.detection_method,
        "Configuration loaded"
    );

    // Compile the pattern catalog before accepting connections
    let detector = create_pii_detector(config.detection_method)
        .context("Failed to initialize PII detector")?;

    // Build application
    let app = build_app(&config, detector);

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Generate: POST http://localhost:{}/api/generate", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!(
        "Timeout: {}s, Max body: {} bytes",
        config.request_timeout_secs,
        config.max_body_bytes
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
