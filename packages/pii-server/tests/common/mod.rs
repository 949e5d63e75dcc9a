// Shared helpers for API tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use pii_engine::{AnalysisResult, PiiDetector};
use pii_server::{kernel::create_pii_detector, server::build_app, Config};
use serde_json::Value;
use tower::ServiceExt;

/// App wired with the built-in pattern detector and default config
pub fn test_app() -> Router {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> Router {
    let detector = create_pii_detector(config.detection_method).unwrap();
    build_app(&config, detector)
}

pub fn stub_app(detector: impl PiiDetector + 'static) -> Router {
    stub_app_with(Config::default(), detector)
}

pub fn stub_app_with(config: Config, detector: impl PiiDetector + 'static) -> Router {
    build_app(&config, Arc::new(detector))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<String>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn generate(app: Router, prompt: &str) -> TestResponse {
    let body = serde_json::json!({ "model": "replit-pii-detector", "prompt": prompt });
    post_json(app, "/api/generate", body.to_string()).await
}

/// Detector that fails the way a buggy strategy would
pub struct PanickingDetector;

impl PiiDetector for PanickingDetector {
    fn method(&self) -> &str {
        "panicking"
    }

    fn categories(&self) -> Vec<&str> {
        Vec::new()
    }

    fn analyze(&self, _text: &str) -> AnalysisResult {
        panic!("detector blew up")
    }
}

/// Detector that takes longer than any sensible request timeout
pub struct SlowDetector(pub Duration);

impl PiiDetector for SlowDetector {
    fn method(&self) -> &str {
        "slow"
    }

    fn categories(&self) -> Vec<&str> {
        Vec::new()
    }

    fn analyze(&self, _text: &str) -> AnalysisResult {
        std::thread::sleep(self.0);
        AnalysisResult::empty(self.method())
    }
}

/// Detector that labels the whole input, to check the transport passes
/// results through untouched
pub struct WholeTextDetector;

impl PiiDetector for WholeTextDetector {
    fn method(&self) -> &str {
        "whole_text"
    }

    fn categories(&self) -> Vec<&str> {
        vec!["SECRET"]
    }

    fn analyze(&self, text: &str) -> AnalysisResult {
        if text.is_empty() {
            return AnalysisResult::empty(self.method());
        }

        AnalysisResult::from_entities(
            vec![pii_engine::PiiEntity {
                category: "SECRET".to_string(),
                confidence: 0.5,
                start: 0,
                end: text.len(),
                text: text.to_string(),
            }],
            0.5,
            self.method(),
        )
    }
}
