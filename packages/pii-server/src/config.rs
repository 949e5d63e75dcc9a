use anyhow::{Context, Result};
use dotenvy::dotenv;
use pii_engine::DetectionMethod;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub model_name: String,
    pub detection_method: DetectionMethod,
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 11434,
            model_name: "replit-pii-detector".to_string(),
            detection_method: DetectionMethod::Pattern,
            request_timeout_secs: 30,
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(port) => port.parse().context("PORT must be a valid number")?,
                None => defaults.port,
            },
            model_name: lookup("PII_MODEL_NAME").unwrap_or(defaults.model_name),
            detection_method: match lookup("PII_DETECTION_METHOD") {
                Some(method) => method
                    .parse()
                    .context("PII_DETECTION_METHOD must be a supported detection method")?,
                None => defaults.detection_method,
            },
            request_timeout_secs: match lookup("REQUEST_TIMEOUT_SECS") {
                Some(secs) => secs
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
                None => defaults.request_timeout_secs,
            },
            max_body_bytes: match lookup("MAX_BODY_BYTES") {
                Some(bytes) => bytes
                    .parse()
                    .context("MAX_BODY_BYTES must be a valid number")?,
                None => defaults.max_body_bytes,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
