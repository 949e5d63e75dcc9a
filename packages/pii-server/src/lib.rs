// Ollama-compatible PII detection service

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
