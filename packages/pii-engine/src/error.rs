//! Typed errors for the PII engine.
//!
//! Every variant is a configuration error: it is raised while the catalog is
//! being built or a detector is being selected, never while text is analyzed.

use thiserror::Error;

/// Errors that can occur while building a pattern catalog or detector.
#[derive(Debug, Error)]
pub enum PiiError {
    /// A declared pattern failed to compile
    #[error("invalid pattern for {category}: {pattern}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The same category name was declared more than once
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A category was declared without any rules
    #[error("category has no rules: {0}")]
    EmptyCategory(String),

    /// Detection method name not recognised
    #[error("unknown detection method: {0}")]
    UnknownMethod(String),
}

/// Result type alias for engine construction.
pub type Result<T> = std::result::Result<T, PiiError>;
