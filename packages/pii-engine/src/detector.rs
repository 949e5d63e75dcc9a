use std::fmt;
use std::str::FromStr;

use crate::error::{PiiError, Result};
use crate::matcher::{PatternMatcher, PATTERN_METHOD};
use crate::types::AnalysisResult;

/// A detection strategy the transport can hold behind `Arc<dyn PiiDetector>`.
///
/// Implementations are pure: no interior mutability, no I/O, safe to share
/// across threads without locking.
pub trait PiiDetector: Send + Sync {
    /// Tag reported in `AnalysisResult::method`
    fn method(&self) -> &str;

    /// Labels this strategy can emit, in precedence order
    fn categories(&self) -> Vec<&str>;

    /// Detect PII in `text`, returning byte offsets
    fn analyze(&self, text: &str) -> AnalysisResult;
}

impl PiiDetector for PatternMatcher {
    fn method(&self) -> &str {
        PATTERN_METHOD
    }

    fn categories(&self) -> Vec<&str> {
        self.catalog().categories().collect()
    }

    fn analyze(&self, text: &str) -> AnalysisResult {
        PatternMatcher::analyze(self, text)
    }
}

/// Which detection strategy to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMethod {
    /// Regex catalog with first-found-wins overlap resolution
    #[default]
    Pattern,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Pattern => "pattern",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMethod {
    type Err = PiiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" | "regex" | PATTERN_METHOD => Ok(DetectionMethod::Pattern),
            other => Err(PiiError::UnknownMethod(other.to_string())),
        }
    }
}
