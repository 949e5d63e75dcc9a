// PII Detection Service Construction

use anyhow::{Context, Result};
use pii_engine::{DetectionMethod, PatternMatcher, PiiDetector};
use std::sync::Arc;

/// Create the PII detector selected by configuration.
///
/// The pattern catalog is compiled here, so a malformed pattern aborts startup
/// instead of surfacing on a request.
pub fn create_pii_detector(method: DetectionMethod) -> Result<Arc<dyn PiiDetector>> {
    match method {
        DetectionMethod::Pattern => {
            let matcher =
                PatternMatcher::builtin().context("Failed to compile PII pattern catalog")?;

            tracing::info!(
                categories = matcher.catalog().len(),
                rules = matcher.catalog().rule_count(),
                "PII detection enabled with pattern catalog"
            );

            Ok(Arc::new(matcher))
        }
    }
}
