use std::sync::Arc;

use crate::catalog::PatternCatalog;
use crate::error::Result;
use crate::types::{AnalysisResult, PiiEntity, Span};

/// Method tag reported for pattern-based detection
pub const PATTERN_METHOD: &str = "enhanced_regex";

/// Fixed confidence attached to every pattern match
pub const PATTERN_CONFIDENCE: f64 = 0.85;

/// Scans text against a catalog and resolves overlaps first-found-wins.
///
/// Categories are visited in catalog order and rules in declared order. A
/// candidate is accepted the moment it is found unless it overlaps an entity
/// accepted earlier, in which case it is dropped. There is no longest-match or
/// best-score selection: an earlier category always beats a later one.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    catalog: Arc<PatternCatalog>,
}

impl PatternMatcher {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Matcher over the built-in catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(PatternCatalog::builtin()?))
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Detect PII in `text`. Offsets in the result are byte offsets.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut entities: Vec<PiiEntity> = Vec::new();
        let mut discarded = 0usize;

        for (category, rules) in self.catalog.iter() {
            for rule in rules {
                for mat in rule.find_iter(text) {
                    if mat.is_empty() {
                        continue;
                    }

                    let span = Span::new(mat.start(), mat.end());
                    if entities.iter().any(|accepted| accepted.span().overlaps(&span)) {
                        discarded += 1;
                        tracing::trace!(
                            category,
                            start = span.start,
                            end = span.end,
                            "Candidate overlaps accepted entity, discarded"
                        );
                        continue;
                    }

                    entities.push(PiiEntity {
                        category: category.to_string(),
                        confidence: PATTERN_CONFIDENCE,
                        start: span.start,
                        end: span.end,
                        text: mat.as_str().to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            text_len = text.len(),
            entities = entities.len(),
            discarded,
            "Pattern analysis complete"
        );

        AnalysisResult::from_entities(entities, PATTERN_CONFIDENCE, PATTERN_METHOD)
    }
}
