use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` inside the analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Half-open overlap test. Touching spans (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        (self.start <= other.start && other.start < self.end)
            || (other.start <= self.start && self.start < other.end)
    }
}

/// A detected piece of PII that survived overlap resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiEntity {
    pub category: String,
    pub confidence: f64,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl PiiEntity {
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// Outcome of analyzing one text.
///
/// Entities are kept in discovery order (catalog order, then position within
/// each rule's scan), not sorted by offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub entities: Vec<PiiEntity>,
    pub confidence: f64,
    pub method: String,
}

impl AnalysisResult {
    pub fn empty(method: impl Into<String>) -> Self {
        Self {
            entities: Vec::new(),
            confidence: 0.0,
            method: method.into(),
        }
    }

    /// Aggregate confidence is `found_confidence` when anything was found,
    /// otherwise exactly 0.0.
    pub fn from_entities(
        entities: Vec<PiiEntity>,
        found_confidence: f64,
        method: impl Into<String>,
    ) -> Self {
        let confidence = if entities.is_empty() {
            0.0
        } else {
            found_confidence
        };

        Self {
            entities,
            confidence,
            method: method.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn by_category(&self, category: &str) -> Vec<&PiiEntity> {
        self.entities
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entity in &self.entities {
            if !seen.contains(&entity.category.as_str()) {
                seen.push(entity.category.as_str());
            }
        }
        seen
    }

    /// Rewrite byte offsets as Unicode scalar (code point) offsets into `text`.
    ///
    /// `text` must be the string this result was produced from.
    pub fn to_char_offsets(&self, text: &str) -> AnalysisResult {
        let boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        let to_char = |byte: usize| boundaries.partition_point(|&b| b < byte);

        let entities = self
            .entities
            .iter()
            .map(|entity| PiiEntity {
                start: to_char(entity.start),
                end: to_char(entity.end),
                ..entity.clone()
            })
            .collect();

        AnalysisResult {
            entities,
            confidence: self.confidence,
            method: self.method.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: &str, start: usize, end: usize, text: &str) -> PiiEntity {
        PiiEntity {
            category: category.to_string(),
            confidence: 0.85,
            start,
            end,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_span_overlap_rules() {
        let a = Span::new(0, 5);

        assert!(a.overlaps(&Span::new(0, 5)));
        assert!(a.overlaps(&Span::new(4, 9)));
        assert!(a.overlaps(&Span::new(1, 2)));
        assert!(Span::new(1, 2).overlaps(&a));
        // adjacency is allowed
        assert!(!a.overlaps(&Span::new(5, 9)));
        assert!(!Span::new(5, 9).overlaps(&a));
    }

    #[test]
    fn test_confidence_zero_when_empty() {
        let result = AnalysisResult::from_entities(Vec::new(), 0.85, "enhanced_regex");
        assert!(result.is_empty());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let result = AnalysisResult::from_entities(
            vec![
                entity("PHONE", 0, 3, "555"),
                entity("EMAIL", 4, 9, "a@b.c"),
                entity("PHONE", 10, 13, "556"),
            ],
            0.85,
            "enhanced_regex",
        );

        assert_eq!(result.categories(), vec!["PHONE", "EMAIL"]);
        assert_eq!(result.by_category("PHONE").len(), 2);
    }

    #[test]
    fn test_char_offsets_for_multibyte_text() {
        let text = "héllo 555-123-4567";
        let start = text.find("555").unwrap();
        let result = AnalysisResult::from_entities(
            vec![entity("PHONE", start, text.len(), "555-123-4567")],
            0.85,
            "enhanced_regex",
        );

        let converted = result.to_char_offsets(text);
        assert_eq!(converted.entities[0].start, 6);
        assert_eq!(converted.entities[0].end, 18);
        assert_eq!(converted.entities[0].text, "555-123-4567");
    }

    #[test]
    fn test_serialized_shape() {
        let result = AnalysisResult::from_entities(
            vec![entity("SSN", 5, 16, "123-45-6789")],
            0.85,
            "enhanced_regex",
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["method"], "enhanced_regex");
        assert_eq!(json["entities"][0]["category"], "SSN");
        assert_eq!(json["entities"][0]["start"], 5);
        assert_eq!(json["entities"][0]["end"], 16);
        assert_eq!(json["entities"][0]["text"], "123-45-6789");
    }
}
