//! Pattern catalog: the ordered category -> rules table.
//!
//! The catalog is built once, compiled eagerly, and never mutated afterwards.
//! Compilation errors surface from the constructor so a bad pattern stops the
//! process at startup instead of failing a request.

use regex::{Matches, Regex, RegexBuilder};

use crate::error::{PiiError, Result};
use crate::patterns::BUILTIN_PATTERNS;

/// Upper bound on the compiled program size of a single rule
const RULE_SIZE_LIMIT: usize = 8 * (1 << 20);

/// Uncompiled rule declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: String,
    pub case_insensitive: bool,
}

impl RuleSpec {
    /// Case-insensitive rule, the default for every catalog entry
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_insensitive: true,
        }
    }

    pub fn case_sensitive(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_insensitive: false,
        }
    }
}

/// A compiled match rule belonging to one category
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    case_insensitive: bool,
}

impl Rule {
    fn compile(category: &str, spec: &RuleSpec) -> Result<Self> {
        let regex = RegexBuilder::new(&spec.pattern)
            .case_insensitive(spec.case_insensitive)
            .size_limit(RULE_SIZE_LIMIT)
            .build()
            .map_err(|source| PiiError::InvalidPattern {
                category: category.to_string(),
                pattern: spec.pattern.clone(),
                source,
            })?;

        Ok(Self {
            regex,
            case_insensitive: spec.case_insensitive,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Every non-overlapping occurrence in `text`, left to right
    pub fn find_iter<'r, 'h>(&'r self, text: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(text)
    }
}

#[derive(Debug, Clone)]
struct Category {
    name: String,
    rules: Vec<Rule>,
}

/// Read-only, insertion-ordered table of categories and their rules
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    categories: Vec<Category>,
}

impl PatternCatalog {
    /// Compile the built-in category table
    pub fn builtin() -> Result<Self> {
        Self::from_definitions(BUILTIN_PATTERNS.iter().map(|(name, patterns)| {
            (
                *name,
                patterns
                    .iter()
                    .map(|p| RuleSpec::new(*p))
                    .collect::<Vec<_>>(),
            )
        }))
    }

    /// Compile a catalog from ordered `(category, rules)` declarations.
    ///
    /// Fails on the first invalid pattern, on a repeated category name, or on a
    /// category with no rules.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<RuleSpec>)>,
        S: Into<String>,
    {
        let mut categories: Vec<Category> = Vec::new();

        for (name, specs) in definitions {
            let name = name.into();

            if categories.iter().any(|c| c.name == name) {
                return Err(PiiError::DuplicateCategory(name));
            }
            if specs.is_empty() {
                return Err(PiiError::EmptyCategory(name));
            }

            let rules = specs
                .iter()
                .map(|spec| Rule::compile(&name, spec))
                .collect::<Result<Vec<_>>>()?;

            categories.push(Category { name, rules });
        }

        tracing::debug!(
            categories = categories.len(),
            rules = categories.iter().map(|c| c.rules.len()).sum::<usize>(),
            "Pattern catalog compiled"
        );

        Ok(Self { categories })
    }

    /// Category names in scan order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Rules for `name` in declared order, or `None` for an unknown category
    pub fn rules_for_category(&self, name: &str) -> Option<&[Rule]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.rules.as_slice())
    }

    /// `(category, rules)` pairs in scan order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn test_builtin_compiles() {
        let catalog = PatternCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        assert!(catalog.rule_count() >= 16);
    }

    #[test]
    fn test_builtin_category_order() {
        let catalog = PatternCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog.categories().collect();

        assert_eq!(
            names,
            vec![
                patterns::PERSON,
                patterns::PHONE,
                patterns::EMAIL,
                patterns::SSN,
                patterns::ADDRESS,
                patterns::CREDIT_CARD,
                patterns::DATE_OF_BIRTH,
                patterns::DRIVER_LICENSE,
                patterns::PASSPORT,
                patterns::BANK_ACCOUNT,
                patterns::IP_ADDRESS,
                patterns::MAC_ADDRESS,
                patterns::USERNAME,
                patterns::MEDICAL_ID,
                patterns::COORDINATES,
                patterns::VEHICLE_ID,
            ]
        );
    }

    #[test]
    fn test_rules_for_category() {
        let catalog = PatternCatalog::builtin().unwrap();

        let ssn = catalog.rules_for_category(patterns::SSN).unwrap();
        assert_eq!(ssn.len(), 2);
        assert_eq!(ssn[0].pattern(), r"\b\d{3}-\d{2}-\d{4}\b");
        assert!(ssn[0].is_case_insensitive());

        assert!(catalog.rules_for_category("NOT_A_CATEGORY").is_none());
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = PatternCatalog::from_definitions(vec![
            ("GOOD", vec![RuleSpec::new(r"\d+")]),
            ("BAD", vec![RuleSpec::new(r"(unclosed")]),
        ])
        .unwrap_err();

        match err {
            PiiError::InvalidPattern {
                category, pattern, ..
            } => {
                assert_eq!(category, "BAD");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lookaround_is_rejected() {
        // The engine has no backtracking, so lookaround cannot compile
        let result =
            PatternCatalog::from_definitions(vec![("X", vec![RuleSpec::new(r"(?<=a)b")])]);
        assert!(matches!(result, Err(PiiError::InvalidPattern { .. })));
    }

    #[test]
    fn test_duplicate_and_empty_categories() {
        let dup = PatternCatalog::from_definitions(vec![
            ("A", vec![RuleSpec::new("a")]),
            ("A", vec![RuleSpec::new("b")]),
        ]);
        assert!(matches!(dup, Err(PiiError::DuplicateCategory(name)) if name == "A"));

        let empty = PatternCatalog::from_definitions(vec![("A", Vec::new())]);
        assert!(matches!(empty, Err(PiiError::EmptyCategory(name)) if name == "A"));
    }

    #[test]
    fn test_case_sensitive_rule() {
        let catalog = PatternCatalog::from_definitions(vec![(
            "CODE",
            vec![RuleSpec::case_sensitive("ABC")],
        )])
        .unwrap();
        let rule = &catalog.rules_for_category("CODE").unwrap()[0];

        assert!(!rule.is_case_insensitive());
        assert_eq!(rule.find_iter("abc ABC").count(), 1);
    }
}
