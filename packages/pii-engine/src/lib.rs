//! PII detection engine
//!
//! Matches free text against a static catalog of category patterns and returns
//! non-overlapping labeled spans.
//!
//! # Resolution
//!
//! Categories are scanned in catalog order, rules in declared order, and every
//! occurrence of every rule is a candidate. A candidate is accepted immediately
//! unless it overlaps an entity that was accepted before it. Earlier categories
//! therefore always win over later ones, regardless of match length.
//!
//! Patterns are compiled with the `regex` crate, which runs in time linear in
//! the input and cannot backtrack catastrophically.
//!
//! # Usage
//!
//! ```rust
//! use pii_engine::{patterns, PatternMatcher};
//!
//! let matcher = PatternMatcher::builtin().expect("built-in catalog compiles");
//! let result = matcher.analyze("SSN: 123-45-6789");
//!
//! assert_eq!(result.entities[0].category, patterns::SSN);
//! assert_eq!(result.entities[0].text, "123-45-6789");
//! assert_eq!(result.confidence, 0.85);
//! ```
//!
//! # Modules
//!
//! - [`catalog`] - Category -> rule table, compiled once
//! - [`matcher`] - Scan and overlap resolution
//! - [`detector`] - Strategy trait held by the transport
//! - [`patterns`] - Built-in categories
//! - [`types`] - Spans, entities, analysis results

pub mod catalog;
pub mod detector;
pub mod error;
pub mod matcher;
pub mod patterns;
pub mod types;

pub use catalog::{PatternCatalog, Rule, RuleSpec};
pub use detector::{DetectionMethod, PiiDetector};
pub use error::{PiiError, Result};
pub use matcher::{PatternMatcher, PATTERN_CONFIDENCE, PATTERN_METHOD};
pub use types::{AnalysisResult, PiiEntity, Span};
