//! Regex-based PII span detector

use super::{patterns::PatternRegistry, SpanDetector};
use crate::engine::span::SpanRecord;
use anyhow::Result;
use std::sync::Arc;

/// Regex-based span detector
///
/// Runs every compiled pattern over the text and merges the raw matches
/// into a non-overlapping span list, which the rewriter requires. When two
/// matches collide, the one starting earlier wins; at equal starts the
/// longer match wins.
pub struct RegexDetector {
    pattern_registry: Arc<PatternRegistry>,
}

impl RegexDetector {
    /// Create a new regex detector with the built-in patterns
    pub fn new() -> Result<Self> {
        let registry = PatternRegistry::default_patterns()?;
        Ok(Self {
            pattern_registry: Arc::new(registry),
        })
    }

    /// Create a new regex detector with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            pattern_registry: Arc::new(registry),
        }
    }

    /// Collect raw matches from every pattern
    fn raw_matches(&self, text: &str) -> Vec<SpanRecord> {
        let mut spans = Vec::new();

        for pattern in self.pattern_registry.all_patterns() {
            for matched in pattern.regex.find_iter(text) {
                spans.push(SpanRecord::new(
                    matched.as_str(),
                    pattern.category,
                    matched.start(),
                    matched.end(),
                ));
            }
        }

        spans
    }

    /// Drop matches that overlap an already-kept match
    fn merge_overlaps(mut spans: Vec<SpanRecord>) -> Vec<SpanRecord> {
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut merged: Vec<SpanRecord> = Vec::with_capacity(spans.len());
        let mut last_end = 0usize;
        for span in spans {
            if merged.is_empty() || span.start >= last_end {
                last_end = span.end;
                merged.push(span);
            }
        }
        merged
    }
}

impl SpanDetector for RegexDetector {
    fn detect(&self, text: &str) -> Result<Vec<SpanRecord>> {
        Ok(Self::merge_overlaps(self.raw_matches(text)))
    }
}
