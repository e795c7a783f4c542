//! PII span detection
//!
//! Provides the trait-based detection seam and the regex implementation.
//! The engine treats the detector as a black box that produces spans; a
//! model-based named-entity recognizer would implement the same trait.

pub mod patterns;
pub mod regex;

use crate::engine::span::SpanRecord;
use anyhow::Result;

/// Trait for PII span detection implementations
///
/// Implementations must return non-overlapping spans with byte offsets
/// into the given text, in ascending start order.
pub trait SpanDetector: Send + Sync {
    /// Detect PII spans in free text
    fn detect(&self, text: &str) -> Result<Vec<SpanRecord>>;
}
