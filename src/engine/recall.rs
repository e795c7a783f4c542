//! Recall scoring for anonymized output
//!
//! Measures how completely the original PII values disappeared from the
//! rewritten text. A span counts as a false negative if its original value
//! still occurs verbatim anywhere in the output, whether one mention
//! survived or all of them did.

use crate::engine::span::SpanRecord;

/// Scores anonymized text against the original spans
pub struct RecallEvaluator;

impl RecallEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Fraction of spans whose original value no longer appears verbatim
    ///
    /// Values are matched as literal substrings of the anonymized text.
    /// With zero spans there is nothing left to leak, so the result is the
    /// vacuous 1.0 rather than a division error.
    pub fn evaluate(&self, spans: &[SpanRecord], anonymized_text: &str) -> f64 {
        if spans.is_empty() {
            return 1.0;
        }

        let leaked = self.leaked_values(spans, anonymized_text).len();
        (spans.len() - leaked) as f64 / spans.len() as f64
    }

    /// The spans whose original value still occurs in the anonymized text
    pub fn leaked_values<'a>(
        &self,
        spans: &'a [SpanRecord],
        anonymized_text: &str,
    ) -> Vec<&'a SpanRecord> {
        spans
            .iter()
            .filter(|span| anonymized_text.contains(span.value.as_str()))
            .collect()
    }
}

impl Default for RecallEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
