//! Text rewriting with identity-consistent replacement
//!
//! Splices one synthetic value per identity class into the source text.
//! Replacements are rarely the same length as the originals, so every
//! splice shifts the original offsets of everything to its right; the
//! rewriter tracks that drift instead of re-basing the span list.

use crate::domain::{Result, TextveilError};
use crate::engine::generator::SyntheticValueGenerator;
use crate::engine::span::SpanRecord;
use std::collections::HashMap;

/// Rewrites text by replacing spans with synthetic values
///
/// One synthetic value is generated per identity class (at the class's
/// first occurrence in text order) and reused for every member, preserving
/// the "same real entity, same fake label" property across the document.
pub struct TextRewriter {
    generator: SyntheticValueGenerator,
}

impl TextRewriter {
    /// Create a rewriter around a value generator
    pub fn new(generator: SyntheticValueGenerator) -> Self {
        Self { generator }
    }

    /// Replace every span in `text` with its class's synthetic value
    ///
    /// Spans may be given in any order; they are processed left to right.
    /// Returns the text unchanged when `spans` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TextveilError::Validation`] if any span has an unset
    /// identity, reversed or out-of-bounds offsets, offsets that split a
    /// UTF-8 character, or a range overlapping another span. Nothing is
    /// spliced when validation fails; a bad offset must never silently
    /// corrupt unrelated text.
    pub fn rewrite(&mut self, text: &str, spans: &[SpanRecord]) -> Result<String> {
        validate_spans(text, spans)?;

        let mut ordered: Vec<&SpanRecord> = spans.iter().collect();
        ordered.sort_by_key(|span| span.start);

        // One replacement per identity class, document-scoped.
        let mut replacements: HashMap<u64, String> = HashMap::new();
        let mut output = text.to_string();
        // Net length drift of all splices left of the current span.
        let mut drift: isize = 0;

        for span in ordered {
            let id = span
                .identity_id
                .ok_or_else(|| TextveilError::Validation("span has no identity ID".to_string()))?;
            let replacement: &str = replacements
                .entry(id)
                .or_insert_with(|| self.generator.generate(span.category));

            let start = (span.start as isize + drift) as usize;
            let end = (span.end as isize + drift) as usize;
            output.replace_range(start..end, replacement);

            drift += replacement.len() as isize - span.width() as isize;
        }

        Ok(output)
    }
}

/// Check spans against the rewriting preconditions
///
/// Every span must carry an identity ID and a well-formed, in-bounds,
/// char-boundary-aligned `[start, end)` range, and no two ranges may
/// overlap. Spans from a detector that merges overlapping matches satisfy
/// this by construction; spans from other sources are rejected here before
/// they can corrupt the splice arithmetic.
pub fn validate_spans(text: &str, spans: &[SpanRecord]) -> Result<()> {
    for span in spans {
        if span.identity_id.is_none() {
            return Err(TextveilError::Validation(format!(
                "span at {}..{} has no identity ID",
                span.start, span.end
            )));
        }
        if span.start >= span.end {
            return Err(TextveilError::Validation(format!(
                "span has reversed or empty range {}..{}",
                span.start, span.end
            )));
        }
        if span.end > text.len() {
            return Err(TextveilError::Validation(format!(
                "span {}..{} exceeds text length {}",
                span.start,
                span.end,
                text.len()
            )));
        }
        if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            return Err(TextveilError::Validation(format!(
                "span {}..{} splits a UTF-8 character",
                span.start, span.end
            )));
        }
    }

    let mut ordered: Vec<&SpanRecord> = spans.iter().collect();
    ordered.sort_by_key(|span| span.start);
    for pair in ordered.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(TextveilError::Validation(format!(
                "span {}..{} overlaps span {}..{}",
                pair[1].start, pair[1].end, pair[0].start, pair[0].end
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::identity::IdentityAssigner;
    use crate::engine::span::PiiCategory;

    fn rewriter() -> TextRewriter {
        TextRewriter::new(SyntheticValueGenerator::with_seed(42))
    }

    fn assigned(mut spans: Vec<SpanRecord>) -> Vec<SpanRecord> {
        IdentityAssigner::with_seed(7).assign(&mut spans);
        spans
    }

    #[test]
    fn test_repeated_entity_gets_one_replacement() {
        let text = "Alice met Bob. Alice left.";
        let spans = assigned(vec![
            SpanRecord::new("Alice", PiiCategory::Person, 0, 5),
            SpanRecord::new("Bob", PiiCategory::Person, 10, 13),
            SpanRecord::new("Alice", PiiCategory::Person, 15, 20),
        ]);

        let output = rewriter().rewrite(text, &spans).unwrap();

        // The rewriter draws one fake per class in text order; replay the
        // same seed to recover them and splice the expected text by hand.
        let mut gen = SyntheticValueGenerator::with_seed(42);
        let alice_fake = gen.generate(PiiCategory::Person);
        let bob_fake = gen.generate(PiiCategory::Person);
        let expected = format!("{alice_fake} met {bob_fake}. {alice_fake} left.");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_length_drift_tracking() {
        let text = "Call 111-22-3333 or 444-55-6666 today.";
        let spans = assigned(vec![
            SpanRecord::new("111-22-3333", PiiCategory::SocialSecurityNumber, 5, 16),
            SpanRecord::new("444-55-6666", PiiCategory::SocialSecurityNumber, 20, 31),
        ]);

        let output = rewriter().rewrite(text, &spans).unwrap();

        // SSN replacements are the same width, so the scaffolding survives
        assert!(output.starts_with("Call "));
        assert!(output.ends_with(" today."));
        assert!(!output.contains("111-22-3333"));
        assert!(!output.contains("444-55-6666"));
    }

    #[test]
    fn test_unequal_length_replacements_do_not_corrupt_suffix() {
        let text = "ID 4111111111111111 belongs to Alice.";
        let spans = assigned(vec![
            SpanRecord::new("4111111111111111", PiiCategory::CreditCard, 3, 19),
            SpanRecord::new("Alice", PiiCategory::Person, 31, 36),
        ]);

        let output = rewriter().rewrite(text, &spans).unwrap();

        assert!(output.starts_with("ID "));
        assert!(output.contains(" belongs to "));
        assert!(output.ends_with('.'));
        assert!(!output.contains("4111111111111111"));
        assert!(!output.contains("Alice"));
    }

    #[test]
    fn test_full_rewrite_length_matches_sum_of_deltas() {
        let text = "Alice met Bob. Alice left.";
        let spans = assigned(vec![
            SpanRecord::new("Alice", PiiCategory::Person, 0, 5),
            SpanRecord::new("Bob", PiiCategory::Person, 10, 13),
            SpanRecord::new("Alice", PiiCategory::Person, 15, 20),
        ]);
        assert_eq!(spans[0].identity_id, spans[2].identity_id);

        let output = rewriter().rewrite(text, &spans).unwrap();

        // Replay the seed to learn each class's replacement length
        let mut gen = SyntheticValueGenerator::with_seed(42);
        let alice_fake = gen.generate(PiiCategory::Person);
        let bob_fake = gen.generate(PiiCategory::Person);
        let replacement_total = 2 * alice_fake.len() as i64 + bob_fake.len() as i64;
        let span_widths: i64 = spans.iter().map(|s| s.width() as i64).sum();
        assert_eq!(
            output.len() as i64,
            text.len() as i64 + replacement_total - span_widths
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let text = "Alice met Bob. Alice left.";
        let spans = assigned(vec![
            SpanRecord::new("Alice", PiiCategory::Person, 0, 5),
            SpanRecord::new("Bob", PiiCategory::Person, 10, 13),
            SpanRecord::new("Alice", PiiCategory::Person, 15, 20),
        ]);
        let mut shuffled = spans.clone();
        shuffled.reverse();

        let a = rewriter().rewrite(text, &spans).unwrap();
        let b = rewriter().rewrite(text, &shuffled).unwrap();

        // Same seed, same classes in text order, same output
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_spans_returns_text_unchanged() {
        let text = "Nothing to see here.";
        let output = rewriter().rewrite(text, &[]).unwrap();
        assert_eq!(output, text);
    }

    #[test]
    fn test_rejects_unset_identity() {
        let text = "Alice met Bob.";
        let spans = vec![SpanRecord::new("Alice", PiiCategory::Person, 0, 5)];
        let err = rewriter().rewrite(text, &spans).unwrap_err();
        assert!(matches!(err, TextveilError::Validation(_)));
    }

    #[test]
    fn test_rejects_reversed_range() {
        let text = "Alice met Bob.";
        let mut span = SpanRecord::new("Alice", PiiCategory::Person, 5, 5);
        span.identity_id = Some(1);
        let err = rewriter().rewrite(text, &[span]).unwrap_err();
        assert!(matches!(err, TextveilError::Validation(_)));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let text = "Alice";
        let mut span = SpanRecord::new("Alice!", PiiCategory::Person, 0, 6);
        span.identity_id = Some(1);
        let err = rewriter().rewrite(text, &[span]).unwrap_err();
        assert!(matches!(err, TextveilError::Validation(_)));
    }

    #[test]
    fn test_rejects_overlapping_spans() {
        let text = "Alice Smith met Bob.";
        let spans = assigned(vec![
            SpanRecord::new("Alice Smith", PiiCategory::Person, 0, 11),
            SpanRecord::new("Smith", PiiCategory::Person, 6, 11),
        ]);
        let err = rewriter().rewrite(text, &spans).unwrap_err();
        assert!(matches!(err, TextveilError::Validation(_)));
        assert!(err.to_string().contains("overlaps"));
    }

    #[test]
    fn test_rejects_split_utf8_character() {
        let text = "héllo world";
        // 'é' occupies bytes 1..3; offset 2 lands inside it
        let mut span = SpanRecord::new("h\u{e9}", PiiCategory::Person, 0, 2);
        span.identity_id = Some(1);
        let err = rewriter().rewrite(text, &[span]).unwrap_err();
        assert!(matches!(err, TextveilError::Validation(_)));
    }

    #[test]
    fn test_multibyte_text_with_aligned_offsets() {
        let text = "José met Bob.";
        // "José" is bytes 0..5 (é is two bytes)
        let spans = assigned(vec![
            SpanRecord::new("José", PiiCategory::Person, 0, 5),
            SpanRecord::new("Bob", PiiCategory::Person, 10, 13),
        ]);

        let output = rewriter().rewrite(text, &spans).unwrap();

        assert!(output.contains(" met "));
        assert!(output.ends_with('.'));
        assert!(!output.contains("José"));
        assert!(!output.contains("Bob"));
    }
}
