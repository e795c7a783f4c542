//! Identity assignment for detected spans
//!
//! Groups spans into identity classes by literal value so that repeated
//! mentions of the same real-world entity share one ID, and therefore one
//! synthetic replacement value downstream.

use crate::engine::span::SpanRecord;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

/// Assigns identity class IDs to spans
///
/// Two spans belong to the same identity class iff their values are equal
/// after stripping a single trailing possessive marker (`'s`), independent
/// of category. The normalization is applied before every map access, on
/// both the store and the lookup side.
///
/// IDs are drawn from the full `u64` range from an owned RNG; use
/// [`IdentityAssigner::with_seed`] for reproducible assignment in tests.
pub struct IdentityAssigner {
    rng: rand::rngs::StdRng,
}

/// Strip a single trailing possessive marker from an identity key
///
/// "Alice's" and "Alice" normalize to the same key; an interior "'s"
/// (e.g. "O'sullivan") is left untouched.
fn normalize_identity(value: &str) -> &str {
    value.strip_suffix("'s").unwrap_or(value)
}

impl IdentityAssigner {
    /// Create a new assigner with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Create a new assigner with a fixed seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Assign identity IDs to spans in place, preserving input order
    ///
    /// Spans with equal normalized values receive the same ID. Spans that
    /// already carry an ID keep it (and seed the class mapping with it),
    /// which makes repeated assignment of the same sequence a no-op.
    ///
    /// The value-to-ID map is scoped to this call: identity classes never
    /// leak across documents.
    pub fn assign(&mut self, spans: &mut [SpanRecord]) {
        let mut ids_by_value: HashMap<String, u64> = HashMap::new();
        let mut used_ids: HashSet<u64> = HashSet::new();

        for span in spans.iter_mut() {
            let key = normalize_identity(&span.value);
            if let Some(&id) = ids_by_value.get(key) {
                span.identity_id = Some(id);
            } else {
                let id = match span.identity_id {
                    Some(existing) => existing,
                    None => self.fresh_id(&used_ids),
                };
                used_ids.insert(id);
                ids_by_value.insert(key.to_string(), id);
                span.identity_id = Some(id);
            }
        }
    }

    /// Draw a new ID, re-drawing on the improbable intra-document collision
    fn fresh_id(&mut self, used_ids: &HashSet<u64>) -> u64 {
        loop {
            let id = self.rng.gen_range(1..u64::MAX);
            if !used_ids.contains(&id) {
                return id;
            }
        }
    }
}

impl Default for IdentityAssigner {
    fn default() -> Self {
        Self::new()
    }
}
