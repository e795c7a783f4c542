//! Synthetic value generation
//!
//! Produces a plausible fake value for each PII category. Every call is
//! independent; caching one value per identity class is the rewriter's job.

use crate::engine::span::PiiCategory;
use rand::{Rng, SeedableRng};

/// Mask used for categories without a shaped generator
pub const GENERIC_MASK: &str = "******";

const FIRST_NAMES: &[&str] = &[
    "John", "Emma", "Michael", "Sophia", "William", "Olivia", "James", "Ava", "Alexander",
    "Isabella",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Taylor",
];

const ORG_PREFIXES: &[&str] = &[
    "Global",
    "National",
    "International",
    "United",
    "World",
    "American",
    "Universal",
];

const ORG_SUFFIXES: &[&str] = &[
    "Corp",
    "Inc",
    "Ltd",
    "Group",
    "Organization",
    "Associates",
    "Enterprises",
    "Solutions",
    "Industries",
    "GmbH",
];

const PASSPORT_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates category-shaped synthetic replacement values
///
/// The generator owns its RNG (the same `StdRng` pattern used for token
/// generation elsewhere in the crate); use
/// [`SyntheticValueGenerator::with_seed`] when tests need stable output.
/// Values match the general shape of real data in their category but are
/// never derived from the original value.
pub struct SyntheticValueGenerator {
    rng: rand::rngs::StdRng,
}

impl SyntheticValueGenerator {
    /// Create a new generator with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Create a new generator with a fixed seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a fresh synthetic value for a category
    ///
    /// Unknown categories fall back to the generic mask; this never fails.
    pub fn generate(&mut self, category: PiiCategory) -> String {
        match category {
            PiiCategory::Person => self.person_name(),
            PiiCategory::Org => self.org_name(),
            PiiCategory::CarPlate => self.car_plate(),
            PiiCategory::SocialSecurityNumber => self.social_security_number(),
            PiiCategory::CreditCard => self.credit_card_number(),
            PiiCategory::Passport => self.passport_number(),
            PiiCategory::Other => GENERIC_MASK.to_string(),
        }
    }

    /// "{FirstName} {LastName}" from the fixed name lists
    fn person_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        format!("{first} {last}")
    }

    /// "{Prefix} {Suffix}" from the fixed affix lists
    fn org_name(&mut self) -> String {
        let prefix = ORG_PREFIXES[self.rng.gen_range(0..ORG_PREFIXES.len())];
        let suffix = ORG_SUFFIXES[self.rng.gen_range(0..ORG_SUFFIXES.len())];
        format!("{prefix} {suffix}")
    }

    /// Three uppercase letters, a dash, four digits
    fn car_plate(&mut self) -> String {
        let prefix: String = (0..3).map(|_| self.uppercase_letter()).collect();
        let suffix: String = (0..4).map(|_| self.digit()).collect();
        format!("{prefix}-{suffix}")
    }

    /// Nine digits formatted XXX-XX-XXXX
    fn social_security_number(&mut self) -> String {
        let digits: String = (0..9).map(|_| self.digit()).collect();
        format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..])
    }

    /// Sixteen digits, no separators
    fn credit_card_number(&mut self) -> String {
        (0..16).map(|_| self.digit()).collect()
    }

    /// Nine characters from uppercase letters and digits
    fn passport_number(&mut self) -> String {
        (0..9)
            .map(|_| char::from(PASSPORT_CHARSET[self.rng.gen_range(0..PASSPORT_CHARSET.len())]))
            .collect()
    }

    fn uppercase_letter(&mut self) -> char {
        char::from(b'A' + self.rng.gen_range(0..26u8))
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.rng.gen_range(0..10u8))
    }
}

impl Default for SyntheticValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> SyntheticValueGenerator {
        SyntheticValueGenerator::with_seed(42)
    }

    #[test]
    fn test_person_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let name = gen.generate(PiiCategory::Person);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(FIRST_NAMES.contains(&parts[0]));
            assert!(LAST_NAMES.contains(&parts[1]));
        }
    }

    #[test]
    fn test_org_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let name = gen.generate(PiiCategory::Org);
            let (prefix, suffix) = name.split_once(' ').expect("org name has two parts");
            assert!(ORG_PREFIXES.contains(&prefix));
            assert!(ORG_SUFFIXES.contains(&suffix));
        }
    }

    #[test]
    fn test_car_plate_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let plate = gen.generate(PiiCategory::CarPlate);
            let (prefix, suffix) = plate.split_once('-').expect("plate has a dash");
            assert_eq!(prefix.len(), 3);
            assert!(prefix.chars().all(|c| c.is_ascii_uppercase()));
            assert_eq!(suffix.len(), 4);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_ssn_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let ssn = gen.generate(PiiCategory::SocialSecurityNumber);
            let parts: Vec<&str> = ssn.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0].len(), 3);
            assert_eq!(parts[1].len(), 2);
            assert_eq!(parts[2].len(), 4);
            assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
        }
    }

    #[test]
    fn test_credit_card_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let number = gen.generate(PiiCategory::CreditCard);
            assert_eq!(number.len(), 16);
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_passport_shape() {
        let mut gen = generator();
        for _ in 0..20 {
            let number = gen.generate(PiiCategory::Passport);
            assert_eq!(number.len(), 9);
            assert!(number
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_other_is_masked() {
        let mut gen = generator();
        assert_eq!(gen.generate(PiiCategory::Other), GENERIC_MASK);
        assert_eq!(gen.generate(PiiCategory::Other), GENERIC_MASK);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let mut a = SyntheticValueGenerator::with_seed(99);
        let mut b = SyntheticValueGenerator::with_seed(99);
        for category in [
            PiiCategory::Person,
            PiiCategory::Org,
            PiiCategory::CarPlate,
            PiiCategory::SocialSecurityNumber,
            PiiCategory::CreditCard,
            PiiCategory::Passport,
        ] {
            assert_eq!(a.generate(category), b.generate(category));
        }
    }
}
