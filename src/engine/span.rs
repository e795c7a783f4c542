//! PII span data models

use serde::{Deserialize, Serialize};

/// PII category enumeration
///
/// The set of categories is open: labels the detector emits that have no
/// dedicated variant parse to [`PiiCategory::Other`] and are replaced with
/// a generic mask rather than a shaped synthetic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Personal names
    Person,
    /// Organization names
    Org,
    /// Vehicle license plates
    CarPlate,
    /// Social Security Numbers
    SocialSecurityNumber,
    /// Credit card numbers
    CreditCard,
    /// Passport numbers
    Passport,
    /// Any other category the detector reports
    Other,
}

impl PiiCategory {
    /// Get the canonical label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::CarPlate => "CAR_PLATE",
            Self::SocialSecurityNumber => "SOCIAL_SECURITY_NUMBER",
            Self::CreditCard => "CREDIT_CARD",
            Self::Passport => "PASSPORT",
            Self::Other => "OTHER",
        }
    }

    /// Parse a detector label into a category
    ///
    /// Unknown labels map to [`PiiCategory::Other`]; this never fails.
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" => Self::Org,
            "CAR_PLATE" | "LICENSE_PLATE" => Self::CarPlate,
            "SOCIAL_SECURITY_NUMBER" | "SSN" => Self::SocialSecurityNumber,
            "CREDIT_CARD" => Self::CreditCard,
            "PASSPORT" => Self::Passport,
            _ => Self::Other,
        }
    }
}

/// One detected occurrence of a PII value at a specific offset range
///
/// Offsets are byte offsets into the *original* UTF-8 text, half-open
/// (`start < end <= text.len()`), aligned to character boundaries, and are
/// never re-based after creation. The record is immutable after creation
/// except for `identity_id`, which the identity assigner sets exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanRecord {
    /// Exact substring matched in the source text
    pub value: String,
    /// Category of PII
    pub category: PiiCategory,
    /// Start offset in the original text
    pub start: usize,
    /// End offset in the original text (exclusive)
    pub end: usize,
    /// Identity class ID, shared by all mentions of the same entity
    pub identity_id: Option<u64>,
}

impl SpanRecord {
    /// Create a new span with no identity assigned
    pub fn new(value: impl Into<String>, category: PiiCategory, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            category,
            start,
            end,
            identity_id: None,
        }
    }

    /// Width of the span in the original text, in bytes
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}
