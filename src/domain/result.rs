//! Domain result type alias

use crate::domain::errors::TextveilError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, TextveilError>;
