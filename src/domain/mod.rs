//! Core domain types
//!
//! This module contains the error hierarchy and result alias shared by
//! every other module in the crate.

pub mod errors;
pub mod result;

pub use errors::TextveilError;
pub use result::Result;
