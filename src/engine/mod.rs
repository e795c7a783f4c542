//! Pseudonymization engine for Textveil
//!
//! This module implements the core of the tool: identity-preserving
//! replacement of detected PII spans with synthetic values, plus recall
//! scoring of the result.
//!
//! # Architecture
//!
//! The per-document pipeline is:
//! - **IdentityAssigner**: spans with equal (possessive-normalized) values
//!   share one identity class ID
//! - **SyntheticValueGenerator**: one category-shaped fake value per class
//! - **TextRewriter**: splices the replacements left to right, tracking the
//!   offset drift introduced by unequal-length replacements
//! - **RecallEvaluator**: fraction of original values fully removed
//!
//! # Usage
//!
//! ```rust,ignore
//! use textveil::engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! let outcome = engine.process_document("letter.txt", text)?;
//! println!("recall {:.3}", outcome.recall);
//! ```

pub mod audit;
pub mod config;
pub mod generator;
pub mod identity;
pub mod pipeline;
pub mod recall;
pub mod report;
pub mod rewriter;
pub mod span;

// Re-export main types
pub use config::EngineConfig;
pub use generator::SyntheticValueGenerator;
pub use identity::IdentityAssigner;
pub use pipeline::{DocumentOutcome, Engine};
pub use recall::RecallEvaluator;
pub use report::RunReport;
pub use rewriter::TextRewriter;
pub use span::{PiiCategory, SpanRecord};
