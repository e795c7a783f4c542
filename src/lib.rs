// Textveil - PII Pseudonymization Tool
// Copyright (c) 2025 Textveil Contributors
// Licensed under the MIT License

//! # Textveil - PII Pseudonymization for Text Documents
//!
//! Textveil redacts personally identifiable information from free-text
//! documents: it locates PII spans, replaces each with a synthetic value of
//! the same category, and measures how completely the original values
//! disappeared from the output.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII spans with a regex pattern table
//! - **Grouping** spans into identity classes so repeated mentions of the
//!   same entity get the same fake value
//! - **Rewriting** documents with category-shaped synthetic replacements
//! - **Scoring** the result by recall of the original values
//!
//! ## Architecture
//!
//! Textveil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (document handling, run coordination)
//! - [`detector`] - PII span detection (regex pattern table)
//! - [`engine`] - Pseudonymization engine (identity, rewriting, recall)
//! - [`domain`] - Error hierarchy and shared result type
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textveil::engine::{Engine, EngineConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = Engine::new(EngineConfig::default())?;
//!
//!     let text = "Her SSN is 123-45-6789, filed last week.";
//!     let outcome = engine.process_document("letter.txt", text)?;
//!
//!     println!("{}", outcome.anonymized_text);
//!     println!("recall: {:.3}", outcome.recall);
//!     Ok(())
//! }
//! ```
//!
//! ## Identity-Consistent Replacement
//!
//! Spans with the same value (after stripping a trailing possessive `'s`)
//! share one identity class, and every member of a class is replaced with
//! the same synthetic value:
//!
//! ```rust,no_run
//! use textveil::engine::{IdentityAssigner, PiiCategory, SpanRecord,
//!     SyntheticValueGenerator, TextRewriter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let text = "Alice met Bob. Alice left.";
//! let mut spans = vec![
//!     SpanRecord::new("Alice", PiiCategory::Person, 0, 5),
//!     SpanRecord::new("Bob", PiiCategory::Person, 10, 13),
//!     SpanRecord::new("Alice", PiiCategory::Person, 15, 20),
//! ];
//!
//! IdentityAssigner::new().assign(&mut spans);
//! let mut rewriter = TextRewriter::new(SyntheticValueGenerator::new());
//! let anonymized = rewriter.rewrite(text, &spans)?;
//! // Both "Alice" mentions now carry the same fake name
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Textveil uses the [`domain::TextveilError`] type for domain errors.
//! Malformed spans (reversed ranges, out-of-bounds or overlapping offsets)
//! are rejected with a validation error before any splicing happens; a bad
//! offset must never silently corrupt unrelated text.
//!
//! ## Logging
//!
//! Textveil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(document_id = "letter.txt", recall = 1.0, "Processed document");
//! warn!("No documents found in input directory");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod detector;
pub mod domain;
pub mod engine;
pub mod logging;
