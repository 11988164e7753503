//! Named-entity recognition layer for kyc.
//!
//! This crate provides a unified interface for entity recognizers used by the
//! document parser:
//! - [`RuleBasedRecognizer`], a model-free recognizer for person names on
//!   Indian identity documents
//! - [`NoopRecognizer`], used when recognition is disabled
//!
//! Recognizers are built once at start-up and shared read-only between
//! parsing calls.

mod error;
mod recognizer;
mod span;

pub use error::NerError;
pub use recognizer::{EntityRecognizer, NoopRecognizer, RuleBasedRecognizer};
pub use span::{EntitySpan, PERSON};

/// Result type for recognition operations.
pub type Result<T> = std::result::Result<T, NerError>;
