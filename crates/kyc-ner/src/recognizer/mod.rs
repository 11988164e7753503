//! Entity recognizer implementations.

mod rules;

pub use rules::RuleBasedRecognizer;

use crate::{EntitySpan, Result};

/// Trait for named-entity recognizers.
///
/// A recognizer is built once at process start and then shared read-only
/// across parsing calls, so implementations must be `Send + Sync` and must
/// not rely on interior mutability for correctness.
pub trait EntityRecognizer: Send + Sync {
    /// Human-readable recognizer identifier (e.g. "rules", "noop").
    fn recognizer_id(&self) -> &str;

    /// Recognize entity spans in the given text.
    ///
    /// # Arguments
    /// * `text` - Raw OCR text, possibly mixing Latin and Devanagari script
    ///
    /// # Returns
    /// Labelled spans in the order they occur in the text
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;
}

/// Recognizer that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn recognizer_id(&self) -> &str {
        "noop"
    }

    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_recognizer() {
        let recognizer = NoopRecognizer;
        assert_eq!(recognizer.recognizer_id(), "noop");
        assert!(recognizer.recognize("RAHUL KUMAR").unwrap().is_empty());
    }
}
