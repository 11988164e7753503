//! Entity span types.

use serde::{Deserialize, Serialize};

/// Label attached to spans that name a person.
pub const PERSON: &str = "PERSON";

/// A labelled span of text produced by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Span text as it appears in the input.
    pub text: String,

    /// Semantic label (e.g. `PERSON`).
    pub label: String,
}

impl EntitySpan {
    /// Create a new span.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// Create a `PERSON` span.
    pub fn person(text: impl Into<String>) -> Self {
        Self::new(text, PERSON)
    }

    /// Check whether this span names a person.
    pub fn is_person(&self) -> bool {
        self.label == PERSON
    }
}
