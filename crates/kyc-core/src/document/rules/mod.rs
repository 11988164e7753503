//! Rule-based field extractors for Indian identity documents.

pub mod aadhaar;
pub mod dates;
pub mod gender;
pub mod name;
pub mod pan;
pub mod patterns;
pub mod voter_id;

pub use aadhaar::{concat_digits, extract_aadhaar_number};
pub use dates::{extract_dob, DobExtractor};
pub use gender::extract_gender;
pub use name::{extract_name, extract_voter_names, BilingualName, Candidate, CandidateSource, NameExtractor, NameProfile};
pub use pan::{extract_pan_number, is_valid_pan, pan_candidates};
pub use voter_id::{extract_voter_id, is_valid_voter_id, voter_id_candidates};

/// Trait for field extractors that report confidence and position, such as
/// [`DobExtractor`].
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A field value with the strength of the pattern that found it.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    pub value: T,
    /// 0.95 for a labelled date of birth, lower for a bare date.
    pub confidence: f32,
    /// Byte range of the value in the OCR text.
    pub position: Option<(usize, usize)>,
    /// Full matched text, label included.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
