//! Identity document data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of identity document a text was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// PAN card (Permanent Account Number).
    Pan,
    /// Aadhaar card.
    Aadhaar,
    /// Voter ID card (EPIC).
    VoterId,
    /// Not recognized; nothing is extracted.
    Unknown,
}

impl DocumentType {
    /// Wire name of the document type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pan => "PAN",
            Self::Aadhaar => "AADHAAR",
            Self::VoterId => "VOTER_ID",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Check if the type is a recognized document.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender printed on an Aadhaar card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

/// Fields read from a PAN card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanDetails {
    /// PAN number (AAAAA9999A).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Date of birth as printed (DD/MM/YYYY).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Card holder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Fields read from an Aadhaar card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AadhaarDetails {
    /// 12-digit Aadhaar number, without separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Card holder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Date of birth as printed (DD/MM/YYYY).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Fields read from a Voter ID card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoterIdDetails {
    /// EPIC number (AAA9999999).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_english: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_hindi: Option<String>,
}

/// Structured fields for one document, keyed by its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFields {
    Pan(PanDetails),
    Aadhaar(AadhaarDetails),
    VoterId(VoterIdDetails),
}

impl DocumentFields {
    /// Document type these fields belong to.
    pub fn document_type(&self) -> DocumentType {
        match self {
            Self::Pan(_) => DocumentType::Pan,
            Self::Aadhaar(_) => DocumentType::Aadhaar,
            Self::VoterId(_) => DocumentType::VoterId,
        }
    }

    /// The number that uniquely identifies the document, if it was found.
    pub fn unique_key(&self) -> Option<&str> {
        match self {
            Self::Pan(d) => d.number.as_deref(),
            Self::Aadhaar(d) => d.number.as_deref(),
            Self::VoterId(d) => d.voter_id.as_deref(),
        }
    }

    /// Primary holder name (English name for Voter ID cards).
    pub fn holder_name(&self) -> Option<&str> {
        match self {
            Self::Pan(d) => d.name.as_deref(),
            Self::Aadhaar(d) => d.name.as_deref(),
            Self::VoterId(d) => d.name_english.as_deref(),
        }
    }
}

/// Result of parsing one OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Classified (or forced) document type.
    pub document_type: DocumentType,

    /// Extracted fields; `None` for unknown documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<DocumentFields>,
}

impl ParsedDocument {
    /// A document that could not be classified.
    pub fn unknown() -> Self {
        Self {
            document_type: DocumentType::Unknown,
            fields: None,
        }
    }

    /// Check if fields were extracted.
    pub fn is_parsed(&self) -> bool {
        self.fields.is_some()
    }
}

/// Outcome reported to callers after the duplicate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub document_type: DocumentType,

    pub is_successfully_parsed: bool,

    /// `None` when no duplicate check was made (unknown documents).
    pub is_duplicate: Option<bool>,

    pub data: Option<DocumentFields>,
}

impl ProcessingReport {
    /// Build a report without consulting a store.
    pub fn unchecked(parsed: ParsedDocument) -> Self {
        Self {
            document_type: parsed.document_type,
            is_successfully_parsed: parsed.is_parsed(),
            is_duplicate: None,
            data: parsed.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_wire_names() {
        assert_eq!(serde_json::to_string(&DocumentType::VoterId).unwrap(), "\"VOTER_ID\"");
        assert_eq!(DocumentType::Pan.to_string(), "PAN");
        assert!(!DocumentType::Unknown.is_known());
    }

    #[test]
    fn test_fields_round_trip_through_json() {
        let fields = DocumentFields::Aadhaar(AadhaarDetails {
            number: Some("234567890123".to_string()),
            name: Some("SITA DEVI".to_string()),
            date_of_birth: None,
            gender: Some(Gender::Female),
        });

        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.contains("\"type\":\"AADHAAR\""));
        assert!(!json.contains("date_of_birth"));

        let back: DocumentFields = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn test_unique_key() {
        let fields = DocumentFields::VoterId(VoterIdDetails {
            voter_id: Some("ABC1234567".to_string()),
            ..Default::default()
        });
        assert_eq!(fields.unique_key(), Some("ABC1234567"));
        assert_eq!(fields.document_type(), DocumentType::VoterId);
        assert_eq!(DocumentFields::Pan(PanDetails::default()).unique_key(), None);
    }

    #[test]
    fn test_unchecked_report_for_unknown() {
        let report = ProcessingReport::unchecked(ParsedDocument::unknown());
        assert!(!report.is_successfully_parsed);
        assert_eq!(report.is_duplicate, None);
        assert_eq!(report.data, None);
    }
}
