//! Duplicate-check store for parsed documents.
//!
//! The parser never touches the store; callers register each parsed document
//! after extraction. Check and insert are two separate calls, so two writers
//! registering the same number at the same time can both see it as new.
//! Callers that need atomicity must serialize registration or use a backing
//! store with a uniqueness constraint.

mod json_file;

pub use json_file::JsonFileStore;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::models::document::{DocumentFields, DocumentType, ParsedDocument, ProcessingReport};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A persisted document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub document_type: DocumentType,

    /// Unique document number.
    pub key: String,

    pub fields: DocumentFields,

    pub recorded_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Build a record from extracted fields. Returns `None` when the fields
    /// carry no document number.
    pub fn from_fields(fields: DocumentFields) -> Option<Self> {
        let key = fields.unique_key()?.to_string();
        Some(Self {
            document_type: fields.document_type(),
            key,
            fields,
            recorded_at: Utc::now(),
        })
    }
}

/// Trait for duplicate-check stores, keyed by document type and number.
pub trait DocumentStore {
    /// Check whether a document number was stored before.
    fn exists(&self, document_type: DocumentType, key: &str) -> Result<bool>;

    /// Store a record.
    fn insert(&mut self, record: StoredRecord) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: HashSet<(DocumentType, String)>,
    records: Vec<StoredRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records in insertion order.
    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }
}

impl DocumentStore for MemoryStore {
    fn exists(&self, document_type: DocumentType, key: &str) -> Result<bool> {
        Ok(self.keys.contains(&(document_type, key.to_string())))
    }

    fn insert(&mut self, record: StoredRecord) -> Result<()> {
        self.keys.insert((record.document_type, record.key.clone()));
        self.records.push(record);
        Ok(())
    }
}

/// Run the duplicate check for a parsed document and store it if new.
///
/// Unknown documents are reported as not parsed with no duplicate verdict.
/// Documents without a number are reported as non-duplicates and not stored.
pub fn register<S>(store: &mut S, parsed: ParsedDocument) -> Result<ProcessingReport>
where
    S: DocumentStore + ?Sized,
{
    let Some(fields) = parsed.fields else {
        return Ok(ProcessingReport {
            document_type: parsed.document_type,
            is_successfully_parsed: false,
            is_duplicate: None,
            data: None,
        });
    };

    let mut is_duplicate = false;
    if let Some(key) = fields.unique_key() {
        if store.exists(parsed.document_type, key)? {
            debug!("{} {} already registered", parsed.document_type, key);
            is_duplicate = true;
        } else if let Some(record) = StoredRecord::from_fields(fields.clone()) {
            store.insert(record)?;
        }
    }

    Ok(ProcessingReport {
        document_type: parsed.document_type,
        is_successfully_parsed: true,
        is_duplicate: Some(is_duplicate),
        data: Some(fields),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{PanDetails, VoterIdDetails};

    fn pan(number: Option<&str>) -> ParsedDocument {
        ParsedDocument {
            document_type: DocumentType::Pan,
            fields: Some(DocumentFields::Pan(PanDetails {
                number: number.map(String::from),
                ..Default::default()
            })),
        }
    }

    #[test]
    fn test_second_registration_is_duplicate() {
        let mut store = MemoryStore::new();

        let first = register(&mut store, pan(Some("ABCDE1234F"))).unwrap();
        assert_eq!(first.is_duplicate, Some(false));
        assert!(first.is_successfully_parsed);

        let second = register(&mut store, pan(Some("ABCDE1234F"))).unwrap();
        assert_eq!(second.is_duplicate, Some(true));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_keys_are_scoped_by_type() {
        let mut store = MemoryStore::new();
        register(&mut store, pan(Some("ABC1234567"))).unwrap();

        let voter = ParsedDocument {
            document_type: DocumentType::VoterId,
            fields: Some(DocumentFields::VoterId(VoterIdDetails {
                voter_id: Some("ABC1234567".to_string()),
                ..Default::default()
            })),
        };
        let report = register(&mut store, voter).unwrap();
        assert_eq!(report.is_duplicate, Some(false));
    }

    #[test]
    fn test_missing_number_is_not_stored() {
        let mut store = MemoryStore::new();
        let report = register(&mut store, pan(None)).unwrap();
        assert_eq!(report.is_duplicate, Some(false));
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_unknown_document() {
        let mut store = MemoryStore::new();
        let report = register(&mut store, ParsedDocument::unknown()).unwrap();
        assert!(!report.is_successfully_parsed);
        assert_eq!(report.is_duplicate, None);
        assert!(report.data.is_none());
    }
}
