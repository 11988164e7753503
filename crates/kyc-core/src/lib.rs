//! Core library for KYC document text parsing.
//!
//! This crate provides:
//! - Document classification (PAN, Aadhaar, Voter ID) from raw OCR text
//! - Rule-based field extraction (document numbers, date of birth, gender)
//! - Multi-source name extraction with bilingual support for Voter ID cards
//! - A duplicate-check store for callers that persist parsed records

pub mod document;
pub mod error;
pub mod models;
pub mod store;

pub use document::{classify, Classification, DocumentClassifier, DocumentParser, Evidence};
pub use error::{KycError, Result, StoreError};
pub use models::config::KycConfig;
pub use models::document::{
    AadhaarDetails, DocumentFields, DocumentType, Gender, PanDetails, ParsedDocument,
    ProcessingReport, VoterIdDetails,
};
pub use store::{register, DocumentStore, JsonFileStore, MemoryStore, StoredRecord};

/// Re-export recognizer types.
pub use kyc_ner::{EntityRecognizer, EntitySpan, NoopRecognizer, RuleBasedRecognizer};
