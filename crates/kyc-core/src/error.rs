//! Error types for the kyc-core library.

use thiserror::Error;

/// Main error type for the kyc library.
///
/// Field extraction itself never fails; errors come from the surrounding
/// concerns (configuration, recognizer start-up, the duplicate store).
#[derive(Error, Debug)]
pub enum KycError {
    /// Duplicate-check store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Entity recognizer error.
    #[error("recognizer error: {0}")]
    Ner(#[from] kyc_ner::NerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the duplicate-check store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize records.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file holds data that is not a record list.
    #[error("corrupt store {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Result type for the kyc library.
pub type Result<T> = std::result::Result<T, KycError>;
