//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{KycError, Result};

/// Main configuration for the kyc pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KycConfig {
    /// Document classification configuration.
    pub classification: ClassificationConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Entity recognizer configuration.
    pub ner: NerConfig,

    /// Duplicate-check store configuration.
    pub store: StoreConfig,
}

/// Document classification configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Recognize Voter ID cards (checked after Aadhaar, before PAN). Off by
    /// default.
    pub detect_voter_id: bool,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Try a labelled date of birth ("DOB: ...") before the first bare date.
    pub prefer_labelled_dob: bool,

    /// Use recognizer PERSON spans as name candidates.
    pub use_ner: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            prefer_labelled_dob: true,
            use_ner: true,
        }
    }
}

/// Entity recognizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// Extra stop words for the rule-based recognizer, one per line.
    pub gazetteer: Option<PathBuf>,
}

/// Duplicate-check store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Record duplicates across runs.
    pub enabled: bool,

    /// JSON file holding stored records.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("kyc-records.json"),
        }
    }
}

impl KycConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KycError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> std::result::Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
