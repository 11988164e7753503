//! JSON file backed store.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{DocumentStore, Result, StoredRecord};
use crate::error::StoreError;
use crate::models::document::DocumentType;

/// Store keeping all records in one JSON file.
///
/// The file is read on open and rewritten on every insert. Single writer
/// only.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    keys: HashSet<(DocumentType, String)>,
    records: Vec<StoredRecord>,
}

impl JsonFileStore {
    /// Open a store, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records: Vec<StoredRecord> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
        } else {
            Vec::new()
        };

        info!("Opened record store {} with {} records", path.display(), records.len());

        let keys = records
            .iter()
            .map(|r| (r.document_type, r.key.clone()))
            .collect();

        Ok(Self {
            path,
            keys,
            records,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Wrote {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn exists(&self, document_type: DocumentType, key: &str) -> Result<bool> {
        Ok(self.keys.contains(&(document_type, key.to_string())))
    }

    fn insert(&mut self, record: StoredRecord) -> Result<()> {
        self.keys.insert((record.document_type, record.key.clone()));
        self.records.push(record);
        self.persist()
    }
}
