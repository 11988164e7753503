//! Error types for the recognition layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or running a recognizer.
#[derive(Error, Debug)]
pub enum NerError {
    /// Failed to load a gazetteer file.
    #[error("failed to load gazetteer {path}: {source}")]
    GazetteerLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Recognition failed for a single input.
    #[error("recognition failed: {0}")]
    Recognition(String),
}
