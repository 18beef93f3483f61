//! Error types for the Extractor

use sciclaim_models::ModelError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A model artifact is missing, unreadable, or malformed
    #[error("Failed to load model '{}': {reason}", .path.display())]
    Initialization {
        /// Artifact path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// Sentence segmenter failure
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// Tokenizer failure
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ModelError> for ExtractorError {
    fn from(e: ModelError) -> Self {
        let path = e
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("<unknown>"));
        let reason = match e {
            ModelError::Io { source, .. } => source.to_string(),
            ModelError::Malformed { reason, .. } => reason,
            ModelError::Other(reason) => reason,
        };
        ExtractorError::Initialization { path, reason }
    }
}
