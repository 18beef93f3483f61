//! Sciclaim Model Layer
//!
//! Pluggable sentence segmentation and tokenization backends.
//!
//! # Architecture
//!
//! This crate provides implementations of the `SentenceSegmenter` and
//! `Tokenizer` traits from `sciclaim-domain`. The extractor only sees the
//! traits, so any compatible pretrained model can be substituted.
//!
//! # Backends
//!
//! - `SentenceModel` / `TokenizerModel`: rule models loaded from JSON artifacts
//! - `MockSegmenter` / `MockTokenizer`: Deterministic mocks for testing
//!
//! # Examples
//!
//! ```
//! use sciclaim_models::{SentenceModel, TokenizerModel};
//! use sciclaim_domain::traits::{SentenceSegmenter, Tokenizer};
//!
//! let sentences = SentenceModel::from_json(r#"{"language": "en"}"#).unwrap();
//! let tokens = TokenizerModel::from_json(r#"{"language": "en"}"#).unwrap();
//!
//! let split = sentences.segment("It works. It scales.").unwrap();
//! assert_eq!(split, vec!["It works.", "It scales."]);
//! assert_eq!(tokens.tokenize("by 40%.").unwrap(), vec!["by", "40%", "."]);
//! ```

#![warn(missing_docs)]

mod artifact;
pub mod sentence;
pub mod tokenizer;

use sciclaim_domain::traits::{SentenceSegmenter, Tokenizer};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use sentence::SentenceModel;
pub use tokenizer::TokenizerModel;

/// Errors that can occur while loading or running a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// The artifact could not be opened or read
    #[error("cannot read model artifact '{}': {source}", .path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but is not a valid model
    #[error("malformed model artifact '{}': {reason}", .path.display())]
    Malformed {
        /// Artifact path
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Generic model failure
    #[error("model error: {0}")]
    Other(String),
}

impl ModelError {
    /// Path of the artifact involved, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ModelError::Io { path, .. } | ModelError::Malformed { path, .. } => Some(path),
            ModelError::Other(_) => None,
        }
    }
}

/// Mock segmenter for deterministic testing
///
/// Treats every non-blank line as one sentence. It's useful for driving the
/// extractor without model artifacts.
///
/// # Examples
///
/// ```
/// use sciclaim_models::MockSegmenter;
/// use sciclaim_domain::traits::SentenceSegmenter;
///
/// let segmenter = MockSegmenter::new();
/// let sentences = segmenter.segment("One line.\n\n  Another line.  ").unwrap();
/// assert_eq!(sentences, vec!["One line.", "Another line."]);
/// assert_eq!(segmenter.call_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSegmenter {
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockSegmenter {
    /// Create a mock that splits on newlines
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails on every call
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get the number of times segment was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl SentenceSegmenter for MockSegmenter {
    type Error = ModelError;

    fn segment(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ModelError::Other("Mock segmentation error".to_string()));
        }
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Mock tokenizer for deterministic testing
///
/// Splits on whitespace only, so punctuation stays attached to words.
#[derive(Debug, Clone, Default)]
pub struct MockTokenizer {
    fail: bool,
    call_count: Arc<AtomicUsize>,
}

impl MockTokenizer {
    /// Create a mock that splits on whitespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails on every call
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get the number of times tokenize was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Tokenizer for MockTokenizer {
    type Error = ModelError;

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ModelError::Other("Mock tokenization error".to_string()));
        }
        Ok(sentence.split_whitespace().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_sentence_model_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"language": "en", "abbreviations": ["fig"]}}"#).unwrap();

        let model = SentenceModel::from_path(file.path()).unwrap();
        assert_eq!(model.language(), "en");
        assert!(model.is_abbreviation("Fig"));
    }

    #[test]
    fn test_missing_artifact_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en-sent.json");

        let err = SentenceModel::from_path(&path).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
        assert_eq!(err.path(), Some(path.as_path()));
        assert!(err.to_string().contains("en-sent.json"));
    }

    #[test]
    fn test_corrupt_artifact_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0xff, 0x13, 0x37]).unwrap();

        let err = TokenizerModel::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Malformed { .. }));
        assert_eq!(err.path(), Some(file.path()));
    }

    #[test]
    fn test_reader_errors_use_reader_label() {
        let err = TokenizerModel::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("<reader>"));
    }

    #[test]
    fn test_shipped_models_load() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models");
        let sentences = SentenceModel::from_path(root.join("en-sent.json")).unwrap();
        let tokens = TokenizerModel::from_path(root.join("en-token.json")).unwrap();

        assert_eq!(sentences.language(), "en");
        assert_eq!(tokens.language(), "en");
        assert!(sentences.is_abbreviation("al"));
        assert!(sentences.is_sentence_starter("We"));
    }

    #[test]
    fn test_mock_segmenter_splits_lines() {
        let segmenter = MockSegmenter::new();
        let sentences = segmenter.segment("first\n\nsecond\n").unwrap();
        assert_eq!(sentences, vec!["first", "second"]);
        assert!(segmenter.segment("").unwrap().is_empty());
        assert_eq!(segmenter.call_count(), 2);
    }

    #[test]
    fn test_mock_failures() {
        assert!(MockSegmenter::failing().segment("text").is_err());
        assert!(MockTokenizer::failing().tokenize("text").is_err());
    }

    #[test]
    fn test_mock_tokenizer_clone_shares_count() {
        let tokenizer1 = MockTokenizer::new();
        let tokenizer2 = tokenizer1.clone();

        assert_eq!(tokenizer1.tokenize("a b  c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(tokenizer2.call_count(), 1);
    }
}
