//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the sentence model inside a models directory
pub const SENTENCE_MODEL_FILE: &str = "en-sent.json";

/// File name of the tokenizer model inside a models directory
pub const TOKENIZER_MODEL_FILE: &str = "en-token.json";

/// Directory searched for model artifacts when nothing else is configured
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Path to the sentence boundary model artifact
    pub sentence_model: PathBuf,

    /// Path to the tokenizer model artifact
    pub tokenizer_model: PathBuf,
}

impl ExtractorConfig {
    /// Point both model paths at the conventional file names inside `dir`
    pub fn with_models_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.sentence_model = dir.join(SENTENCE_MODEL_FILE);
        self.tokenizer_model = dir.join(TOKENIZER_MODEL_FILE);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sentence_model.as_os_str().is_empty() {
            return Err("sentence_model path must not be empty".to_string());
        }
        if self.tokenizer_model.as_os_str().is_empty() {
            return Err("tokenizer_model path must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ExtractorError::Config(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&contents).map_err(ExtractorError::Config)
    }
}

impl Default for ExtractorConfig {
    /// Models under `models/` relative to the working directory
    fn default() -> Self {
        Self {
            sentence_model: PathBuf::new(),
            tokenizer_model: PathBuf::new(),
        }
        .with_models_dir(DEFAULT_MODELS_DIR)
    }
}
