//! Word-level tokenizer model

use crate::artifact::{load_json, parse_json, reader_path};
use crate::ModelError;
use sciclaim_domain::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Pretrained tokenizer model
///
/// Splits on whitespace, then separates leading and trailing punctuation and
/// contraction suffixes into their own tokens. Tokens never contain whitespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerModel {
    /// Language code the model was built for
    language: String,

    /// Words that keep their trailing period, lower case and without it
    #[serde(default)]
    abbreviations: HashSet<String>,

    /// Suffixes split off into their own token, e.g. `n't`
    #[serde(default = "default_contractions")]
    contractions: Vec<String>,

    /// Trailing symbols kept on the token when preceded by a letter or digit
    #[serde(default = "default_attached_suffixes")]
    attached_suffixes: Vec<char>,
}

impl TokenizerModel {
    /// Load a model artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let model: Self = load_json(path)?;
        let model = model.normalized(path)?;
        debug!(
            "Loaded tokenizer model from '{}' (language '{}', {} abbreviations, {} contractions)",
            path.display(),
            model.language,
            model.abbreviations.len(),
            model.contractions.len()
        );
        Ok(model)
    }

    /// Load a model artifact from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let path = reader_path();
        let model: Self = parse_json(reader, &path)?;
        model.normalized(&path)
    }

    /// Load a model artifact from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_reader(json.as_bytes())
    }

    /// Language code of the model
    pub fn language(&self) -> &str {
        &self.language
    }

    fn normalized(mut self, path: &Path) -> Result<Self, ModelError> {
        if self.language.trim().is_empty() {
            return Err(ModelError::Malformed {
                path: path.to_path_buf(),
                reason: "language must not be empty".to_string(),
            });
        }
        if self.contractions.iter().any(|c| c.is_empty()) {
            return Err(ModelError::Malformed {
                path: path.to_path_buf(),
                reason: "contractions must not contain empty suffixes".to_string(),
            });
        }
        self.abbreviations = self
            .abbreviations
            .into_iter()
            .map(|a| a.trim().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Ok(self)
    }

    fn split_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        if !chunk.chars().any(char::is_alphanumeric) {
            tokens.push(chunk.to_string());
            return;
        }

        let mut rest = chunk;
        while let Some(c) = rest.chars().next() {
            if c.is_alphanumeric() {
                break;
            }
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        while let Some(c) = rest.chars().next_back() {
            if c.is_alphanumeric() {
                break;
            }
            let stem = &rest[..rest.len() - c.len_utf8()];
            if self.attached_suffixes.contains(&c)
                && stem.chars().next_back().is_some_and(char::is_alphanumeric)
            {
                break;
            }
            if c == '.' && self.abbreviations.contains(&stem.to_lowercase()) {
                break;
            }
            trailing.push(c.to_string());
            rest = stem;
        }

        self.split_contraction(rest, tokens);
        tokens.extend(trailing.into_iter().rev());
    }

    fn split_contraction(&self, word: &str, tokens: &mut Vec<String>) {
        for suffix in &self.contractions {
            if word.len() <= suffix.len() {
                continue;
            }
            let at = word.len() - suffix.len();
            if word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(suffix) {
                tokens.push(word[..at].to_string());
                tokens.push(word[at..].to_string());
                return;
            }
        }
        tokens.push(word.to_string());
    }
}

impl Tokenizer for TokenizerModel {
    type Error = ModelError;

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, Self::Error> {
        let mut tokens = Vec::new();
        for chunk in sentence.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }
        Ok(tokens)
    }
}

fn default_contractions() -> Vec<String> {
    ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_attached_suffixes() -> Vec<char> {
    vec!['%']
}
