//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::entities::EntityTagger;
use crate::error::ExtractorError;
use crate::patterns::ClaimPatternMatcher;
use crate::strength::StrengthClassifier;
use crate::types::{ExtractionMetadata, ExtractionResult};
use sciclaim_domain::traits::{SentenceSegmenter, Tokenizer};
use sciclaim_domain::Claim;
use sciclaim_models::{SentenceModel, TokenizerModel};
use std::fmt::Display;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// The Extractor turns scientific text into candidate claims
///
/// Holds no mutable state after construction, so one instance can serve
/// concurrent callers when the models are `Sync`.
#[derive(Debug, Clone)]
pub struct ClaimExtractor<S, T> {
    segmenter: S,
    tokenizer: T,
    matcher: ClaimPatternMatcher,
    tagger: EntityTagger,
    classifier: StrengthClassifier,
}

impl ClaimExtractor<SentenceModel, TokenizerModel> {
    /// Load both model artifacts named by `config`
    ///
    /// Fails with [`ExtractorError::Initialization`] naming the artifact path
    /// when a model is missing or malformed.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        info!(
            "Loading models: sentence '{}', tokenizer '{}'",
            config.sentence_model.display(),
            config.tokenizer_model.display()
        );

        let segmenter = SentenceModel::from_path(&config.sentence_model)?;
        let tokenizer = TokenizerModel::from_path(&config.tokenizer_model)?;

        Ok(Self::new(segmenter, tokenizer))
    }

    /// Load `en-sent.json` and `en-token.json` from `dir`
    pub fn from_models_dir(dir: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        Self::from_config(&ExtractorConfig::default().with_models_dir(dir))
    }
}

impl<S, T> ClaimExtractor<S, T>
where
    S: SentenceSegmenter,
    T: Tokenizer,
    S::Error: Display,
    T::Error: Display,
{
    /// Create a new Extractor from already-loaded models
    pub fn new(segmenter: S, tokenizer: T) -> Self {
        Self {
            segmenter,
            tokenizer,
            matcher: ClaimPatternMatcher::new(),
            tagger: EntityTagger::new(),
            classifier: StrengthClassifier::new(),
        }
    }

    /// Extract claims from text, in sentence order
    pub fn extract_claims(&self, text: &str) -> Result<Vec<Claim>, ExtractorError> {
        Ok(self.extract(text)?.claims)
    }

    /// Extract claims from text along with extraction metadata
    pub fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractorError> {
        let start_time = Instant::now();

        info!("Starting extraction, text length {}", text.len());

        let sentences = self
            .segmenter
            .segment(text)
            .map_err(|e| ExtractorError::Segmentation(e.to_string()))?;

        debug!("Segmented {} sentences", sentences.len());

        let mut claims = Vec::new();
        for sentence in &sentences {
            if let Some(claim) = self.process_sentence(sentence)? {
                claims.push(claim);
            }
        }

        let metadata = ExtractionMetadata {
            sentences_scanned: sentences.len(),
            claims_found: claims.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} claims from {} sentences",
            metadata.claims_found, metadata.sentences_scanned
        );

        Ok(ExtractionResult { claims, metadata })
    }

    /// Run the gate, tagger and classifier on one sentence
    fn process_sentence(&self, sentence: &str) -> Result<Option<Claim>, ExtractorError> {
        let text = sentence.trim();

        let Some(pattern) = self.matcher.first_match(text) else {
            return Ok(None);
        };

        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| ExtractorError::Tokenization(e.to_string()))?;

        let entities = self.tagger.tag(&tokens);
        let strength = self.classifier.classify(text);

        debug!(
            "Claim matched by '{}': {} tokens, {} entities, {} (hedge: {})",
            pattern,
            tokens.len(),
            entities.len(),
            strength,
            self.classifier.matched_hedge(text).unwrap_or("none")
        );

        Ok(Some(Claim::new(text, entities, strength)))
    }

    /// The sentence segmenter in use
    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// The tokenizer in use
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }
}
