//! Sciclaim Extractor
//!
//! Finds candidate factual claims in scientific text.
//!
//! # Overview
//!
//! Text is split into sentences by a pretrained segmenter. Each sentence is
//! tested against a fixed, ordered set of lexical claim patterns ("shows that",
//! "we propose", ...). Sentences that pass are tokenized, tagged with coarse
//! shape-based entities, and labelled assertive or tentative by looking for
//! hedge words.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Pattern gate → Tokenizer → Entity tagger ┐
//!                                  └──────────→ Strength classifier → Claim
//! ```
//!
//! # Example Usage
//!
//! ```
//! use sciclaim_extractor::ClaimExtractor;
//! use sciclaim_domain::{EntityCategory, Strength};
//! use sciclaim_models::{SentenceModel, TokenizerModel};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let segmenter = SentenceModel::from_json(r#"{"language": "en"}"#)?;
//! let tokenizer = TokenizerModel::from_json(r#"{"language": "en"}"#)?;
//! let extractor = ClaimExtractor::new(segmenter, tokenizer);
//!
//! let claims = extractor.extract_claims(
//!     "The experiment demonstrates that the new algorithm reduces processing time by 40%.",
//! )?;
//!
//! assert_eq!(claims.len(), 1);
//! assert_eq!(claims[0].entity(EntityCategory::Percent), Some("40%"));
//! assert_eq!(claims[0].strength, Strength::Assertive);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod entities;
mod error;
mod extractor;
mod patterns;
mod strength;
mod types;


pub use config::{
    ExtractorConfig, DEFAULT_MODELS_DIR, SENTENCE_MODEL_FILE, TOKENIZER_MODEL_FILE,
};
pub use entities::EntityTagger;
pub use error::ExtractorError;
pub use extractor::ClaimExtractor;
pub use patterns::{ClaimPattern, ClaimPatternMatcher};
pub use strength::{StrengthClassifier, HEDGE_WORDS};
pub use types::{ExtractionMetadata, ExtractionResult};
