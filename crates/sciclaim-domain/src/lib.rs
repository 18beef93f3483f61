//! Sciclaim Domain Layer
//!
//! This crate contains the domain model for sciclaim. It has ZERO external
//! dependencies and defines the value types produced by extraction and the
//! trait interfaces for the pretrained-model collaborators.
//!
//! ## Key Concepts
//!
//! - **Claim**: A sentence flagged as expressing an assertion, finding, or hypothesis
//! - **Strength**: `assertive` or `tentative`, derived from hedging language
//! - **Entity tag**: A coarse category (`PERCENT`, `ORG`) attached to a token by shape
//! - **Segmenter / Tokenizer**: Externally supplied models that split text
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure value types only
//! - Model backends live in `sciclaim-models`, the pipeline in `sciclaim-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod entity;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, Strength, PLACEHOLDER_CONFIDENCE};
pub use entity::{EntityCategory, EntityMap};
pub use traits::{SentenceSegmenter, Tokenizer};
