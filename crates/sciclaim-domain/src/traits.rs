//! Trait definitions for the pretrained-model collaborators
//!
//! These traits define the boundary between the extraction pipeline and the
//! statistical models it relies on. Model backends live in other crates.

/// Trait for splitting raw text into sentences
///
/// Implemented by the model layer (sciclaim-models)
pub trait SentenceSegmenter {
    /// Error type for segmentation
    type Error;

    /// Split `text` into an ordered sequence of sentences
    ///
    /// Empty input yields an empty sequence.
    fn segment(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}

/// Trait for splitting a sentence into word-level tokens
///
/// Implemented by the model layer (sciclaim-models)
pub trait Tokenizer {
    /// Error type for tokenization
    type Error;

    /// Split `sentence` into an ordered sequence of tokens
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, Self::Error>;
}

impl<T: SentenceSegmenter + ?Sized> SentenceSegmenter for &T {
    type Error = T::Error;

    fn segment(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        (**self).segment(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    type Error = T::Error;

    fn tokenize(&self, sentence: &str) -> Result<Vec<String>, Self::Error> {
        (**self).tokenize(sentence)
    }
}
