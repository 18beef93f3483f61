//! Result types for extraction

use sciclaim_domain::Claim;

/// Result of an extraction operation
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Claims in sentence order
    pub claims: Vec<Claim>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMetadata {
    /// Number of sentences produced by the segmenter
    pub sentences_scanned: usize,

    /// Number of sentences that passed the claim gate
    pub claims_found: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ExtractionMetadata {
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "Scanned {} sentences, found {} claims in {}ms",
            self.sentences_scanned, self.claims_found, self.processing_time_ms
        )
    }
}
