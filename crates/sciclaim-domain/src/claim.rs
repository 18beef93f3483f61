//! Claim module - the unit of extraction output

use crate::entity::{EntityCategory, EntityMap};
use std::fmt;

/// Confidence attached to every extracted claim
///
/// A fixed placeholder until a real scoring model exists.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.8;

/// Qualitative strength of a claim, derived from hedging language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// No hedge word present
    Assertive,

    /// At least one hedge word ("may", "might", ...) present
    Tentative,
}

impl Strength {
    /// Get the strength label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Assertive => "assertive",
            Strength::Tentative => "tentative",
        }
    }

    /// Parse a strength label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "assertive" => Some(Strength::Assertive),
            "tentative" => Some(Strength::Tentative),
            _ => None,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid strength: {}", s))
    }
}

/// A candidate claim extracted from a single sentence
///
/// Claims carry no identity beyond their position in the output sequence and
/// are never mutated after the extractor builds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// The original sentence, trimmed
    pub text: String,

    /// Last-seen token per entity category
    pub entities: EntityMap,

    /// Assertive or tentative
    pub strength: Strength,

    /// Placeholder confidence score
    pub confidence: f64,
}

impl Claim {
    /// Create a new claim with the placeholder confidence
    pub fn new(text: impl Into<String>, entities: EntityMap, strength: Strength) -> Self {
        Self {
            text: text.into(),
            entities,
            strength,
            confidence: PLACEHOLDER_CONFIDENCE,
        }
    }

    /// Look up the token tagged with the given category
    pub fn entity(&self, category: EntityCategory) -> Option<&str> {
        self.entities.get(&category).map(String::as_str)
    }

    /// Whether hedging language was found in the sentence
    pub fn is_tentative(&self) -> bool {
        self.strength == Strength::Tentative
    }
}
