//! Shape-based entity tagging over tokens

use regex::Regex;
use sciclaim_domain::{EntityCategory, EntityMap};
use std::sync::LazyLock;

/// Token shapes per category, checked in order for each token
static ENTITY_SHAPES: LazyLock<Vec<(EntityCategory, Regex)>> = LazyLock::new(|| {
    let shapes = [
        (EntityCategory::Percent, r"^[0-9]+%$"),
        // Two capitalized words; tokenized input has no internal whitespace,
        // so this only fires for tokenizers that keep multi-word tokens.
        (EntityCategory::Org, r"^[A-Z][a-z]+\s+[A-Z][a-z]+$"),
    ];

    shapes
        .into_iter()
        .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (category, re)))
        .collect()
});

/// Tags tokens with coarse entity categories
#[derive(Debug, Clone, Copy)]
pub struct EntityTagger {
    shapes: &'static [(EntityCategory, Regex)],
}

impl EntityTagger {
    /// Create a tagger over the built-in shapes
    pub fn new() -> Self {
        Self {
            shapes: ENTITY_SHAPES.as_slice(),
        }
    }

    /// Category of a single token, if it has a known shape
    pub fn categorize(&self, token: &str) -> Option<EntityCategory> {
        self.shapes
            .iter()
            .find(|(_, shape)| shape.is_match(token))
            .map(|(category, _)| *category)
    }

    /// Map each category to the last token with its shape
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S]) -> EntityMap {
        let mut entities = EntityMap::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(category) = self.categorize(token) {
                entities.insert(category, token.to_string());
            }
        }
        entities
    }
}

impl Default for EntityTagger {
    fn default() -> Self {
        Self::new()
    }
}
