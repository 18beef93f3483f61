//! Lexical claim patterns
//!
//! Each pattern must match the whole sentence, case-insensitively. The key
//! phrase is wrapped in `.*` on both sides, so in effect a sentence is a claim
//! when it contains one of the key phrases anywhere.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Ordered claim patterns, first match wins
static CLAIM_PATTERNS: LazyLock<Vec<ClaimPattern>> = LazyLock::new(|| {
    let patterns: Vec<(&'static str, &str)> = vec![
        // "The study shows that..."
        ("evidentiary_verb", r".*(?:shows|indicates|demonstrates|reveals|finds\s+that).*"),
        // "Results indicate..."
        ("results_statement", r".*(?:results\s+(?:suggest|indicate)).*"),
        // "We propose that..."
        ("author_proposal", r".*(?:we\s+(?:propose|hypothesize|claim)).*"),
        // "Evidence supports..."
        ("evidence_stance", r".*(?:evidence\s+(?:supports|contradicts)).*"),
    ];

    patterns
        .into_iter()
        .filter_map(|(name, body)| ClaimPattern::new(name, body))
        .collect()
});

/// A named, whole-sentence claim pattern
#[derive(Debug, Clone)]
pub struct ClaimPattern {
    name: &'static str,
    regex: Regex,
}

impl ClaimPattern {
    /// Compile `body` anchored at both ends, case-insensitive, `.` spanning newlines
    pub(crate) fn new(name: &'static str, body: &str) -> Option<Self> {
        RegexBuilder::new(&format!("^(?:{})$", body))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .ok()
            .map(|regex| Self { name, regex })
    }

    /// Short identifier used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the pattern matches the entire sentence
    pub fn matches(&self, sentence: &str) -> bool {
        self.regex.is_match(sentence)
    }
}

/// Gate deciding whether a sentence is a candidate claim
#[derive(Debug, Clone, Copy)]
pub struct ClaimPatternMatcher {
    patterns: &'static [ClaimPattern],
}

impl ClaimPatternMatcher {
    /// Create a matcher over the built-in pattern set
    pub fn new() -> Self {
        Self {
            patterns: CLAIM_PATTERNS.as_slice(),
        }
    }

    /// Name of the first pattern matching `sentence`, if any
    pub fn first_match(&self, sentence: &str) -> Option<&'static str> {
        self.patterns
            .iter()
            .find(|pattern| pattern.matches(sentence))
            .map(ClaimPattern::name)
    }

    /// Whether `sentence` is a claim
    pub fn is_claim(&self, sentence: &str) -> bool {
        self.first_match(sentence).is_some()
    }

    /// The patterns in evaluation order
    pub fn patterns(&self) -> &'static [ClaimPattern] {
        self.patterns
    }
}

impl Default for ClaimPatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
