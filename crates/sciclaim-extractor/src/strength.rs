//! Hedge-word strength classification

use sciclaim_domain::Strength;

/// Modal and hedging words, checked in this order
pub const HEDGE_WORDS: [&str; 5] = ["may", "might", "could", "suggest", "indicate"];

/// Labels a sentence tentative when it contains hedging language
#[derive(Debug, Clone, Copy)]
pub struct StrengthClassifier {
    hedge_words: &'static [&'static str],
}

impl StrengthClassifier {
    /// Create a classifier over the built-in hedge words
    pub fn new() -> Self {
        Self {
            hedge_words: &HEDGE_WORDS,
        }
    }

    /// First hedge word contained in `sentence`, ignoring case
    ///
    /// Matching is by substring, so "mayor" counts as "may".
    pub fn matched_hedge(&self, sentence: &str) -> Option<&'static str> {
        let lowered = sentence.to_lowercase();
        self.hedge_words
            .iter()
            .copied()
            .find(|word| lowered.contains(word))
    }

    /// Classify `sentence` as tentative or assertive
    pub fn classify(&self, sentence: &str) -> Strength {
        match self.matched_hedge(sentence) {
            Some(_) => Strength::Tentative,
            None => Strength::Assertive,
        }
    }
}

impl Default for StrengthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertive_without_hedges() {
        let classifier = StrengthClassifier::new();
        assert_eq!(
            classifier.classify("The experiment demonstrates that the new algorithm reduces processing time by 40%."),
            Strength::Assertive
        );
    }

    #[test]
    fn test_tentative_with_hedges() {
        let classifier = StrengthClassifier::new();
        assert_eq!(classifier.classify("Results suggest a link."), Strength::Tentative);
        assert_eq!(classifier.classify("Effects MAY differ."), Strength::Tentative);
        assert_eq!(classifier.classify("It could work."), Strength::Tentative);
    }

    #[test]
    fn test_first_hedge_in_list_order() {
        let classifier = StrengthClassifier::new();
        assert_eq!(
            classifier.matched_hedge("This could suggest that it may hold."),
            Some("may")
        );
    }

    #[test]
    fn test_substring_matching() {
        let classifier = StrengthClassifier::new();
        // "indicates" contains "indicate"
        assert_eq!(classifier.matched_hedge("The trial indicates benefit."), Some("indicate"));
        assert_eq!(classifier.matched_hedge("The mayor agreed."), Some("may"));
        assert_eq!(classifier.matched_hedge(""), None);
    }
}
