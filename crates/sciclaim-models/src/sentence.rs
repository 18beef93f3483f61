//! Sentence boundary model
//!
//! A Punkt-style rule model: sentence breaks happen after runs of terminator
//! characters, unless the word before a period is a known abbreviation or an
//! initial, or the next word starts in lower case. A capitalized word from the
//! frequent sentence starters restores the break after an abbreviation.

use crate::artifact::{load_json, parse_json, reader_path};
use crate::ModelError;
use sciclaim_domain::SentenceSegmenter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Pretrained sentence boundary model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceModel {
    /// Language code the model was built for
    language: String,

    /// Abbreviations, lower case and without the trailing period
    #[serde(default)]
    abbreviations: HashSet<String>,

    /// Words that usually open a sentence, lower case
    #[serde(default)]
    sentence_starters: HashSet<String>,

    /// Characters that may end a sentence
    #[serde(default = "default_terminators")]
    terminators: Vec<char>,

    /// Characters absorbed into a sentence after its terminator
    #[serde(default = "default_closing_punctuation")]
    closing_punctuation: Vec<char>,

    /// Suppress a break when the next word starts in lower case
    #[serde(default = "default_true")]
    orthographic_heuristic: bool,

    /// Always break on a blank line
    #[serde(default = "default_true")]
    paragraph_breaks: bool,
}

impl SentenceModel {
    /// Load a model artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let model: Self = load_json(path)?;
        let model = model.normalized(path)?;
        debug!(
            "Loaded sentence model from '{}' (language '{}', {} abbreviations)",
            path.display(),
            model.language,
            model.abbreviations.len()
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

    /// Whether `word` (without its period) is a known abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    fn normalized(mut self, path: &Path) -> Result<Self, ModelError> {
        if self.language.trim().is_empty() {
            return Err(ModelError::Malformed {
                path: path.to_path_buf(),
                reason: "language must not be empty".to_string(),
            });
        }
        if self.terminators.is_empty() {
            return Err(ModelError::Malformed {
                path: path.to_path_buf(),
                reason: "terminators must not be empty".to_string(),
            });
        }
        self.abbreviations = self
            .abbreviations
            .into_iter()
            .map(|a| a.trim().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        self.sentence_starters = self
            .sentence_starters
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(self)
    }

    /// Whether `word` is capitalized and a known sentence starter
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        word.chars().next().is_some_and(char::is_uppercase)
            && self.sentence_starters.contains(&word.to_lowercase())
    }

    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if c == '\n' && self.paragraph_breaks && blank_line_follows(&chars, i + 1) {
                push_sentence(&mut sentences, &text[start..pos]);
                start = pos;
                i += 1;
                continue;
            }

            if !self.terminators.contains(&c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && self.terminators.contains(&chars[j].1) {
                j += 1;
            }
            let single_period = j == i + 1 && c == '.';
            while j < chars.len() && self.closing_punctuation.contains(&chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            let at_end = j == chars.len();
            let followed_by_space = at_end || chars[j].1.is_whitespace();

            if followed_by_space
                && (at_end || !self.suppresses_break(&text[start..pos], &text[end..], single_period))
            {
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
            i = j;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    /// Decide whether a candidate break after `before` should be skipped
    fn suppresses_break(&self, before: &str, after: &str, single_period: bool) -> bool {
        if single_period {
            let word = before
                .rsplit(char::is_whitespace)
                .next()
                .unwrap_or("")
                .trim_start_matches(|c: char| !c.is_alphanumeric());

            let mut letters = word.chars();
            let initial = matches!(
                (letters.next(), letters.next()),
                (Some(first), None) if first.is_uppercase()
            );

            if self.is_abbreviation(word) || initial {
                return !self.is_sentence_starter(next_word(after));
            }
        }

        if self.orthographic_heuristic {
            let next = after
                .chars()
                .find(|c| !c.is_whitespace() && !is_opening_punctuation(*c));
            if next.is_some_and(char::is_lowercase) {
                return true;
            }
        }

        false
    }
}

impl SentenceSegmenter for SentenceModel {
    type Error = ModelError;

    fn segment(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(self.split(text))
    }
}

fn push_sentence(sentences: &mut Vec<String>, span: &str) {
    let sentence = span.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

fn blank_line_follows(chars: &[(usize, char)], from: usize) -> bool {
    chars[from..]
        .iter()
        .map(|&(_, c)| c)
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\n')
}

/// First word of `text` with surrounding punctuation removed
fn next_word(text: &str) -> &str {
    text.split_whitespace()
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !c.is_alphanumeric())
}

fn is_opening_punctuation(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '\u{201c}' | '\u{2018}')
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!', '?']
}

fn default_closing_punctuation() -> Vec<char> {
    vec!['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}']
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> SentenceModel {
        SentenceModel::from_json(
            r#"{
                "language": "en",
                "abbreviations": ["e.g.", "i.e", "al", "Fig", "dr", "vs"],
                "sentence_starters": ["We", "results", "the"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        let model = english();
        assert!(model.segment("").unwrap().is_empty());
        assert!(model.segment("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_multi_line_sample() {
        let model = english();
        let text = "
    The experiment demonstrates that the new algorithm reduces processing time by 40%.
    Results suggest that further validation is needed in larger datasets.
    We propose a model where quantum effects may influence the outcome.
    ";
        let sentences = model.segment(text).unwrap();
        assert_eq!(sentences.len(), 3);
        assert_eq!(
            sentences[0],
            "The experiment demonstrates that the new algorithm reduces processing time by 40%."
        );
        assert_eq!(
            sentences[2],
            "We propose a model where quantum effects may influence the outcome."
        );
    }

    #[test]
    fn test_abbreviation_does_not_break() {
        let model = english();
        let sentences = model
            .segment("Dr. Smith reports a gain. Fig. 3 shows the trend.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["Dr. Smith reports a gain.", "Fig. 3 shows the trend."]
        );
    }

    #[test]
    fn test_lowercase_continuation_does_not_break() {
        let model = english();
        let sentences = model
            .segment("Several inputs, e.g. noisy ones, were dropped. Then we stopped.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Several inputs, e.g. noisy ones, were dropped.");
    }

    #[test]
    fn test_initials_do_not_break() {
        let model = english();
        let sentences = model.segment("Work by J. Doe shows this. It holds.").unwrap();
        assert_eq!(sentences, vec!["Work by J. Doe shows this.", "It holds."]);
    }

    #[test]
    fn test_sentence_starter_restores_break() {
        let model = english();
        let sentences = model
            .segment("Growth with vitamin C. Results suggest a 5% gain.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["Growth with vitamin C.", "Results suggest a 5% gain."]
        );

        let sentences = model
            .segment("As shown by Smith et al. \"We propose a new model.\"")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["As shown by Smith et al.", "\"We propose a new model.\""]
        );
    }

    #[test]
    fn test_starters_need_capital_letter() {
        let model = english();
        assert!(model.is_sentence_starter("The"));
        assert!(!model.is_sentence_starter("the"));
        assert!(!model.is_sentence_starter("Smith"));

        // Names after a title or an initial stay attached
        let sentences = model.segment("Dr. Smith and J. Doe agree. The end.").unwrap();
        assert_eq!(sentences, vec!["Dr. Smith and J. Doe agree.", "The end."]);
    }

    #[test]
    fn test_decimal_numbers_do_not_break() {
        let model = english();
        let sentences = model.segment("The ratio was 3.5 overall. Next one.").unwrap();
        assert_eq!(sentences, vec!["The ratio was 3.5 overall.", "Next one."]);
    }

    #[test]
    fn test_terminator_runs_and_closing_quotes() {
        let model = english();
        let sentences = model
            .segment("Is it real?! \"We think so.\" Yes.")
            .unwrap();
        assert_eq!(sentences, vec!["Is it real?!", "\"We think so.\"", "Yes."]);
    }

    #[test]
    fn test_paragraph_break_ends_sentence() {
        let model = english();
        let sentences = model
            .segment("A heading without a period\n\nBody text here.")
            .unwrap();
        assert_eq!(sentences, vec!["A heading without a period", "Body text here."]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let model = english();
        let sentences = model.segment("First one. And a fragment").unwrap();
        assert_eq!(sentences, vec!["First one.", "And a fragment"]);
    }

    #[test]
    fn test_orthographic_heuristic_can_be_disabled() {
        let model = SentenceModel::from_json(
            r#"{"language": "en", "orthographic_heuristic": false}"#,
        )
        .unwrap();
        let sentences = model.segment("It ended. then it resumed.").unwrap();
        assert_eq!(sentences, vec!["It ended.", "then it resumed."]);
    }

    #[test]
    fn test_abbreviations_are_normalized() {
        let model = english();
        assert!(model.is_abbreviation("e.g"));
        assert!(model.is_abbreviation("FIG"));
        assert!(!model.is_abbreviation("results"));
        assert_eq!(model.language(), "en");
    }

    #[test]
    fn test_empty_terminators_rejected() {
        let result = SentenceModel::from_json(r#"{"language": "en", "terminators": []}"#);
        assert!(matches!(result, Err(ModelError::Malformed { .. })));
    }

    #[test]
    fn test_missing_language_rejected() {
        let result = SentenceModel::from_json(r#"{"abbreviations": []}"#);
        assert!(matches!(result, Err(ModelError::Malformed { .. })));
    }
}
