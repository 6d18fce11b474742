use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::Term;
use crate::types::scoring::ScoringError;

/// Punctuation that separates terms outside the ASCII range.
const EXTRA_PUNCTUATION: &[char] = &['\u{060C}', '\u{061B}', '\u{061F}'];

/// Normalization policy.
///
/// Defaults: no case folding; split on whitespace, ASCII punctuation and the
/// Arabic comma, semicolon and question mark. No stemming, no script-specific
/// handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub case_fold: bool,
    pub punctuation: Vec<char>,
}

impl TokenizerConfig {
    pub fn v0() -> Self {
        let punctuation = (0u8..=127)
            .map(char::from)
            .filter(char::is_ascii_punctuation)
            .chain(EXTRA_PUNCTUATION.iter().copied())
            .collect();

        Self {
            case_fold: false,
            punctuation,
        }
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    case_fold: bool,
    punctuation: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::v0())
    }
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        let mut punctuation = config.punctuation.clone();
        punctuation.sort_unstable();
        punctuation.dedup();

        Self {
            case_fold: config.case_fold,
            punctuation,
        }
    }

    /// Split `text` into terms, left to right.
    ///
    /// Absent input is an error; empty input yields no terms.
    pub fn tokenize<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<Vec<Term>, ScoringError> {
        let text = text
            .into()
            .ok_or(ScoringError::InvalidArgument("text"))?;
        Ok(self.split(text))
    }

    /// Tokenize and count occurrences per distinct term.
    pub fn term_counts<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<TermCounts, ScoringError> {
        let terms = self.tokenize(text)?;
        Ok(TermCounts::from_terms(terms))
    }

    fn split(&self, text: &str) -> Vec<Term> {
        text.split(|c: char| c.is_whitespace() || self.is_punctuation(c))
            .filter(|s| !s.is_empty())
            .map(|s| {
                if self.case_fold {
                    Term::new(s.to_lowercase())
                } else {
                    Term::from(s)
                }
            })
            .collect()
    }

    #[inline]
    fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.binary_search(&c).is_ok()
    }
}

/// Term multiset of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    counts: BTreeMap<Term, usize>,
    total: usize,
}

impl TermCounts {
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for term in terms {
            *counts.entry(term).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Total term occurrences (document length).
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, term: &Term) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms with their counts, ascending by term.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, usize)> {
        self.counts.iter().map(|(t, c)| (t, *c))
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.counts.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(terms: &[Term]) -> Vec<&str> {
        terms.iter().map(Term::as_str).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("Hello, World!").unwrap();
        assert_eq!(words(&terms), vec!["Hello", "World"]);
    }

    #[test]
    fn test_tokenize_absent_input() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize(None::<&str>),
            Err(ScoringError::InvalidArgument("text"))
        );
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::default();
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("   \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("!@#$%^&*()_+-=[]{}|;':\",./<>?").unwrap();
        assert!(terms.is_empty());
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("the cat sat on the mat").unwrap();
        assert_eq!(words(&terms), vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_case_preserved_by_default() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("This is a Test").unwrap();
        assert_eq!(words(&terms), vec!["This", "is", "a", "Test"]);
    }

    #[test]
    fn test_case_fold_enabled() {
        let config = TokenizerConfig {
            case_fold: true,
            ..TokenizerConfig::v0()
        };
        let tokenizer = Tokenizer::new(&config);
        let terms = tokenizer.tokenize("This is a Test").unwrap();
        assert_eq!(words(&terms), vec!["this", "is", "a", "test"]);
    }

    #[test]
    fn test_arabic_is_opaque() {
        let tokenizer = Tokenizer::default();
        let terms = tokenizer.tokenize("مرحبا بك، في المحرر؟").unwrap();
        assert_eq!(words(&terms), vec!["مرحبا", "بك", "في", "المحرر"]);
    }

    #[test]
    fn test_custom_punctuation() {
        let config = TokenizerConfig {
            case_fold: false,
            punctuation: vec!['-'],
        };
        let tokenizer = Tokenizer::new(&config);
        let terms = tokenizer.tokenize("state-of-the-art, done").unwrap();
        assert_eq!(words(&terms), vec!["state", "of", "the", "art,", "done"]);
    }

    #[test]
    fn test_term_counts() {
        let tokenizer = Tokenizer::default();
        let counts = tokenizer.term_counts("same text same text same").unwrap();
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.distinct(), 2);
        assert_eq!(counts.count(&Term::from("same")), 3);
        assert_eq!(counts.count(&Term::from("text")), 2);
        assert_eq!(counts.count(&Term::from("other")), 0);

        let order: Vec<&str> = counts.terms().map(Term::as_str).collect();
        assert_eq!(order, vec!["same", "text"]);
    }
}
