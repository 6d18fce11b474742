use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::types::identifiers::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransliterationError {
    #[error("Invalid argument: text to transliterate must be present")]
    InvalidArgument,
}

/// External transliteration capability, keyed by document.
pub trait Transliterator: Send + Sync {
    /// `None` means no transliteration is available for this document.
    fn transliterate(&self, id: DocumentId, text: &str) -> Option<String>;
}

/// Character table transliterator for a fixed set of documents.
///
/// Characters without a table entry pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct TableTransliterator {
    table: BTreeMap<char, String>,
    documents: BTreeSet<DocumentId>,
}

impl TableTransliterator {
    pub fn new(table: BTreeMap<char, String>) -> Self {
        Self {
            table,
            documents: BTreeSet::new(),
        }
    }

    /// Basic Arabic to Latin letters (short vowels are not written).
    pub fn arabic_basic() -> Self {
        const LETTERS: &[(char, &str)] = &[
            ('\u{0627}', "a"),  // alef
            ('\u{0623}', "a"),  // alef with hamza above
            ('\u{0625}', "i"),  // alef with hamza below
            ('\u{0622}', "aa"), // alef with madda
            ('\u{0628}', "b"),
            ('\u{062A}', "t"),
            ('\u{062B}', "th"),
            ('\u{062C}', "j"),
            ('\u{062D}', "h"),
            ('\u{062E}', "kh"),
            ('\u{062F}', "d"),
            ('\u{0630}', "dh"),
            ('\u{0631}', "r"),
            ('\u{0632}', "z"),
            ('\u{0633}', "s"),
            ('\u{0634}', "sh"),
            ('\u{0635}', "s"),
            ('\u{0636}', "d"),
            ('\u{0637}', "t"),
            ('\u{0638}', "z"),
            ('\u{0639}', "'"),
            ('\u{063A}', "gh"),
            ('\u{0641}', "f"),
            ('\u{0642}', "q"),
            ('\u{0643}', "k"),
            ('\u{0644}', "l"),
            ('\u{0645}', "m"),
            ('\u{0646}', "n"),
            ('\u{0647}', "h"),
            ('\u{0648}', "w"),
            ('\u{064A}', "y"),
            ('\u{0649}', "a"),  // alef maksura
            ('\u{0629}', "a"),  // teh marbuta
            ('\u{0621}', "'"),  // hamza
            ('\u{060C}', ","),
            ('\u{061F}', "?"),
        ];

        Self::new(LETTERS.iter().map(|(c, s)| (*c, s.to_string())).collect())
    }

    /// Make transliteration available for `id`.
    pub fn with_document(mut self, id: DocumentId) -> Self {
        self.documents.insert(id);
        self
    }

    pub fn add_document(&mut self, id: DocumentId) {
        self.documents.insert(id);
    }
}

impl Transliterator for TableTransliterator {
    fn transliterate(&self, id: DocumentId, text: &str) -> Option<String> {
        if !self.documents.contains(&id) {
            return None;
        }

        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.table.get(&c) {
                Some(mapped) => out.push_str(mapped),
                None => out.push(c),
            }
        }
        Some(out)
    }
}

/// Validate the text, then delegate to the provider exactly once.
pub fn transliterate(
    provider: &dyn Transliterator,
    id: DocumentId,
    text: Option<&str>,
) -> Result<Option<String>, TransliterationError> {
    let text = text.ok_or(TransliterationError::InvalidArgument)?;
    Ok(provider.transliterate(id, text))
}
