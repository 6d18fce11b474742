pub mod import;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::fingerprint::{FingerprintError, Fingerprinter};
use crate::scoring::TfIdfCalculator;
use crate::store::{NewDocument, StoreConnection, StoreError, StoredDocument};
use crate::transliterate::{self, TransliterationError, Transliterator};
use crate::types::identifiers::{DocumentId, Fingerprint};
use crate::types::scoring::{ScoreDetails, ScoringError};
pub use import::ImportError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
    #[error("Fingerprint error: {0}")]
    Fingerprint(#[from] FingerprintError),
    #[error("Transliteration error: {0}")]
    Transliteration(#[from] TransliterationError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Import error: {0}")]
    Import(#[from] ImportError),
}

/// Editor business layer: import, integrity tracking, transliteration and scoring.
///
/// All collaborators are injected; nothing here reaches for global state.
pub struct Editor {
    connection: StoreConnection,
    fingerprinter: Box<dyn Fingerprinter>,
    transliterator: Box<dyn Transliterator>,
    calculator: TfIdfCalculator,
}

impl Editor {
    pub fn new(
        config: &EditorConfig,
        connection: StoreConnection,
        transliterator: Box<dyn Transliterator>,
    ) -> Self {
        Self::with_fingerprinter(
            config,
            connection,
            config.fingerprint.fingerprinter(),
            transliterator,
        )
    }

    pub fn with_fingerprinter(
        config: &EditorConfig,
        connection: StoreConnection,
        fingerprinter: Box<dyn Fingerprinter>,
        transliterator: Box<dyn Transliterator>,
    ) -> Self {
        Self {
            connection,
            fingerprinter,
            transliterator,
            calculator: TfIdfCalculator::new(&config.tokenizer),
        }
    }

    pub fn connection(&self) -> &StoreConnection {
        &self.connection
    }

    pub fn calculator(&self) -> &TfIdfCalculator {
        &self.calculator
    }

    /// Import a text file. Returns `false` instead of failing; see
    /// [`Editor::try_import_file`] for the reason.
    pub fn import_file(&self, handle: Option<&Path>, name: &str) -> bool {
        match self.try_import_file(handle, name) {
            Ok(_) => true,
            Err(err) => {
                warn!(file = name, error = %err, "import rejected");
                false
            }
        }
    }

    pub fn try_import_file(&self, handle: Option<&Path>, name: &str) -> Result<DocumentId, ImportError> {
        let content = import::read_text(handle, name)?;
        self.import_text(name, &content)
    }

    /// Store `content` under `name` and add it to the corpus.
    pub fn import_text(&self, name: &str, content: &str) -> Result<DocumentId, ImportError> {
        if name.is_empty() {
            return Err(ImportError::EmptyName);
        }

        let fingerprint = self.fingerprinter.fingerprint(Some(content))?;
        let id = self.connection.store().insert(NewDocument {
            name: name.to_string(),
            content: content.to_string(),
            fingerprint: fingerprint.clone(),
        })?;
        self.calculator.add_document(content)?;

        info!(%id, file = name, %fingerprint, "document imported");
        Ok(id)
    }

    pub fn document(&self, id: DocumentId) -> Result<StoredDocument, EditorError> {
        self.connection
            .store()
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id).into())
    }

    /// Replace a document's content and refresh its current fingerprint.
    pub fn update_content(&self, id: DocumentId, content: Option<&str>) -> Result<StoredDocument, EditorError> {
        let fingerprint = self.fingerprinter.fingerprint(content)?;
        let content = content.unwrap_or_default().to_string();
        let updated = self
            .connection
            .store()
            .update_content(id, content, fingerprint)?;

        if updated.is_modified() {
            debug!(%id, original = %updated.original_fingerprint, current = %updated.current_fingerprint, "content differs from import");
        }
        Ok(updated)
    }

    pub fn is_modified(&self, id: DocumentId) -> Result<bool, EditorError> {
        Ok(self.document(id)?.is_modified())
    }

    pub fn fingerprint(&self, text: Option<&str>) -> Result<Fingerprint, EditorError> {
        Ok(self.fingerprinter.fingerprint(text)?)
    }

    pub fn transliterate(&self, id: DocumentId, text: Option<&str>) -> Result<Option<String>, EditorError> {
        Ok(transliterate::transliterate(self.transliterator.as_ref(), id, text)?)
    }

    pub fn score<'a>(&self, document: impl Into<Option<&'a str>>) -> Result<f64, EditorError> {
        Ok(self.calculator.score(document)?)
    }

    pub fn explain<'a>(&self, document: impl Into<Option<&'a str>>) -> Result<ScoreDetails, EditorError> {
        Ok(self.calculator.explain(document)?)
    }
}
