//! # Edit Session
//!
//! One editor's view of a document: the document itself, the block under
//! the caret, snapshot history and a version counter that bumps on every
//! change.

use crate::classifier::FormatClassifier;
use crate::history::HistoryManager;
use crate::{EditorError, Mutation, MutationResult};
use screenplay_document::{Document, FormatKey};
use tracing::{debug, info};

pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Document being edited
    document: Document,

    /// Block the caret sits in
    active_block: usize,

    history: HistoryManager,

    /// Increments on every applied change
    version: u64,
}

impl EditSession {
    /// Create a session over `document` and seed history with it
    pub fn new(id: impl Into<String>, document: Document, undo_ceiling: usize) -> Self {
        let mut history = HistoryManager::with_ceiling(undo_ceiling);
        history.seed(&document);

        Self {
            id: id.into(),
            document,
            active_block: 0,
            history,
            version: 0,
        }
    }

    /// Create a session from serialized content
    pub fn load(
        id: impl Into<String>,
        serialized: Option<&str>,
        undo_ceiling: usize,
    ) -> Result<Self, EditorError> {
        let document = Document::load(serialized)?;
        Ok(Self::new(id, document, undo_ceiling))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_block(&self) -> usize {
        self.active_block
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Move the caret
    pub fn set_active_block(&mut self, index: usize) -> Result<(), EditorError> {
        self.document.check_index(index)?;
        self.active_block = index;
        Ok(())
    }

    /// Apply a mutation. The caret follows the edit.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let active_block = mutation.apply(&mut self.document)?;
        self.active_block = active_block;
        self.version += 1;

        debug!(session = %self.id, version = self.version, ?mutation, "Applied mutation");

        Ok(MutationResult {
            version: self.version,
            active_block,
        })
    }

    /// Retag the active block
    pub fn apply_format(&mut self, format_key: &str) -> Result<FormatKey, EditorError> {
        let format = FormatClassifier::set_format(&mut self.document, self.active_block, format_key)?;
        self.version += 1;
        Ok(format)
    }

    /// Snapshot the document if it changed since the last snapshot
    pub fn commit(&mut self) -> Result<bool, EditorError> {
        Ok(self.history.commit(&self.document)?)
    }

    /// Undo, first committing any edit made since the last snapshot
    pub fn undo(&mut self) -> Result<&Document, EditorError> {
        self.history.commit(&self.document)?;
        let restored = self.history.undo()?;
        self.replace_document(restored);
        Ok(&self.document)
    }

    /// Redo, first committing any edit made since the last snapshot.
    ///
    /// A pending edit counts as a new action and clears the redo stack.
    pub fn redo(&mut self) -> Result<&Document, EditorError> {
        self.history.commit(&self.document)?;
        let restored = self.history.redo()?;
        self.replace_document(restored);
        Ok(&self.document)
    }

    /// Replace the document with loaded content and restart history from it
    pub fn load_content(&mut self, serialized: Option<&str>) -> Result<(), EditorError> {
        let document = Document::load(serialized)?;
        self.history.seed(&document);
        self.replace_document(document);
        self.active_block = 0;

        info!(session = %self.id, blocks = self.document.len(), "Loaded content");
        Ok(())
    }

    fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.active_block = self.active_block.min(self.document.len() - 1);
        self.version += 1;
    }
}
