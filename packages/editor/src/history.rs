//! # Undo/Redo History
//!
//! Whole-document snapshots on two bounded stacks.
//!
//! ## Design
//!
//! - `last_known` holds the serialized form of the most recently committed
//!   (or restored) document
//! - A commit whose serialization matches `last_known` is a no-op
//! - Otherwise `last_known` moves onto the undo stack and the new document
//!   takes its place
//! - New commits clear the redo stack
//! - Undo and redo swap `last_known` with the top of the opposite stack
//! - The undo stack never exceeds the ceiling; the oldest entry is evicted
//!
//! Commits are not debounced here. The workspace server decides when to
//! commit.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = HistoryManager::new();
//!
//! history.commit(&doc)?;          // seeds, returns false
//! history.commit(&edited)?;       // returns true
//!
//! let restored = history.undo()?; // == doc
//! let again = history.redo()?;    // == edited
//! ```

use screenplay_document::{Document, DocumentError};
use std::collections::VecDeque;
use thiserror::Error;
use tracing::debug;

/// Default number of undo levels
pub const DEFAULT_CEILING: usize = 50;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("Stored snapshot could not be restored: {0}")]
    Snapshot(#[from] DocumentError),
}

/// Serialized copy of a full document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn capture(doc: &Document) -> Self {
        Self(doc.serialize())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn restore(&self) -> Result<Document, HistoryError> {
        Ok(Document::load(Some(&self.0))?)
    }
}

/// Snapshot-based undo/redo history for one document
#[derive(Debug)]
pub struct HistoryManager {
    /// Older snapshots, most recent at the back
    undo_stack: VecDeque<Snapshot>,

    /// Undone snapshots, most recent at the back
    redo_stack: Vec<Snapshot>,

    /// Snapshot of the document as last committed or restored
    last_known: Option<Snapshot>,

    /// Maximum number of undo levels (at least 1)
    ceiling: usize,
}

impl HistoryManager {
    /// Create a history with the default ceiling (50)
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_CEILING)
    }

    /// Create a history with a custom ceiling, clamped to at least one level
    pub fn with_ceiling(ceiling: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            last_known: None,
            ceiling: ceiling.max(1),
        }
    }

    /// Record the document's current state.
    ///
    /// Returns `true` when a new undo level was created. The first commit on
    /// an empty history only seeds the baseline.
    pub fn commit(&mut self, doc: &Document) -> Result<bool, HistoryError> {
        let snapshot = Snapshot::capture(doc);

        let Some(previous) = self.last_known.take() else {
            self.last_known = Some(snapshot);
            return Ok(false);
        };

        if previous == snapshot {
            self.last_known = Some(previous);
            return Ok(false);
        }

        self.push_undo(previous);
        self.last_known = Some(snapshot);

        // New action invalidates the future
        self.redo_stack.clear();

        debug!(
            undo_levels = self.undo_stack.len(),
            "Committed history snapshot"
        );

        Ok(true)
    }

    /// Step back one snapshot and return the restored document
    pub fn undo(&mut self) -> Result<Document, HistoryError> {
        let target = self.undo_stack.back().ok_or(HistoryError::NothingToUndo)?;
        let restored = target.restore()?;

        if let Some(target) = self.undo_stack.pop_back() {
            if let Some(current) = self.last_known.replace(target) {
                self.redo_stack.push(current);
            }
        }

        Ok(restored)
    }

    /// Step forward one snapshot and return the restored document
    pub fn redo(&mut self) -> Result<Document, HistoryError> {
        let target = self.redo_stack.last().ok_or(HistoryError::NothingToRedo)?;
        let restored = target.restore()?;

        if let Some(target) = self.redo_stack.pop() {
            if let Some(current) = self.last_known.replace(target) {
                self.push_undo(current);
            }
        }

        Ok(restored)
    }

    /// Forget everything, including the baseline
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.last_known = None;
    }

    /// Reset and take `doc` as the new baseline
    pub fn seed(&mut self, doc: &Document) {
        self.reset();
        self.last_known = Some(Snapshot::capture(doc));
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);

        // Trim if exceeded max levels
        while self.undo_stack.len() > self.ceiling {
            self.undo_stack.pop_front();
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    pub fn last_known(&self) -> Option<&Snapshot> {
        self.last_known.as_ref()
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_document::Block;

    fn text(body: &str) -> Document {
        Document::from_blocks(vec![Block::action(body)])
    }

    #[test]
    fn test_history_creation() {
        let history = HistoryManager::new();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.ceiling(), 50);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_first_commit_seeds() {
        let mut history = HistoryManager::new();
        assert!(!history.commit(&text("a")).unwrap());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.last_known(), Some(&Snapshot::capture(&text("a"))));
    }

    #[test]
    fn test_identical_commit_is_noop() {
        let mut history = HistoryManager::new();
        history.commit(&text("a")).unwrap();
        assert!(history.commit(&text("b")).unwrap());
        assert!(!history.commit(&text("b")).unwrap());
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_undo_and_redo() {
        let mut history = HistoryManager::new();
        history.commit(&text("a")).unwrap();
        history.commit(&text("b")).unwrap();

        assert_eq!(history.undo().unwrap(), text("a"));
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 1);

        assert_eq!(history.redo().unwrap(), text("b"));
        assert_eq!(history.undo_levels(), 1);
        assert_eq!(history.redo_levels(), 0);
    }

    #[test]
    fn test_empty_stacks_error() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo().unwrap_err(), HistoryError::NothingToUndo);
        assert_eq!(history.redo().unwrap_err(), HistoryError::NothingToRedo);

        history.commit(&text("a")).unwrap();
        assert_eq!(history.undo().unwrap_err(), HistoryError::NothingToUndo);
    }

    #[test]
    fn test_new_commit_clears_redo() {
        let mut history = HistoryManager::new();
        history.commit(&text("a")).unwrap();
        history.commit(&text("b")).unwrap();
        history.undo().unwrap();
        assert_eq!(history.redo_levels(), 1);

        history.commit(&text("c")).unwrap();
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.undo().unwrap(), text("a"));
    }

    #[test]
    fn test_ceiling_enforced() {
        let mut history = HistoryManager::with_ceiling(2);
        for i in 0..5 {
            history.commit(&text(&format!("Text {}", i))).unwrap();
        }

        // Should only keep 2 (max levels)
        assert_eq!(history.undo_levels(), 2);
        assert_eq!(history.undo().unwrap(), text("Text 3"));
        assert_eq!(history.undo().unwrap(), text("Text 2"));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_zero_ceiling_is_clamped() {
        let mut history = HistoryManager::with_ceiling(0);
        history.commit(&text("a")).unwrap();
        history.commit(&text("b")).unwrap();
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_seed_replaces_baseline() {
        let mut history = HistoryManager::new();
        history.commit(&text("a")).unwrap();
        history.commit(&text("b")).unwrap();

        history.seed(&text("loaded"));
        assert!(!history.can_undo());
        assert!(history.commit(&text("edited")).unwrap());
        assert_eq!(history.undo().unwrap(), text("loaded"));
    }
}
