//! # Screenplay Editor
//!
//! Editing state for one screenplay document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: blocks, formats, serialized forms │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Apply mutations with validation          │
//! │  - Tag the active block (classifier)        │
//! │  - Snapshot history for undo/redo           │
//! │  - Run analytics and validation (pipeline)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ workspace: debounce, events, persistence    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: analytics and reports are
//!    derived views, recomputed wholesale
//! 2. **Explicit active block**: callers say which block an edit targets
//! 3. **Whole-document snapshots**: undo/redo replaces the document atomically
//! 4. **Validate then apply**: a failed edit leaves the document untouched
//!
//! ## Usage
//!
//! ```rust,ignore
//! use screenplay_editor::{EditSession, Mutation};
//!
//! let mut session = EditSession::load("local", Some(&saved), 50)?;
//!
//! session.set_active_block(0)?;
//! session.apply_format("heading-1")?;
//! session.apply(Mutation::UpdateText {
//!     index: 0,
//!     text: "INT. HOUSE - DAY".to_string(),
//! })?;
//! session.commit()?;
//!
//! session.undo()?;
//! ```

mod classifier;
mod errors;
mod history;
mod mutations;
mod pipeline;
mod session;

pub use classifier::FormatClassifier;
pub use errors::EditorError;
pub use history::{HistoryError, HistoryManager, Snapshot, DEFAULT_CEILING};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use pipeline::{Pipeline, PipelineResult};
pub use session::EditSession;

// Re-export common types for convenience
pub use screenplay_analytics::AnalyticsSnapshot;
pub use screenplay_document::{Block, Document, FormatKey};
pub use screenplay_linter::ValidationReport;
