//! Error types for the editor

use crate::history::HistoryError;
use crate::mutations::MutationError;
use screenplay_document::DocumentError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),
}
