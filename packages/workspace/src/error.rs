use crate::collaboration::CollaborationError;
use crate::project::StoreError;
use screenplay_editor::EditorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Collaboration error: {0}")]
    Collaboration(#[from] CollaborationError),

    #[error("Session has shut down")]
    SessionClosed,
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
