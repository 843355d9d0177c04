//! # Screenplay Workspace
//!
//! Orchestration around one [`EditSession`](screenplay_editor::EditSession):
//! a single task owns the session, receives [`EditorCommand`]s over a
//! channel, debounces history snapshots and analytics, autosaves on a timer
//! and broadcasts [`EditorEvent`]s to every subscriber.

pub mod characters;
pub mod collaboration;
pub mod config;
pub mod debounce;
pub mod error;
pub mod events;
pub mod project;
pub mod server;

pub use characters::{CharacterProfile, CharacterRoster};
pub use collaboration::{Action, Collaborators, Comment, CommentBoard, Role};
pub use config::EditorConfig;
pub use debounce::Debouncer;
pub use error::{WorkspaceError, WorkspaceResult};
pub use events::{CommandEnvelope, EditorCommand, EditorEvent, Notice, NoticeLevel, PersistPayload};
pub use project::{
    FileStore, MemoryStore, Project, ProjectManager, ProjectMetadata, ProjectStore, StoreError,
};
pub use server::{SessionHandle, WorkspaceServer};
