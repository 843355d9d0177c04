//! Event contract between the session server and its collaborators.
//!
//! Commands flow in, events flow out. Both serialize as
//! `{"type": "...", "payload": ...}` so they can cross a process boundary as
//! JSON lines.

use crate::characters::CharacterProfile;
use crate::collaboration::Comment;
use chrono::{DateTime, Utc};
use screenplay_analytics::AnalyticsSnapshot;
use screenplay_document::SearchHit;
use screenplay_editor::Mutation;
use screenplay_linter::ValidationReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum EditorCommand {
    /// Retag the active block (key, tag or class name)
    ApplyFormat { format: String },
    Undo,
    Redo,
    /// Replace the document; `None` loads an empty one
    LoadContent(Option<String>),
    AnalyzeRequest,
    SearchRequest {
        query: String,
        #[serde(default)]
        format_filter: Option<String>,
    },
    ValidateRequest,
    Edit(Mutation),
    SetActiveBlock { index: usize },
    AddComment { line_number: usize, text: String },
    ResolveComment { id: String },
    DeleteComment { id: String },
    /// Set the role and notes of a discovered character
    DescribeCharacter {
        name: String,
        role: String,
        #[serde(default)]
        description: String,
    },
    Persist,
    Shutdown,
}

impl EditorCommand {
    /// Commands that change the document or its character notes
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            EditorCommand::ApplyFormat { .. }
                | EditorCommand::Undo
                | EditorCommand::Redo
                | EditorCommand::LoadContent(_)
                | EditorCommand::Edit(_)
                | EditorCommand::DescribeCharacter { .. }
        )
    }
}

/// A command plus the user who sent it; no user means the local owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub command: EditorCommand,
}

impl From<EditorCommand> for CommandEnvelope {
    fn from(command: EditorCommand) -> Self {
        Self {
            user: None,
            command,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum EditorEvent {
    ContentChanged {
        version: u64,
        active_block: usize,
        content: String,
    },
    AnalyticsUpdated(AnalyticsSnapshot),
    ValidationResults(ValidationReport),
    SearchResults {
        query: String,
        hits: Vec<SearchHit>,
    },
    PersistRequested(PersistPayload),
    Notice(Notice),
    CommentsUpdated(Vec<Comment>),
    CharactersUpdated(Vec<CharacterProfile>),
}

/// Serialized document handed to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistPayload {
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}
