//! Local collaboration simulation: roles, permissions and review comments.
//!
//! Nothing here syncs between machines. The session server consults
//! [`Collaborators`] before applying an edit and keeps one [`CommentBoard`]
//! per document.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)").expect("mention pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Editor,
    Commenter,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Comment,
    Edit,
    DeleteOwnComment,
    DeleteAnyComment,
}

impl Role {
    pub fn permissions(self) -> &'static [Action] {
        match self {
            Role::Owner => &[Action::Comment, Action::Edit, Action::DeleteAnyComment],
            Role::Editor => &[Action::Comment, Action::Edit, Action::DeleteOwnComment],
            Role::Commenter => &[Action::Comment],
            Role::Viewer => &[],
        }
    }

    pub fn can(self, action: Action) -> bool {
        self.permissions().contains(&action)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaborationError {
    #[error("{user} is not allowed to {action:?}")]
    Forbidden { user: String, action: Action },

    #[error("Comment not found: {0}")]
    CommentNotFound(String),
}

/// Who may do what in a session.
///
/// Commands without a user id come from the local owner. Unknown users are
/// treated as viewers.
#[derive(Debug, Clone, Default)]
pub struct Collaborators {
    members: HashMap<String, Role>,
}

pub const LOCAL_USER: &str = "local";

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user: impl Into<String>, role: Role) {
        self.members.insert(user.into(), role);
    }

    pub fn remove(&mut self, user: &str) -> Option<Role> {
        self.members.remove(user)
    }

    pub fn role_of(&self, user: Option<&str>) -> Role {
        match user {
            None => Role::Owner,
            Some(user) => self.members.get(user).copied().unwrap_or(Role::Viewer),
        }
    }

    pub fn check(&self, user: Option<&str>, action: Action) -> Result<(), CollaborationError> {
        if self.role_of(user).can(action) {
            Ok(())
        } else {
            Err(CollaborationError::Forbidden {
                user: user.unwrap_or(LOCAL_USER).to_string(),
                action,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    /// HTML-escaped body
    pub text: String,
    /// 1-indexed block the comment is attached to
    pub line_number: usize,
    pub created_at: DateTime<Utc>,
    pub resolved: bool,
    pub mentions: Vec<String>,
}

/// Review comments for one document
#[derive(Debug, Clone, Default)]
pub struct CommentBoard {
    comments: Vec<Comment>,
    next_id: u64,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn add(
        &mut self,
        collaborators: &Collaborators,
        user: Option<&str>,
        line_number: usize,
        text: &str,
    ) -> Result<&Comment, CollaborationError> {
        collaborators.check(user, Action::Comment)?;

        self.next_id += 1;
        self.comments.push(Comment {
            id: format!("comment_{}", self.next_id),
            author: user.unwrap_or(LOCAL_USER).to_string(),
            text: escape_html(text),
            line_number,
            created_at: Utc::now(),
            resolved: false,
            mentions: extract_mentions(text),
        });

        let added = self.comments.len() - 1;
        Ok(&self.comments[added])
    }

    /// Flip the resolved flag, returning the new state
    pub fn toggle_resolved(&mut self, id: &str) -> Result<bool, CollaborationError> {
        let comment = self
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CollaborationError::CommentNotFound(id.to_string()))?;
        comment.resolved = !comment.resolved;
        Ok(comment.resolved)
    }

    pub fn delete(
        &mut self,
        collaborators: &Collaborators,
        user: Option<&str>,
        id: &str,
    ) -> Result<Comment, CollaborationError> {
        let position = self
            .comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CollaborationError::CommentNotFound(id.to_string()))?;

        let role = collaborators.role_of(user);
        let own = self.comments[position].author == user.unwrap_or(LOCAL_USER);
        let allowed =
            role.can(Action::DeleteAnyComment) || (own && role.can(Action::DeleteOwnComment));

        if !allowed {
            return Err(CollaborationError::Forbidden {
                user: user.unwrap_or(LOCAL_USER).to_string(),
                action: if own {
                    Action::DeleteOwnComment
                } else {
                    Action::DeleteAnyComment
                },
            });
        }

        Ok(self.comments.remove(position))
    }
}

/// Escape text for display inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// `@name` mentions in order of appearance, without duplicates
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut mentions: Vec<String> = Vec::new();
    for captures in MENTION.captures_iter(text) {
        let name = captures[1].to_string();
        if !mentions.contains(&name) {
            mentions.push(name);
        }
    }
    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Collaborators {
        let mut team = Collaborators::new();
        team.add("sara", Role::Editor);
        team.add("omar", Role::Commenter);
        team.add("lina", Role::Viewer);
        team
    }

    #[test]
    fn test_role_permissions() {
        assert!(Role::Owner.can(Action::DeleteAnyComment));
        assert!(!Role::Owner.can(Action::DeleteOwnComment));
        assert!(Role::Editor.can(Action::Edit));
        assert!(!Role::Commenter.can(Action::Edit));
        assert!(Role::Viewer.permissions().is_empty());
    }

    #[test]
    fn test_unknown_users_are_viewers() {
        let team = team();
        assert_eq!(team.role_of(None), Role::Owner);
        assert_eq!(team.role_of(Some("stranger")), Role::Viewer);
        assert!(team.check(Some("stranger"), Action::Comment).is_err());
    }

    #[test]
    fn test_comment_is_escaped_and_mentions_extracted() {
        let team = team();
        let mut board = CommentBoard::new();

        let comment = board
            .add(&team, Some("omar"), 3, "<b>Tighten</b> this, @sara and @lina @sara")
            .unwrap();

        assert_eq!(comment.id, "comment_1");
        assert_eq!(comment.text, "&lt;b&gt;Tighten&lt;/b&gt; this, @sara and @lina @sara");
        assert_eq!(comment.mentions, vec!["sara", "lina"]);
        assert_eq!(comment.line_number, 3);
    }

    #[test]
    fn test_viewer_cannot_comment() {
        let mut board = CommentBoard::new();
        let err = board.add(&team(), Some("lina"), 1, "Hi").unwrap_err();
        assert!(matches!(err, CollaborationError::Forbidden { .. }));
        assert!(board.comments().is_empty());
    }

    #[test]
    fn test_resolve_toggles() {
        let mut board = CommentBoard::new();
        let id = board.add(&team(), None, 1, "Note").unwrap().id.clone();

        assert!(board.toggle_resolved(&id).unwrap());
        assert!(!board.toggle_resolved(&id).unwrap());
        assert!(board.toggle_resolved("comment_99").is_err());
    }

    #[test]
    fn test_delete_permissions() {
        let team = team();
        let mut board = CommentBoard::new();
        let sara = board.add(&team, Some("sara"), 1, "Mine").unwrap().id.clone();
        let owner = board.add(&team, None, 2, "Owner note").unwrap().id.clone();

        // Editors may only delete their own comments
        assert!(board.delete(&team, Some("sara"), &owner).is_err());
        assert!(board.delete(&team, Some("omar"), &sara).is_err());
        assert_eq!(board.delete(&team, Some("sara"), &sara).unwrap().author, "sara");

        // Owners may delete anything
        assert!(board.delete(&team, None, &owner).is_ok());
        assert!(board.comments().is_empty());
    }
}
