//! Character roster discovered from analytics.

use screenplay_analytics::AnalyticsSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub id: String,
    /// Normalized name as counted by analytics
    pub name: String,
    pub role: String,
    pub description: String,
}

/// One profile per character name seen so far.
///
/// Profiles are never dropped when a name disappears from the script, so
/// notes written against a character survive a temporary deletion.
#[derive(Debug, Clone, Default)]
pub struct CharacterRoster {
    profiles: BTreeMap<String, CharacterProfile>,
    next_id: u64,
}

pub const UNASSIGNED_ROLE: &str = "unassigned";

impl CharacterRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add profiles for names not seen before. Returns true if any were added.
    pub fn discover(&mut self, snapshot: &AnalyticsSnapshot) -> bool {
        let mut changed = false;

        for name in snapshot.character_stats.keys() {
            if self.profiles.contains_key(name) {
                continue;
            }

            self.next_id += 1;
            self.profiles.insert(
                name.clone(),
                CharacterProfile {
                    id: format!("char_{}", self.next_id),
                    name: name.clone(),
                    role: UNASSIGNED_ROLE.to_string(),
                    description: String::new(),
                },
            );
            changed = true;
        }

        if changed {
            debug!(characters = self.profiles.len(), "Character roster grew");
        }
        changed
    }

    pub fn get(&self, name: &str) -> Option<&CharacterProfile> {
        self.profiles.get(name)
    }

    /// Update a profile's role and description
    pub fn describe(&mut self, name: &str, role: &str, description: &str) -> bool {
        match self.profiles.get_mut(name) {
            Some(profile) => {
                profile.role = role.to_string();
                profile.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Profiles in name order
    pub fn profiles(&self) -> Vec<CharacterProfile> {
        self.profiles.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_analytics::analyze;
    use screenplay_document::{Block, Document, FormatKey};

    fn snapshot(names: &[&str]) -> AnalyticsSnapshot {
        analyze(&Document::from_blocks(
            names
                .iter()
                .map(|name| Block::new(FormatKey::Character, *name))
                .collect(),
        ))
    }

    #[test]
    fn test_discover_only_reports_new_names() {
        let mut roster = CharacterRoster::new();

        assert!(roster.discover(&snapshot(&["JOHN", "Mary (V.O.)"])));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("MARY").unwrap().role, UNASSIGNED_ROLE);

        assert!(!roster.discover(&snapshot(&["JOHN"])));
        assert!(roster.discover(&snapshot(&["JOHN", "OMAR"])));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_describe_survives_rediscovery() {
        let mut roster = CharacterRoster::new();
        roster.discover(&snapshot(&["JOHN"]));

        assert!(roster.describe("JOHN", "lead", "A tired detective"));
        assert!(!roster.describe("NOBODY", "extra", ""));

        roster.discover(&snapshot(&["JOHN"]));
        assert_eq!(roster.get("JOHN").unwrap().description, "A tired detective");
    }
}
