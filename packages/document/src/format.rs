//! # Format Registry
//!
//! Static table of the screenplay element types a block can carry.
//!
//! Every block is tagged with exactly one [`FormatKey`]. The registry maps each
//! key to the identifiers the surrounding application uses for it:
//!
//! - **key**: canonical name used in serialized documents (`heading-1`)
//! - **class**: markup class name (`format-heading1`)
//! - **binding**: keyboard shortcut (`Ctrl+1`)
//! - **label**: menu label
//!
//! Lookups are case-insensitive and accept the key, the bare tag (`heading1`)
//! or the class name.

use crate::error::{DocumentError, DocumentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screenplay element type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatKey {
    Basmala,
    /// Scene heading
    Heading1,
    Heading2,
    Heading3,
    Character,
    Dialogue,
    Parenthetical,
    #[default]
    Action,
    Transition,
}

/// Registry entry describing one format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub format: FormatKey,
    pub key: &'static str,
    pub tag: &'static str,
    pub class: &'static str,
    pub binding: &'static str,
    pub label: &'static str,
}

/// All recognized formats, in menu order
pub const FORMAT_REGISTRY: &[FormatSpec] = &[
    FormatSpec {
        format: FormatKey::Basmala,
        key: "basmala",
        tag: "basmala",
        class: "format-basmala",
        binding: "Ctrl+0",
        label: "Basmala",
    },
    FormatSpec {
        format: FormatKey::Heading1,
        key: "heading-1",
        tag: "heading1",
        class: "format-heading1",
        binding: "Ctrl+1",
        label: "Scene Heading",
    },
    FormatSpec {
        format: FormatKey::Heading2,
        key: "heading-2",
        tag: "heading2",
        class: "format-heading2",
        binding: "Ctrl+2",
        label: "Heading 2",
    },
    FormatSpec {
        format: FormatKey::Heading3,
        key: "heading-3",
        tag: "heading3",
        class: "format-heading3",
        binding: "Ctrl+3",
        label: "Heading 3",
    },
    FormatSpec {
        format: FormatKey::Character,
        key: "character",
        tag: "character",
        class: "format-character",
        binding: "Ctrl+4",
        label: "Character",
    },
    FormatSpec {
        format: FormatKey::Dialogue,
        key: "dialogue",
        tag: "dialogue",
        class: "format-dialogue",
        binding: "Ctrl+5",
        label: "Dialogue",
    },
    FormatSpec {
        format: FormatKey::Parenthetical,
        key: "parenthetical",
        tag: "parenthetical",
        class: "format-parenthetical",
        binding: "Ctrl+6",
        label: "Parenthetical",
    },
    FormatSpec {
        format: FormatKey::Action,
        key: "action",
        tag: "action",
        class: "format-action",
        binding: "Ctrl+7",
        label: "Action",
    },
    FormatSpec {
        format: FormatKey::Transition,
        key: "transition",
        tag: "transition",
        class: "format-transition",
        binding: "Ctrl+8",
        label: "Transition",
    },
];

impl FormatKey {
    /// Registry entry for this format
    pub fn spec(self) -> &'static FormatSpec {
        // Registry order matches declaration order
        &FORMAT_REGISTRY[self as usize]
    }

    /// Canonical serialized key
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Markup class name
    pub fn class(self) -> &'static str {
        self.spec().class
    }

    /// Resolve a key, tag or class name
    pub fn lookup(name: &str) -> DocumentResult<Self> {
        let needle = name.trim().to_ascii_lowercase();
        FORMAT_REGISTRY
            .iter()
            .find(|spec| spec.key == needle || spec.tag == needle || spec.class == needle)
            .map(|spec| spec.format)
            .ok_or_else(|| DocumentError::invalid_format(name))
    }

    /// Resolve a keyboard binding such as `Ctrl+4`
    pub fn from_binding(binding: &str) -> Option<Self> {
        FORMAT_REGISTRY
            .iter()
            .find(|spec| spec.binding.eq_ignore_ascii_case(binding.trim()))
            .map(|spec| spec.format)
    }

    /// Pick the first registry class found in a space-separated class list
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes
            .split_whitespace()
            .find_map(|class| Self::lookup(class).ok())
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormatKey {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl TryFrom<String> for FormatKey {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::lookup(&value)
    }
}

impl From<FormatKey> for String {
    fn from(format: FormatKey) -> Self {
        format.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_key_tag_and_class() {
        assert_eq!(FormatKey::lookup("heading-1").unwrap(), FormatKey::Heading1);
        assert_eq!(FormatKey::lookup("heading1").unwrap(), FormatKey::Heading1);
        assert_eq!(FormatKey::lookup("format-heading1").unwrap(), FormatKey::Heading1);
        assert_eq!(FormatKey::lookup("  Dialogue ").unwrap(), FormatKey::Dialogue);
    }

    #[test]
    fn test_unknown_key_is_invalid_format() {
        let err = FormatKey::lookup("montage").unwrap_err();
        assert_eq!(err, DocumentError::InvalidFormat("montage".to_string()));
    }

    #[test]
    fn test_registry_is_consistent() {
        for spec in FORMAT_REGISTRY {
            assert_eq!(spec.format.spec(), spec);
            assert_eq!(FormatKey::lookup(spec.class).unwrap(), spec.format);
            assert_eq!(FormatKey::from_binding(spec.binding), Some(spec.format));
        }
        assert_eq!(FORMAT_REGISTRY.len(), 9);
    }

    #[test]
    fn test_class_list_resolution() {
        assert_eq!(
            FormatKey::from_class_list("centered format-dialogue"),
            Some(FormatKey::Dialogue)
        );
        assert_eq!(FormatKey::from_class_list("centered"), None);
    }

    #[test]
    fn test_serde_uses_canonical_key() {
        let json = serde_json::to_string(&FormatKey::Heading1).unwrap();
        assert_eq!(json, "\"heading-1\"");
        let parsed: FormatKey = serde_json::from_str("\"format-transition\"").unwrap();
        assert_eq!(parsed, FormatKey::Transition);
        assert!(serde_json::from_str::<FormatKey>("\"nope\"").is_err());
    }
}
