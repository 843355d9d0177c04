//! Import boundary.
//!
//! Collaborators hand over content that is already textual (plain text or
//! HTML). Binary formats are decoded elsewhere; this module only normalizes
//! whitespace and turns the text into blocks.

use crate::block::{Block, Document};
use crate::error::{DocumentError, DocumentResult};
use crate::serializer;

/// Textual content kinds the core accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    PlainText,
    Markup,
    Serialized,
}

impl ImportKind {
    /// Map a file extension to an import kind.
    ///
    /// Binary interchange formats (`docx`, `pdf`, `rtf`) must be decoded to
    /// text before they reach the core.
    pub fn from_extension(extension: &str) -> DocumentResult<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" | "text" | "fountain" => Ok(Self::PlainText),
            "html" | "htm" => Ok(Self::Markup),
            "json" => Ok(Self::Serialized),
            other => Err(DocumentError::UnsupportedImport(other.to_string())),
        }
    }
}

/// Normalize imported whitespace.
///
/// Strips a byte-order mark, converts CRLF/CR to LF, turns tabs and
/// non-breaking spaces into spaces, drops trailing whitespace on each line and
/// trims the whole text.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let unified = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(|c: char| c == '\t' || c == '\u{a0}', " ");

    unified
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Each non-empty line becomes an action block
pub fn from_plain_text(text: &str) -> Document {
    normalize_whitespace(text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Block::action)
        .collect()
}

/// Paragraph markup to blocks, classes mapped through the registry
pub fn from_markup(html: &str) -> Document {
    Document::from_blocks(serializer::parse_markup(&normalize_whitespace(html)))
}

/// Import textual content of the given kind
pub fn import(content: &str, kind: ImportKind) -> DocumentResult<Document> {
    match kind {
        ImportKind::PlainText => Ok(from_plain_text(content)),
        ImportKind::Markup => Ok(from_markup(content)),
        ImportKind::Serialized => Document::load(Some(&normalize_whitespace(content))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatKey;

    #[test]
    fn test_normalize_whitespace() {
        let raw = "\u{feff}  INT. HOUSE - DAY\t \r\nJohn enters.\u{a0}\r\n\r\n";
        assert_eq!(normalize_whitespace(raw), "INT. HOUSE - DAY\nJohn enters.");
    }

    #[test]
    fn test_plain_text_lines_become_action_blocks() {
        let doc = from_plain_text("First line\n\n   \nSecond line\n");
        assert_eq!(doc.len(), 2);
        assert!(doc.blocks().iter().all(|b| b.format == FormatKey::Action));
    }

    #[test]
    fn test_empty_import_still_has_a_block() {
        let doc = from_plain_text("   \r\n  ");
        assert!(doc.is_pristine());
    }

    #[test]
    fn test_binary_formats_are_unsupported() {
        for ext in ["docx", "pdf", "rtf"] {
            assert!(matches!(
                ImportKind::from_extension(ext),
                Err(DocumentError::UnsupportedImport(_))
            ));
        }
        assert_eq!(ImportKind::from_extension(".TXT").unwrap(), ImportKind::PlainText);
        assert_eq!(ImportKind::from_extension("htm").unwrap(), ImportKind::Markup);
    }
}
