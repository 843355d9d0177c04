//! # Document Tree
//!
//! In-memory representation of a screenplay: an ordered, never-empty sequence
//! of [`Block`]s. Order is reading order.
//!
//! ## Invariants
//!
//! - Every block carries exactly one [`FormatKey`] (blocks without an explicit
//!   tag default to `action`).
//! - A document always holds at least one block so the caret has a home.
//!   Operations that would leave it empty fall back to a single empty action
//!   block instead.

use crate::error::{DocumentError, DocumentResult};
use crate::format::FormatKey;
use crate::serializer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("inline tag pattern"));

/// One paragraph of the screenplay
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    /// Element type (exactly one per block)
    #[serde(default)]
    pub format: FormatKey,

    /// Content, possibly with inline bold/italic markup
    #[serde(default)]
    pub text: String,
}

impl Block {
    pub fn new(format: FormatKey, text: impl Into<String>) -> Self {
        Self {
            format,
            text: text.into(),
        }
    }

    pub fn action(text: impl Into<String>) -> Self {
        Self::new(FormatKey::Action, text)
    }

    /// Text with inline markup removed and basic entities decoded
    pub fn plain_text(&self) -> String {
        if !self.text.contains('<') && !self.text.contains('&') {
            return self.text.clone();
        }
        decode_entities(&INLINE_TAG.replace_all(&self.text, ""))
    }

    /// True when the block has no visible content
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

pub(crate) fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Editable screenplay document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Single empty action block
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::default()],
        }
    }

    /// Build from blocks, normalizing an empty list to the default document
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            Self::new()
        } else {
            Self { blocks }
        }
    }

    /// Replace-on-load entry point.
    ///
    /// `None`, empty or whitespace-only input and an empty block list all
    /// yield [`Document::new`]. JSON (`[...]`) and paragraph markup (`<p ...>`)
    /// are accepted; anything else is [`DocumentError::MalformedDocument`].
    pub fn load(serialized: Option<&str>) -> DocumentResult<Self> {
        let source = match serialized.map(str::trim) {
            None | Some("") => return Ok(Self::new()),
            Some(source) => source,
        };

        let blocks = if source.starts_with('[') {
            serializer::parse_json(source)?
        } else if source.starts_with('<') {
            serializer::parse_markup(source)
        } else {
            return Err(DocumentError::malformed(
                "expected a JSON block list or paragraph markup",
            ));
        };

        Ok(Self::from_blocks(blocks))
    }

    /// Canonical serialized form (JSON block list)
    pub fn serialize(&self) -> String {
        serializer::to_json(&self.blocks)
    }

    /// Paragraph markup form
    pub fn to_markup(&self) -> String {
        serializer::to_markup(&self.blocks)
    }

    /// Concatenated block texts, one line per block
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True when the document is the untouched default
    pub fn is_pristine(&self) -> bool {
        self.blocks.len() == 1 && self.blocks[0] == Block::default()
    }

    pub fn check_index(&self, index: usize) -> DocumentResult<()> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(DocumentError::out_of_range(index, self.blocks.len()))
        }
    }

    pub fn block_mut(&mut self, index: usize) -> DocumentResult<&mut Block> {
        let len = self.blocks.len();
        self.blocks
            .get_mut(index)
            .ok_or(DocumentError::out_of_range(index, len))
    }

    /// Insert at `index` (may equal `len` to append)
    pub fn insert(&mut self, index: usize, block: Block) -> DocumentResult<()> {
        if index > self.blocks.len() {
            return Err(DocumentError::out_of_range(index, self.blocks.len()));
        }
        self.blocks.insert(index, block);
        Ok(())
    }

    /// Remove the block at `index`; removing the last block resets the document
    pub fn remove(&mut self, index: usize) -> DocumentResult<Block> {
        self.check_index(index)?;
        let removed = self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(Block::default());
        }
        Ok(removed)
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::from_blocks(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_none_and_empty_yield_single_action_block() {
        for input in [None, Some(""), Some("   \n"), Some("[]")] {
            let doc = Document::load(input).unwrap();
            assert_eq!(doc.len(), 1);
            assert_eq!(doc.blocks()[0].format, FormatKey::Action);
            assert_eq!(doc.blocks()[0].text, "");
        }
    }

    #[test]
    fn test_load_rejects_unrecognized_input() {
        let err = Document::load(Some("just some words")).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedDocument(_)));

        let err = Document::load(Some("[{\"format\": 12}]")).unwrap_err();
        assert!(matches!(err, DocumentError::MalformedDocument(_)));
    }

    #[test]
    fn test_missing_format_defaults_to_action() {
        let doc = Document::load(Some(r#"[{"text": "He waits."}]"#)).unwrap();
        assert_eq!(doc.blocks()[0].format, FormatKey::Action);
    }

    #[test]
    fn test_plain_text_strips_inline_markup() {
        let block = Block::action("<b>Bold</b> &amp; <i>italic</i>");
        assert_eq!(block.plain_text(), "Bold & italic");
    }

    #[test]
    fn test_remove_last_block_keeps_document_non_empty() {
        let mut doc = Document::from_blocks(vec![Block::new(FormatKey::Dialogue, "Hi")]);
        let removed = doc.remove(0).unwrap();
        assert_eq!(removed.text, "Hi");
        assert_eq!(doc.len(), 1);
        assert!(doc.is_pristine());
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut doc = Document::new();
        assert!(doc.insert(1, Block::action("end")).is_ok());
        let err = doc.insert(5, Block::action("far")).unwrap_err();
        assert_eq!(err, DocumentError::BlockOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_plain_text_joins_blocks() {
        let doc: Document = vec![
            Block::new(FormatKey::Character, "JOHN"),
            Block::new(FormatKey::Dialogue, "Hello there"),
        ]
        .into_iter()
        .collect();
        assert_eq!(doc.plain_text(), "JOHN\nHello there");
    }
}
