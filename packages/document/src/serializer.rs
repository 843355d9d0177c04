//! Serialized forms of a document.
//!
//! - JSON: `[{"format": "heading-1", "text": "INT. HOUSE - DAY"}, ...]`, the
//!   canonical form used for snapshots and persistence.
//! - Markup: `<p class="format-heading1">INT. HOUSE - DAY</p>`, the paragraph
//!   form produced by rich-text surfaces and HTML imports.

use crate::block::{decode_entities, Block};
use crate::error::{DocumentError, DocumentResult};
use crate::format::FormatKey;
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:p|div|h[1-6])\b([^>]*)>(.*?)</(?:p|div|h[1-6])\s*>")
        .expect("paragraph pattern")
});

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)class\s*=\s*["']([^"']*)["']"#).expect("class attribute pattern")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?([a-zA-Z][a-zA-Z0-9]*)[^>]*>").expect("tag pattern"));

const INLINE_TAGS: &[&str] = &["b", "i", "u", "strong", "em"];

pub fn to_json(blocks: &[Block]) -> String {
    serde_json::to_string(blocks).unwrap_or_default()
}

pub fn parse_json(source: &str) -> DocumentResult<Vec<Block>> {
    serde_json::from_str(source).map_err(|e| DocumentError::malformed(e.to_string()))
}

pub fn to_markup(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            let inner = if block.text.is_empty() {
                "<br>"
            } else {
                block.text.as_str()
            };
            format!("<p class=\"{}\">{}</p>", block.format.class(), inner)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse paragraph markup into blocks.
///
/// Paragraphs without a registry class become action blocks. Inline
/// bold/italic/underline tags are kept, every other tag is dropped. Input
/// without any paragraph element is read as plain lines.
pub fn parse_markup(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for captures in PARAGRAPH.captures_iter(source) {
        let attrs = captures.get(1).map_or("", |m| m.as_str());
        let inner = captures.get(2).map_or("", |m| m.as_str());

        let format = CLASS_ATTR
            .captures(attrs)
            .and_then(|c| c.get(1))
            .and_then(|classes| FormatKey::from_class_list(classes.as_str()))
            .unwrap_or_default();

        blocks.push(Block::new(format, keep_inline_markup(inner).trim()));
    }

    if blocks.is_empty() {
        let stripped = decode_entities(&ANY_TAG.replace_all(source, "\n"));
        blocks = stripped
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Block::action)
            .collect();
    }

    blocks
}

fn keep_inline_markup(inner: &str) -> String {
    ANY_TAG
        .replace_all(inner, |caps: &regex::Captures<'_>| {
            let name = caps[1].to_ascii_lowercase();
            if INLINE_TAGS.contains(&name.as_str()) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}
