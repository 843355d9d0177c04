//! Linear substring search over document blocks.

use crate::block::Document;
use crate::format::FormatKey;
use serde::{Deserialize, Serialize};

/// One matching block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// 1-indexed block position
    pub line_number: usize,
    pub text: String,
    pub format: FormatKey,
}

/// Case-insensitive substring search.
///
/// With a `format_filter`, blocks of any other format are skipped entirely.
/// An empty query returns no hits.
pub fn search(doc: &Document, query: &str, format_filter: Option<FormatKey>) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    doc.blocks()
        .iter()
        .enumerate()
        .filter(|(_, block)| format_filter.map_or(true, |format| block.format == format))
        .filter_map(|(index, block)| {
            let text = block.plain_text();
            text.to_lowercase().contains(&needle).then(|| SearchHit {
                line_number: index + 1,
                text,
                format: block.format,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Block::new(FormatKey::Character, "JOHN"),
            Block::new(FormatKey::Dialogue, "Hello there"),
        ])
    }

    #[test]
    fn test_case_insensitive_single_hit() {
        let hits = search(&sample(), "hello", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line_number, 2);
        assert_eq!(hits[0].format, FormatKey::Dialogue);
    }

    #[test]
    fn test_filter_excludes_other_formats() {
        assert!(search(&sample(), "hello", Some(FormatKey::Character)).is_empty());
        assert_eq!(search(&sample(), "john", Some(FormatKey::Character)).len(), 1);
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(search(&sample(), "", None).is_empty());
        assert!(search(&Document::new(), "x", None).is_empty());
    }
}
