//! Assigns a format to the block under the caret.
//!
//! Tags are exclusive by construction: a block holds a single [`FormatKey`],
//! so retagging replaces the old format.

use screenplay_document::{Document, DocumentError, DocumentResult, FormatKey};
use tracing::debug;

pub struct FormatClassifier;

impl FormatClassifier {
    /// Retag the block at `block_index` with the format named by `format_key`.
    ///
    /// The key may be a canonical key, bare tag or class name. Unknown keys
    /// and indices outside the document leave it unchanged.
    pub fn set_format(
        document: &mut Document,
        block_index: usize,
        format_key: &str,
    ) -> DocumentResult<FormatKey> {
        let format = FormatKey::lookup(format_key)?;
        Self::set(document, block_index, format)?;
        Ok(format)
    }

    /// Retag through a keyboard binding such as `Ctrl+4`
    pub fn apply_binding(
        document: &mut Document,
        block_index: usize,
        binding: &str,
    ) -> DocumentResult<FormatKey> {
        let format = FormatKey::from_binding(binding)
            .ok_or_else(|| DocumentError::invalid_format(binding))?;
        Self::set(document, block_index, format)?;
        Ok(format)
    }

    fn set(document: &mut Document, block_index: usize, format: FormatKey) -> DocumentResult<()> {
        let block = document.block_mut(block_index)?;
        if block.format != format {
            debug!(block = block_index, from = %block.format, to = %format, "Retagging block");
            block.format = format;
        }
        Ok(())
    }
}
