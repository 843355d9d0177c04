//! # Block Mutations
//!
//! Explicit edits against an explicit block index. The host surface turns
//! keystrokes into these; the editor never inspects a live UI tree.
//!
//! ## Mutation Semantics
//!
//! ### UpdateText
//! - Atomic replacement of the block's text (not a character diff)
//!
//! ### SplitBlock
//! - Enter key: text after the char offset moves to a new block directly
//!   below, which keeps the original block's format
//!
//! ### RemoveBlock
//! - Removing the only block leaves a single empty action block
//!
//! Every mutation validates before touching the document, so a failed
//! mutation leaves it unchanged.

use screenplay_document::{Block, Document, FormatKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Replace the text of a block
    UpdateText { index: usize, text: String },

    /// Retag a block
    SetFormat { index: usize, format: FormatKey },

    /// Insert a block; `index == len` appends
    InsertBlock { index: usize, block: Block },

    /// Remove a block
    RemoveBlock { index: usize },

    /// Split a block at a char offset into its text
    SplitBlock { index: usize, offset: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {index} (document has {len} blocks)")]
    BlockNotFound { index: usize, len: usize },

    #[error("Insert position {index} is past the end (document has {len} blocks)")]
    InsertOutOfRange { index: usize, len: usize },

    #[error("Split offset {offset} is past the end of the block ({len} chars)")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// Outcome of an applied mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationResult {
    /// Session version after the mutation
    pub version: u64,

    /// Block the caret sits in afterwards
    pub active_block: usize,
}

impl Mutation {
    /// Block the mutation targets
    pub fn index(&self) -> usize {
        match self {
            Mutation::UpdateText { index, .. }
            | Mutation::SetFormat { index, .. }
            | Mutation::InsertBlock { index, .. }
            | Mutation::RemoveBlock { index }
            | Mutation::SplitBlock { index, .. } => *index,
        }
    }

    /// Check the mutation against the document without changing it
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        let len = doc.len();

        match self {
            Mutation::InsertBlock { index, .. } => {
                if *index > len {
                    return Err(MutationError::InsertOutOfRange { index: *index, len });
                }
            }

            Mutation::SplitBlock { index, offset } => {
                let block = doc
                    .block(*index)
                    .ok_or(MutationError::BlockNotFound { index: *index, len })?;
                let chars = block.text.chars().count();
                if *offset > chars {
                    return Err(MutationError::OffsetOutOfRange {
                        offset: *offset,
                        len: chars,
                    });
                }
            }

            Mutation::UpdateText { index, .. }
            | Mutation::SetFormat { index, .. }
            | Mutation::RemoveBlock { index } => {
                if *index >= len {
                    return Err(MutationError::BlockNotFound { index: *index, len });
                }
            }
        }

        Ok(())
    }

    /// Apply with validation, returning the block the caret lands in
    pub fn apply(&self, doc: &mut Document) -> Result<usize, MutationError> {
        // Validate first
        self.validate(doc)?;

        let len = doc.len();
        let not_found = |index: usize| MutationError::BlockNotFound { index, len };

        match self {
            Mutation::UpdateText { index, text } => {
                let block = doc.block_mut(*index).map_err(|_| not_found(*index))?;
                block.text = text.clone();
                Ok(*index)
            }

            Mutation::SetFormat { index, format } => {
                let block = doc.block_mut(*index).map_err(|_| not_found(*index))?;
                block.format = *format;
                Ok(*index)
            }

            Mutation::InsertBlock { index, block } => {
                doc.insert(*index, block.clone())
                    .map_err(|_| MutationError::InsertOutOfRange { index: *index, len })?;
                Ok(*index)
            }

            Mutation::RemoveBlock { index } => {
                doc.remove(*index).map_err(|_| not_found(*index))?;
                Ok(index.saturating_sub(1).min(doc.len() - 1))
            }

            Mutation::SplitBlock { index, offset } => {
                let block = doc.block_mut(*index).map_err(|_| not_found(*index))?;
                let at = byte_offset(&block.text, *offset);
                let tail = block.text.split_off(at);
                let format = block.format;

                doc.insert(index + 1, Block::new(format, tail))
                    .map_err(|_| MutationError::InsertOutOfRange { index: index + 1, len })?;
                Ok(index + 1)
            }
        }
    }
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(at, _)| at)
}
