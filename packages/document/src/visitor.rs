use crate::block::{Block, Document};
use crate::format::FormatKey;

/// Visitor pattern for walking a document in reading order
///
/// `visit_block` dispatches to the per-format hooks below. Override the hooks
/// you care about; the defaults do nothing.
pub trait Visitor: Sized {
    fn visit_document(&mut self, doc: &Document) {
        walk_document(self, doc);
    }

    fn visit_block(&mut self, index: usize, block: &Block) {
        walk_block(self, index, block);
    }

    fn visit_scene_heading(&mut self, _index: usize, _block: &Block) {}

    fn visit_character(&mut self, _index: usize, _block: &Block) {}

    fn visit_dialogue(&mut self, _index: usize, _block: &Block) {}

    fn visit_parenthetical(&mut self, _index: usize, _block: &Block) {}

    fn visit_action(&mut self, _index: usize, _block: &Block) {}

    fn visit_transition(&mut self, _index: usize, _block: &Block) {}

    /// Basmala and secondary headings
    fn visit_other(&mut self, _index: usize, _block: &Block) {}
}

pub fn walk_document<V: Visitor>(visitor: &mut V, doc: &Document) {
    for (index, block) in doc.blocks().iter().enumerate() {
        visitor.visit_block(index, block);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, index: usize, block: &Block) {
    match block.format {
        FormatKey::Heading1 => visitor.visit_scene_heading(index, block),
        FormatKey::Character => visitor.visit_character(index, block),
        FormatKey::Dialogue => visitor.visit_dialogue(index, block),
        FormatKey::Parenthetical => visitor.visit_parenthetical(index, block),
        FormatKey::Action => visitor.visit_action(index, block),
        FormatKey::Transition => visitor.visit_transition(index, block),
        FormatKey::Basmala | FormatKey::Heading2 | FormatKey::Heading3 => {
            visitor.visit_other(index, block)
        }
    }
}
