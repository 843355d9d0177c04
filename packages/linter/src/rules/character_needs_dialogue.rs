use crate::diagnostic::Diagnostic;
use crate::rules::{BlockContext, StructureRule};
use screenplay_document::FormatKey;

/// A character cue must be followed directly by its speech
pub struct CharacterNeedsDialogueRule;

impl StructureRule for CharacterNeedsDialogueRule {
    fn name(&self) -> &'static str {
        "character-needs-dialogue"
    }

    fn description(&self) -> &'static str {
        "A character name must be followed by dialogue or a parenthetical"
    }

    fn check_block(&self, ctx: &BlockContext<'_>) -> Option<Diagnostic> {
        if ctx.block.format != FormatKey::Character {
            return None;
        }

        match ctx.next.map(|next| next.format) {
            Some(FormatKey::Dialogue) | Some(FormatKey::Parenthetical) => None,
            _ => Some(
                Diagnostic::medium(
                    self.name(),
                    "Character name without following dialogue",
                    ctx.line_number(),
                )
                .with_suggestion(
                    "Add dialogue or a parenthetical note after the character name.",
                ),
            ),
        }
    }
}
