use crate::diagnostic::Diagnostic;
use crate::rules::{BlockContext, StructureRule};
use screenplay_document::FormatKey;

/// Dialogue must follow a character cue, possibly through a parenthetical
pub struct DialogueNeedsSpeakerRule;

impl StructureRule for DialogueNeedsSpeakerRule {
    fn name(&self) -> &'static str {
        "dialogue-needs-speaker"
    }

    fn description(&self) -> &'static str {
        "Dialogue must be preceded by a character or parenthetical"
    }

    fn check_block(&self, ctx: &BlockContext<'_>) -> Option<Diagnostic> {
        if ctx.block.format != FormatKey::Dialogue {
            return None;
        }

        match ctx.last_non_empty_format {
            Some(FormatKey::Character) | Some(FormatKey::Parenthetical) => None,
            _ => Some(
                Diagnostic::high(
                    self.name(),
                    "Dialogue without a preceding character name",
                    ctx.line_number(),
                )
                .with_suggestion("Add a character name before this line."),
            ),
        }
    }
}
