use crate::diagnostic::Diagnostic;
use crate::rules::{BlockContext, StructureRule};
use screenplay_document::FormatKey;

const PREFIXES: &[&str] = &["INT.", "EXT."];

/// Scene headings should open with INT. or EXT.
pub struct SceneHeadingPrefixRule;

impl StructureRule for SceneHeadingPrefixRule {
    fn name(&self) -> &'static str {
        "scene-heading-prefix"
    }

    fn description(&self) -> &'static str {
        "Scene headings should start with INT. or EXT."
    }

    fn check_block(&self, ctx: &BlockContext<'_>) -> Option<Diagnostic> {
        if ctx.block.format != FormatKey::Heading1 {
            return None;
        }

        let upper = ctx.text.trim().to_uppercase();
        if PREFIXES.iter().any(|prefix| upper.starts_with(prefix)) {
            return None;
        }

        Some(
            Diagnostic::low(
                self.name(),
                "Scene heading does not start with INT. or EXT.",
                ctx.line_number(),
            )
            .with_suggestion("Use the standard heading form, for example: INT. ROOM - DAY"),
        )
    }
}
