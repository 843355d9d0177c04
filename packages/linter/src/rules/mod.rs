mod character_needs_dialogue;
mod dialogue_needs_speaker;
mod scene_heading_prefix;

pub use character_needs_dialogue::CharacterNeedsDialogueRule;
pub use dialogue_needs_speaker::DialogueNeedsSpeakerRule;
pub use scene_heading_prefix::SceneHeadingPrefixRule;

use crate::diagnostic::Diagnostic;
use screenplay_document::{Block, FormatKey};

/// What a rule sees of one block during the validation pass
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    /// 0-indexed block position
    pub index: usize,
    pub block: &'a Block,
    /// Plain text of the block, inline markup removed
    pub text: &'a str,
    /// Format of the nearest preceding block with non-blank text
    pub last_non_empty_format: Option<FormatKey>,
    /// The block immediately after this one
    pub next: Option<&'a Block>,
}

impl BlockContext<'_> {
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

/// Trait for implementing structure rules
pub trait StructureRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one block against its neighbours
    fn check_block(&self, ctx: &BlockContext<'_>) -> Option<Diagnostic>;
}

/// Registry of all available structure rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn StructureRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(DialogueNeedsSpeakerRule),
                Box::new(CharacterNeedsDialogueRule),
                Box::new(SceneHeadingPrefixRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn StructureRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn StructureRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Context for a lone block with the given neighbours
    pub fn context<'a>(
        block: &'a Block,
        text: &'a str,
        last_non_empty_format: Option<FormatKey>,
        next: Option<&'a Block>,
    ) -> BlockContext<'a> {
        BlockContext {
            index: 0,
            block,
            text,
            last_non_empty_format,
            next,
        }
    }
}
