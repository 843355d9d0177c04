mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, Severity};
pub use linter::{lint_document, validate, LintOptions, ValidationReport};
pub use rules::{
    BlockContext, CharacterNeedsDialogueRule, DialogueNeedsSpeakerRule, RuleRegistry,
    SceneHeadingPrefixRule, StructureRule,
};
