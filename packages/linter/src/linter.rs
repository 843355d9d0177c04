use crate::diagnostic::{Diagnostic, Severity};
use crate::rules::{BlockContext, RuleRegistry};
use screenplay_document::{Document, FormatKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for configuring the validator
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Ordered issues from one validation pass, recomputed wholesale every run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub issues: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|d| d.severity == severity).count()
    }

    pub fn has_high(&self) -> bool {
        self.count(Severity::High) > 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.issues.iter()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

/// Validate with the built-in rules
pub fn validate(document: &Document) -> ValidationReport {
    lint_document(document, LintOptions::default())
}

/// Run every registered rule over each block in order.
///
/// Blank blocks are still checked but do not move `last_non_empty_format`.
pub fn lint_document(document: &Document, options: LintOptions) -> ValidationReport {
    let registry = options.registry.unwrap_or_default();
    let blocks = document.blocks();
    let mut issues = Vec::new();
    let mut last_non_empty_format: Option<FormatKey> = None;

    for (index, block) in blocks.iter().enumerate() {
        let text = block.plain_text();
        let ctx = BlockContext {
            index,
            block,
            text: &text,
            last_non_empty_format,
            next: blocks.get(index + 1),
        };

        for rule in registry.rules() {
            issues.extend(rule.check_block(&ctx));
        }

        if !text.trim().is_empty() {
            last_non_empty_format = Some(block.format);
        }
    }

    debug!(blocks = blocks.len(), issues = issues.len(), "Validation pass complete");

    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StructureRule;
    use screenplay_document::Block;

    fn doc(blocks: &[(FormatKey, &str)]) -> Document {
        Document::from_blocks(
            blocks
                .iter()
                .map(|(format, text)| Block::new(*format, *text))
                .collect(),
        )
    }

    #[test]
    fn test_lone_dialogue() {
        let report = validate(&doc(&[(FormatKey::Dialogue, "Hi")]));
        assert_eq!(report.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::High);
        assert_eq!(report.issues[0].line_number, 1);
    }

    #[test]
    fn test_lone_character() {
        let report = validate(&doc(&[(FormatKey::Character, "JOHN")]));
        assert_eq!(report.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Medium);
        assert_eq!(report.issues[0].line_number, 1);
    }

    #[test]
    fn test_well_formed_scene_is_clean() {
        let report = validate(&doc(&[
            (FormatKey::Heading1, "INT. HOUSE - DAY"),
            (FormatKey::Character, "JOHN"),
            (FormatKey::Parenthetical, "(quietly)"),
            (FormatKey::Dialogue, "Hello there"),
        ]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_blank_blocks_keep_stale_format() {
        let report = validate(&doc(&[
            (FormatKey::Parenthetical, "(beat)"),
            (FormatKey::Action, "   "),
            (FormatKey::Dialogue, "Still attributed"),
        ]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_blank_blocks_are_still_checked() {
        let report = validate(&doc(&[
            (FormatKey::Heading1, ""),
            (FormatKey::Dialogue, ""),
        ]));

        assert_eq!(report.len(), 2);
        assert_eq!(report.count(Severity::Low), 1);
        assert_eq!(report.count(Severity::High), 1);
        assert_eq!(report.issues[1].line_number, 2);
    }

    #[test]
    fn test_issues_are_in_block_order() {
        let report = validate(&doc(&[
            (FormatKey::Heading1, "MONTAGE"),
            (FormatKey::Dialogue, "Who?"),
            (FormatKey::Character, "MARY"),
        ]));

        let lines: Vec<_> = report.iter().map(|d| d.line_number).collect();
        assert_eq!(lines, vec![1, 2, 3]);
        assert!(report.has_high());
    }

    struct NoShouting;

    impl StructureRule for NoShouting {
        fn name(&self) -> &'static str {
            "no-shouting"
        }

        fn description(&self) -> &'static str {
            "Action lines should not be all caps"
        }

        fn check_block(&self, ctx: &BlockContext<'_>) -> Option<Diagnostic> {
            let shouting = ctx.block.format == FormatKey::Action
                && ctx.text.chars().any(char::is_alphabetic)
                && ctx.text == ctx.text.to_uppercase();
            shouting.then(|| Diagnostic::low(self.name(), "All caps action", ctx.line_number()))
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = RuleRegistry::empty();
        registry.add_rule(Box::new(NoShouting));

        let report = lint_document(
            &doc(&[
                (FormatKey::Dialogue, "Orphan"),
                (FormatKey::Action, "BOOM"),
            ]),
            LintOptions {
                registry: Some(registry),
            },
        );

        assert_eq!(report.len(), 1);
        assert_eq!(report.issues[0].rule, "no-shouting");
        assert_eq!(report.issues[0].line_number, 2);
    }

    #[test]
    fn test_report_serializes_as_list() {
        let report = validate(&doc(&[(FormatKey::Dialogue, "Hi")]));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json[0]["lineNumber"], 1);
        assert_eq!(json[0]["severity"], "high");
        assert!(json[0]["suggestion"].is_string());
    }
}
