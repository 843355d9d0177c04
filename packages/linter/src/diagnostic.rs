use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a structural issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        f.write_str(label)
    }
}

/// A structural issue found by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// 1-indexed block position
    pub line_number: usize,

    pub severity: Severity,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        rule: impl Into<String>,
        message: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            line_number,
            severity,
            rule: rule.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn high(rule: impl Into<String>, message: impl Into<String>, line_number: usize) -> Self {
        Self::new(Severity::High, rule, message, line_number)
    }

    pub fn medium(rule: impl Into<String>, message: impl Into<String>, line_number: usize) -> Self {
        Self::new(Severity::Medium, rule, message, line_number)
    }

    pub fn low(rule: impl Into<String>, message: impl Into<String>, line_number: usize) -> Self {
        Self::new(Severity::Low, rule, message, line_number)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
