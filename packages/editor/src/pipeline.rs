//! # Derivation Pipeline
//!
//! Runs the derived computations (analytics, structure validation) over a
//! document and caches the last good result of each.
//!
//! Both are best-effort: a panic inside either pass is caught, logged, and
//! the previous result (or an empty default) is returned instead. Editing
//! never stops because a derived view failed.

use screenplay_analytics::{analyze, AnalyticsSnapshot};
use screenplay_document::Document;
use screenplay_linter::{validate, ValidationReport};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// Caches the last analytics and validation results
#[derive(Debug, Default)]
pub struct Pipeline {
    last_analytics: Option<AnalyticsSnapshot>,
    last_report: Option<ValidationReport>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute analytics, falling back to the previous snapshot on failure
    pub fn analyze(&mut self, document: &Document) -> AnalyticsSnapshot {
        match catch_unwind(AssertUnwindSafe(|| analyze(document))) {
            Ok(snapshot) => {
                self.last_analytics = Some(snapshot.clone());
                snapshot
            }
            Err(_) => {
                warn!("Analytics pass panicked; serving the previous snapshot");
                self.last_analytics.clone().unwrap_or_default()
            }
        }
    }

    /// Revalidate, falling back to the previous report on failure
    pub fn validate(&mut self, document: &Document) -> ValidationReport {
        match catch_unwind(AssertUnwindSafe(|| validate(document))) {
            Ok(report) => {
                self.last_report = Some(report.clone());
                report
            }
            Err(_) => {
                warn!("Validation pass panicked; serving the previous report");
                self.last_report.clone().unwrap_or_default()
            }
        }
    }

    /// Both passes in one go
    pub fn run(&mut self, document: &Document) -> PipelineResult {
        PipelineResult {
            analytics: self.analyze(document),
            report: self.validate(document),
        }
    }

    /// Get last analytics snapshot (if any)
    pub fn last_analytics(&self) -> Option<&AnalyticsSnapshot> {
        self.last_analytics.as_ref()
    }

    /// Get last validation report (if any)
    pub fn last_report(&self) -> Option<&ValidationReport> {
        self.last_report.as_ref()
    }

    /// Drop cached results
    pub fn clear_cache(&mut self) {
        self.last_analytics = None;
        self.last_report = None;
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub analytics: AnalyticsSnapshot,
    pub report: ValidationReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_document::{Block, FormatKey};

    #[test]
    fn test_pipeline_caches_results() {
        let doc = Document::from_blocks(vec![
            Block::new(FormatKey::Heading1, "INT. HOUSE - DAY"),
            Block::new(FormatKey::Character, "JOHN"),
        ]);

        let mut pipeline = Pipeline::new();
        assert!(pipeline.last_analytics().is_none());

        let result = pipeline.run(&doc);
        assert_eq!(result.analytics.scene_count, 1);
        assert_eq!(result.report.len(), 1);

        assert_eq!(pipeline.last_analytics(), Some(&result.analytics));
        assert_eq!(pipeline.last_report(), Some(&result.report));

        pipeline.clear_cache();
        assert!(pipeline.last_report().is_none());
    }
}
