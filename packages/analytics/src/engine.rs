//! # Analytics Engine
//!
//! One ordered pass over the document that derives word/char/page counts,
//! scene breakdowns and per-character dialogue statistics.
//!
//! ## Speaker attribution
//!
//! The pass keeps a "current character" register. Every character block
//! overwrites it; nothing else clears it. Dialogue after an intervening
//! parenthetical or action block is therefore still attributed to the last
//! cue, which matches how the editor has always counted interrupted speeches.

use crate::character::{count_words, normalize_character_name};
use crate::readiness;
use crate::stats::{AnalyticsSnapshot, SceneLocation, SceneSummary, SceneTime};
use screenplay_document::{walk_block, Block, Document, Visitor};
use tracing::debug;

/// Blocks per page for the page estimate
pub const BLOCKS_PER_PAGE: usize = 55;

/// Analyze a document.
///
/// Pure function of its input: the same document always yields an identical
/// snapshot.
pub fn analyze(doc: &Document) -> AnalyticsSnapshot {
    let mut pass = AnalyticsPass::default();
    pass.visit_document(doc);
    let snapshot = pass.finish(doc);

    debug!(
        blocks = doc.len(),
        words = snapshot.word_count,
        scenes = snapshot.scene_count,
        characters = snapshot.character_stats.len(),
        "Analytics pass complete"
    );

    snapshot
}

/// Rough page estimate
pub fn estimate_page_count(block_count: usize) -> usize {
    block_count.div_ceil(BLOCKS_PER_PAGE).max(1)
}

#[derive(Default)]
struct AnalyticsPass {
    snapshot: AnalyticsSnapshot,
    current_character: Option<String>,
    current_scene: Option<SceneSummary>,
}

impl AnalyticsPass {
    fn finish(mut self, doc: &Document) -> AnalyticsSnapshot {
        self.close_scene();

        self.snapshot.page_count = estimate_page_count(doc.len());
        self.snapshot.readiness = readiness::assess(&self.snapshot);
        self.snapshot
    }

    fn close_scene(&mut self) {
        if let Some(scene) = self.current_scene.take() {
            self.snapshot.scenes.push(scene);
        }
    }
}

impl Visitor for AnalyticsPass {
    fn visit_block(&mut self, index: usize, block: &Block) {
        let plain = block.plain_text();
        let words = count_words(&plain);

        self.snapshot.word_count += words;
        self.snapshot.char_count += plain.chars().count();

        walk_block(self, index, block);

        if let Some(scene) = self.current_scene.as_mut() {
            scene.block_count += 1;
            scene.word_count += words;
        }
    }

    fn visit_scene_heading(&mut self, index: usize, block: &Block) {
        self.close_scene();

        let heading = block.plain_text().trim().to_string();
        let upper = heading.to_uppercase();
        let location = SceneLocation::classify(&upper);
        let time = SceneTime::classify(&upper);

        self.snapshot.scene_count += 1;
        self.snapshot.scene_location_stats.record(location);
        self.snapshot.scene_time_stats.record(time);

        self.current_scene = Some(SceneSummary {
            line_number: index + 1,
            heading,
            location,
            time,
            block_count: 0,
            word_count: 0,
        });
    }

    fn visit_character(&mut self, _index: usize, block: &Block) {
        let name = normalize_character_name(&block.plain_text());
        if name.is_empty() {
            self.current_character = None;
            return;
        }

        self.snapshot
            .character_stats
            .entry(name.clone())
            .or_default()
            .appearances += 1;
        self.current_character = Some(name);
    }

    fn visit_dialogue(&mut self, _index: usize, block: &Block) {
        let Some(name) = &self.current_character else {
            return;
        };

        let words = count_words(&block.plain_text());
        let stats = self.snapshot.character_stats.entry(name.clone()).or_default();
        stats.dialogue_lines += 1;
        stats.words += words;
    }
}
