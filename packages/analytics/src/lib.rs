//! # Screenplay Analytics
//!
//! Derives statistics from a [`Document`](screenplay_document::Document) in a
//! single pass. Results are disposable and recomputed wholesale on every run.

mod character;
mod engine;
mod readiness;
mod stats;

pub use character::{count_words, normalize_character_name};
pub use engine::{analyze, estimate_page_count, BLOCKS_PER_PAGE};
pub use readiness::{assess as assess_readiness, MIN_CHARACTERS, MIN_SCENES};
pub use stats::{
    AnalyticsSnapshot, CharacterStats, ChecklistItem, Readiness, SceneLocation,
    SceneLocationStats, SceneSummary, SceneTime, SceneTimeStats,
};
