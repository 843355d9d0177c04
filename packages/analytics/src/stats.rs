use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived statistics for one document, recomputed wholesale on every run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub word_count: usize,
    pub char_count: usize,
    /// Rough estimate: 55 blocks per page, at least one page
    pub page_count: usize,
    pub scene_count: usize,
    /// Keyed by normalized character name
    pub character_stats: BTreeMap<String, CharacterStats>,
    pub scene_time_stats: SceneTimeStats,
    pub scene_location_stats: SceneLocationStats,
    pub readiness: Readiness,
    /// Per-scene breakdown in reading order
    pub scenes: Vec<SceneSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    pub appearances: usize,
    pub dialogue_lines: usize,
    pub words: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneTimeStats {
    pub day: usize,
    pub night: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneLocationStats {
    pub int: usize,
    pub ext: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneLocation {
    Int,
    Ext,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneTime {
    Day,
    Night,
    Other,
}

impl SceneLocation {
    /// `INT.` wins over `EXT.` when a heading carries both
    pub fn classify(upper_heading: &str) -> Self {
        if upper_heading.contains("INT.") {
            Self::Int
        } else if upper_heading.contains("EXT.") {
            Self::Ext
        } else {
            Self::Other
        }
    }
}

impl SceneTime {
    /// `DAY` wins over `NIGHT` when a heading carries both
    pub fn classify(upper_heading: &str) -> Self {
        if upper_heading.contains("DAY") {
            Self::Day
        } else if upper_heading.contains("NIGHT") {
            Self::Night
        } else {
            Self::Other
        }
    }
}

impl SceneTimeStats {
    pub fn record(&mut self, time: SceneTime) {
        match time {
            SceneTime::Day => self.day += 1,
            SceneTime::Night => self.night += 1,
            SceneTime::Other => self.other += 1,
        }
    }
}

impl SceneLocationStats {
    pub fn record(&mut self, location: SceneLocation) {
        match location {
            SceneLocation::Int => self.int += 1,
            SceneLocation::Ext => self.ext += 1,
            SceneLocation::Other => self.other += 1,
        }
    }
}

/// One scene, from its heading up to the next heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSummary {
    /// 1-indexed position of the heading block
    pub line_number: usize,
    pub heading: String,
    pub location: SceneLocation,
    pub time: SceneTime,
    /// Blocks in the scene, heading included
    pub block_count: usize,
    /// Words in the scene, heading included
    pub word_count: usize,
}

/// Completeness checklist with a percentage score
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Readiness {
    pub score: u32,
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub item: String,
    pub status: bool,
}
