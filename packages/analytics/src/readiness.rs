use crate::stats::{AnalyticsSnapshot, ChecklistItem, Readiness};

pub const MIN_SCENES: usize = 10;
pub const MIN_CHARACTERS: usize = 2;

/// Evaluate the readiness checklist against a finished analytics pass
pub fn assess(snapshot: &AnalyticsSnapshot) -> Readiness {
    let checklist = vec![
        ChecklistItem {
            item: format!("Contains at least {} scenes", MIN_SCENES),
            status: snapshot.scene_count >= MIN_SCENES,
        },
        ChecklistItem {
            item: format!("Contains at least {} characters", MIN_CHARACTERS),
            status: snapshot.character_stats.len() >= MIN_CHARACTERS,
        },
    ];

    Readiness {
        score: score(&checklist),
        checklist,
    }
}

fn score(checklist: &[ChecklistItem]) -> u32 {
    if checklist.is_empty() {
        return 0;
    }
    let passed = checklist.iter().filter(|item| item.status).count();
    ((passed as f64 / checklist.len() as f64) * 100.0).round() as u32
}
