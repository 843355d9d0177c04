//! Editor timing and history settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings under the `editor` key of the project config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Undo levels kept per session
    pub undo_stack_limit: usize,

    /// Autosave period in milliseconds
    pub auto_save_interval: u64,

    /// Quiet period before analytics recompute, in milliseconds
    pub analytics_debounce: u64,

    /// Quiet period before a history snapshot, in milliseconds
    pub history_debounce: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_stack_limit: 50,
            auto_save_interval: 30_000,
            analytics_debounce: 500,
            history_debounce: 1_000,
        }
    }
}

impl EditorConfig {
    pub fn auto_save_period(&self) -> Duration {
        Duration::from_millis(self.auto_save_interval.max(1))
    }

    pub fn analytics_window(&self) -> Duration {
        Duration::from_millis(self.analytics_debounce)
    }

    pub fn history_window(&self) -> Duration {
        Duration::from_millis(self.history_debounce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"undoStackLimit": 10}"#).unwrap();

        assert_eq!(config.undo_stack_limit, 10);
        assert_eq!(config.analytics_window(), Duration::from_millis(500));
        assert_eq!(config.history_window(), Duration::from_secs(1));
        assert_eq!(config.auto_save_period(), Duration::from_secs(30));
    }
}
