use screenplay_workspace::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "screenplay.config.json";

/// Screenplay project configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Session timing and history settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Directory holding one JSON file per project
    #[serde(default = "default_projects_dir")]
    pub projects_dir: String,
}

fn default_projects_dir() -> String {
    "projects".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the projects directory
    pub fn get_projects_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.projects_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            projects_dir: default_projects_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "editor": { "undoStackLimit": 20, "analyticsDebounce": 250 },
            "projectsDir": "scripts"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.projects_dir, "scripts");
        assert_eq!(config.editor.undo_stack_limit, 20);
        assert_eq!(config.editor.analytics_debounce, 250);
        assert_eq!(config.editor.history_debounce, 1_000);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.projects_dir, "projects");
        assert_eq!(config.editor, EditorConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{"editor": {"autoSaveInterval": 5000}}"#,
        )
        .unwrap();

        let cwd = dir.path().display().to_string();
        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.editor.auto_save_interval, 5_000);
        assert_eq!(config.get_projects_dir(&cwd), dir.path().join("projects"));
    }
}
