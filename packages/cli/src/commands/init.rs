use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screenplay_workspace::EditorConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for saved projects
    #[arg(short, long, default_value = "projects")]
    pub projects_dir: String,

    /// Undo levels kept per session
    #[arg(long, default_value_t = 50)]
    pub undo_limit: usize,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing screenplay project...".bright_blue().bold()
    );

    let projects_dir = PathBuf::from(cwd).join(&args.projects_dir);
    if !projects_dir.exists() {
        fs::create_dir_all(&projects_dir)?;
        println!("  {} Created {}/", "✓".green(), args.projects_dir);
    }

    let config = Config {
        editor: EditorConfig {
            undo_stack_limit: args.undo_limit,
            ..EditorConfig::default()
        },
        projects_dir: args.projects_dir.clone(),
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: screenplay import draft.txt --title \"My Script\"");
    println!("  2. Run: screenplay projects");
    println!("  3. Run: screenplay analyze {}/<id>.json", args.projects_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let args = InitArgs {
            projects_dir: "scripts".to_string(),
            undo_limit: 20,
            force: false,
        };
        init(args, &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.projects_dir, "scripts");
        assert_eq!(config.editor.undo_stack_limit, 20);
        assert!(dir.path().join("scripts").is_dir());

        // Without --force the existing file is kept
        let args = InitArgs {
            projects_dir: "other".to_string(),
            undo_limit: 5,
            force: false,
        };
        init(args, &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().projects_dir, "scripts");
    }
}
