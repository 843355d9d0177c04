use super::load_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screenplay_workspace::{FileStore, ProjectManager};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Plain text, HTML or JSON script to import
    pub input: PathBuf,

    /// Project title (defaults to the file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Author recorded in the project metadata
    #[arg(short, long, default_value = "")]
    pub author: String,

    /// Print the serialized document instead of saving a project
    #[arg(long)]
    pub stdout: bool,
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let document = load_document(&args.input)?;

    if args.stdout {
        println!("{}", document.serialize());
        return Ok(());
    }

    let config = Config::load(cwd)?;
    let manager = ProjectManager::new(FileStore::new(config.get_projects_dir(cwd)));

    let title = args.title.unwrap_or_else(|| {
        args.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let project = manager.create_with(&title, &args.author, &document)?;

    println!(
        "{} Imported {} ({} blocks)",
        "✓".green(),
        args.input.display(),
        document.len()
    );
    println!("   Project: {} {}", project.id.bright_white(), project.title.dimmed());

    Ok(())
}
