use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screenplay_workspace::{FileStore, ProjectManager};

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Rename a project: --rename <ID> <TITLE>
    #[arg(long, num_args = 2, value_names = ["ID", "TITLE"])]
    pub rename: Option<Vec<String>>,

    /// Delete the project with this id
    #[arg(long, conflicts_with = "rename")]
    pub delete: Option<String>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn projects(args: ProjectsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let manager = ProjectManager::new(FileStore::new(config.get_projects_dir(cwd)));

    if let Some(id) = &args.delete {
        if manager.delete(id)? {
            println!("{} Deleted {}", "✓".green(), id);
        } else {
            println!("{} No project {}", "⚠️".yellow(), id);
        }
        return Ok(());
    }

    if let Some([id, title]) = args.rename.as_deref() {
        let project = manager.rename(id, title)?;
        println!("{} {} is now \"{}\"", "✓".green(), project.id, project.title);
        return Ok(());
    }

    let projects = manager.list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("{}", "No projects yet. Run: screenplay import <file>".dimmed());
        return Ok(());
    }

    for project in &projects {
        println!(
            "  {}  {:<30} {}",
            project.id.bright_white(),
            project.title,
            project.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }

    Ok(())
}
