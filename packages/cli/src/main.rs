mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    analyze, export, import, init, lint, projects, search, AnalyzeArgs, ExportArgs, ImportArgs,
    InitArgs, LintArgs, ProjectsArgs, SearchArgs,
};

/// Screenplay CLI - structured script editing from the terminal
#[derive(Parser, Debug)]
#[command(name = "screenplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new screenplay project directory
    Init(InitArgs),

    /// Import a text, HTML or JSON script as a project
    Import(ImportArgs),

    /// Print statistics and the readiness checklist
    Analyze(AnalyzeArgs),

    /// Check script structure
    Lint(LintArgs),

    /// Find blocks containing a phrase
    Search(SearchArgs),

    /// Convert a script to text, markup or JSON
    Export(ExportArgs),

    /// List, rename or delete saved projects
    Projects(ProjectsArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Analyze(args) => analyze(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Search(args) => search(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Projects(args) => projects(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
