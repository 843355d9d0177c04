use super::load_document;
use crate::config::DEFAULT_CONFIG_NAME;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screenplay_linter::{validate, Severity, ValidationReport};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SCRIPT_EXTENSIONS: &[&str] = &["json", "html", "htm"];

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Script file or directory to check
    pub input: PathBuf,

    /// Show all diagnostics including low severity
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Issue counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    total: usize,
    high: usize,
    medium: usize,
}

impl Tally {
    fn add(&mut self, other: Tally) {
        self.total += other.total;
        self.high += other.high;
        self.medium += other.medium;
    }

    fn of(report: &ValidationReport) -> Self {
        Self {
            total: report.len(),
            high: report.count(Severity::High),
            medium: report.count(Severity::Medium),
        }
    }
}

pub fn lint(args: LintArgs, _cwd: &str) -> Result<()> {
    println!("🔍 {} Screenplay Validator", "Starting".green().bold());
    println!("   Input: {}", args.input.display());
    println!();

    let mut tally = Tally::default();
    let mut files_checked = 0;

    if args.input.is_file() {
        tally.add(lint_file(&args.input, args.verbose, &args.format)?);
        files_checked += 1;
    } else if args.input.is_dir() {
        let files = find_script_files(&args.input);
        println!("   Found {} script files", files.len());
        println!();

        for file in files {
            tally.add(lint_file(&file, args.verbose, &args.format)?);
            files_checked += 1;
        }
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    }

    println!();
    println!(
        "✨ {} Validation complete!",
        if tally.high > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files_checked);
    println!("   Total issues: {}", tally.total);

    if tally.high > 0 {
        println!("   {} {}", "High:".red(), tally.high);
    }
    if tally.medium > 0 {
        println!("   {} {}", "Medium:".yellow(), tally.medium);
    }
    if tally.high == 0 && tally.medium == 0 {
        println!("   {} No structural problems found!", "✓".green());
    }

    if tally.high > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn lint_file(file_path: &Path, verbose: bool, format: &str) -> Result<Tally> {
    let document = match load_document(file_path) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{} Failed to load {}: {}", "✗".red(), file_path.display(), err);
            return Ok(Tally {
                total: 0,
                high: 1,
                medium: 0,
            });
        }
    };

    let report = validate(&document);

    if report.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), file_path.display());
        }
        return Ok(Tally::default());
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", file_path.display());

        for issue in report.iter() {
            if !verbose && issue.severity == Severity::Low {
                continue;
            }

            let severity = match issue.severity {
                Severity::High => "high".red().bold(),
                Severity::Medium => "medium".yellow().bold(),
                Severity::Low => "low".blue().bold(),
            };

            println!(
                "  {}:{} [{}] {}",
                severity, issue.line_number, issue.rule, issue.message
            );

            if let Some(suggestion) = &issue.suggestion {
                println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
            }
        }

        println!();
    }

    Ok(Tally::of(&report))
}

fn find_script_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && path.file_name().map_or(true, |name| name != DEFAULT_CONFIG_NAME)
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map_or(false, |ext| SCRIPT_EXTENSIONS.contains(&ext))
        })
        .collect()
}
