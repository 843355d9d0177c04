use super::load_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use screenplay_document::{search as search_document, FormatKey};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Script or saved project to search
    pub input: PathBuf,

    /// Case-insensitive text to find
    pub query: String,

    /// Only match blocks of this format (e.g. character, dialogue)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print hits as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn search(args: SearchArgs, _cwd: &str) -> Result<()> {
    let filter = args.format.as_deref().map(FormatKey::lookup).transpose()?;
    let document = load_document(&args.input)?;
    let hits = search_document(&document, &args.query, filter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{} No matches for \"{}\"", "⚠️".yellow(), args.query);
        return Ok(());
    }

    for hit in &hits {
        println!(
            "  {:>5}  {:<14} {}",
            hit.line_number.to_string().dimmed(),
            hit.format.key().cyan(),
            hit.text
        );
    }
    println!();
    println!("{} {} matches", "✓".green(), hits.len());

    Ok(())
}
