use super::load_document;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use screenplay_document::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Script or saved project to export
    pub input: PathBuf,

    /// Target format (text, markup, json)
    #[arg(short, long, default_value = "text")]
    pub target: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn export(args: ExportArgs, _cwd: &str) -> Result<()> {
    let document = load_document(&args.input)?;
    let output = render(&document, &args.target)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, output)?;
            println!(
                "{} {} → {}",
                "✓".green(),
                args.input.display(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn render(document: &Document, target: &str) -> Result<String> {
    match target {
        "text" | "txt" => Ok(document.plain_text()),
        "markup" | "html" => Ok(document.to_markup()),
        "json" => Ok(document.serialize()),
        other => Err(anyhow!("Unknown target: {}", other)),
    }
}
