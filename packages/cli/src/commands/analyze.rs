use super::load_document;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use screenplay_analytics::{analyze as analyze_document, AnalyticsSnapshot};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Script or saved project to analyze
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn analyze(args: AnalyzeArgs, _cwd: &str) -> Result<()> {
    let document = load_document(&args.input)?;
    let snapshot = analyze_document(&document);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        "text" => print_report(&snapshot),
        other => return Err(anyhow!("Unknown output format: {}", other)),
    }

    Ok(())
}

fn print_report(snapshot: &AnalyticsSnapshot) {
    println!("{}", "📊 Script statistics".bright_blue().bold());
    println!("   Words:  {}", snapshot.word_count);
    println!("   Chars:  {}", snapshot.char_count);
    println!("   Pages:  {}", snapshot.page_count);
    println!("   Scenes: {}", snapshot.scene_count);

    let locations = &snapshot.scene_location_stats;
    let times = &snapshot.scene_time_stats;
    println!(
        "   INT/EXT: {} / {} ({} other)",
        locations.int, locations.ext, locations.other
    );
    println!(
        "   DAY/NIGHT: {} / {} ({} other)",
        times.day, times.night, times.other
    );

    if !snapshot.character_stats.is_empty() {
        println!();
        println!("{}", "Characters".bold());
        let mut characters: Vec<_> = snapshot.character_stats.iter().collect();
        characters.sort_by(|a, b| b.1.dialogue_lines.cmp(&a.1.dialogue_lines).then(a.0.cmp(b.0)));
        for (name, stats) in characters {
            println!(
                "   {:<20} {} cues, {} lines, {} words",
                name, stats.appearances, stats.dialogue_lines, stats.words
            );
        }
    }

    println!();
    println!(
        "{} {}%",
        "Readiness".bold(),
        snapshot.readiness.score
    );
    for item in &snapshot.readiness.checklist {
        let mark = if item.status { "✓".green() } else { "✗".red() };
        println!("   {} {}", mark, item.item);
    }
}
