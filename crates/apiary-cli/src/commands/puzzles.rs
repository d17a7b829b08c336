//! Puzzles command - generate candidates and publish the daily schedule.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use colored::Colorize;

use apiary::{select_schedule, CandidateGenerator, Dictionary};

pub fn run(
    root: PathBuf,
    dictionary: Option<PathBuf>,
    output: Option<PathBuf>,
    start: Option<NaiveDate>,
    count: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if count == 0 {
        return Err("--count must be a positive integer".into());
    }

    let dictionary_path = dictionary.unwrap_or_else(|| root.join("data/dictionary-v1.json"));
    let output_path = output.unwrap_or_else(|| root.join("data/puzzles-v1.json"));

    println!(
        "{} {}",
        "Generating".cyan().bold(),
        dictionary_path.display().to_string().white()
    );

    let dictionary = Dictionary::load(&dictionary_path)?;
    let candidates = CandidateGenerator::new().generate(&dictionary.words);

    if verbose {
        println!();
        for candidate in candidates.iter().take(10) {
            println!(
                "  {} center={} words={:4} pangrams={:2} quality={}",
                candidate.signature,
                candidate.center_letter,
                candidate.valid_words.len(),
                candidate.pangrams.len(),
                candidate.quality
            );
        }
        println!();
    }

    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let schedule = select_schedule(&candidates, &dictionary.version, start, count)?;
    let written = schedule.save_if_changed(&output_path)?;

    if !written {
        println!("{}", "Puzzle build skipped write (no content changes).".yellow());
    }

    println!(
        "{} candidates={} published={} {}",
        "Puzzle build complete.".green().bold(),
        candidates.len().to_string().white().bold(),
        schedule.puzzles.len().to_string().white().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
