//! Validate command - check both artifacts against every invariant.

use std::path::PathBuf;

use colored::Colorize;

use apiary::{validate, Dictionary, Policy, ScheduleArtifact, ScoringPolicy, ValidatorConfig};

pub fn run(
    root: PathBuf,
    dictionary: Option<PathBuf>,
    puzzles: Option<PathBuf>,
    policy: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary_path = dictionary.unwrap_or_else(|| root.join("data/dictionary-v1.json"));
    let puzzles_path = puzzles.unwrap_or_else(|| root.join("data/puzzles-v1.json"));
    let policy_path = policy.unwrap_or_else(|| root.join("data/raw/policy.json"));

    println!(
        "{} {} + {}",
        "Validating".cyan().bold(),
        dictionary_path.display().to_string().white(),
        puzzles_path.display().to_string().white()
    );

    let dictionary = Dictionary::load(&dictionary_path)?;
    let schedule = ScheduleArtifact::load(&puzzles_path)?;
    let policy = Policy::load(&policy_path)?;

    let config = ValidatorConfig {
        min_word_length: policy.minimum_length,
        scoring: ScoringPolicy::default(),
        ..ValidatorConfig::default()
    };

    if verbose {
        println!(
            "  dictionary version={} words={}",
            dictionary.version,
            dictionary.words.len()
        );
        println!(
            "  schedule version={} puzzles={}",
            schedule.version,
            schedule.puzzles.len()
        );
    }

    let summary = validate(&dictionary, &schedule, &config)?;

    println!(
        "{} dictionaryWords={} puzzles={} minLength={}",
        "Pipeline validation passed:".green().bold(),
        summary.dictionary_words.to_string().white().bold(),
        summary.puzzles.to_string().white().bold(),
        summary.min_word_length
    );

    Ok(())
}
