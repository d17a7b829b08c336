//! Dictionary command - curate the raw corpus into a dictionary artifact.

use std::path::PathBuf;

use colored::Colorize;

use apiary::{corpus, Curator, FrequencyTable, Policy};

pub fn run(
    root: PathBuf,
    policy: Option<PathBuf>,
    allow: Option<PathBuf>,
    block: Option<PathBuf>,
    output: Option<PathBuf>,
    metrics: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let policy_path = policy.unwrap_or_else(|| root.join("data/raw/policy.json"));
    let allow_path = allow.unwrap_or_else(|| root.join("data/raw/allowlist.txt"));
    let block_path = block.unwrap_or_else(|| root.join("data/raw/blocklist.txt"));
    let output_path = output.unwrap_or_else(|| root.join("data/dictionary-v1.json"));
    let metrics_path = metrics.unwrap_or_else(|| root.join("data/dictionary-v1-meta.json"));

    println!(
        "{} {}",
        "Curating".cyan().bold(),
        policy_path.display().to_string().white()
    );

    let policy = Policy::load(&policy_path)?;
    let allow_words = corpus::load_word_list(&allow_path)?;
    let block_words = corpus::load_word_list(&block_path)?;
    let loaded = corpus::load_sources(&policy.sources(), &root)?;
    let frequency = FrequencyTable::load(&policy.frequency, &root)?;

    let (dictionary, metrics_data) =
        Curator::new().curate(&loaded, &allow_words, &block_words, &policy, &frequency)?;

    if verbose {
        println!();
        println!("{}", "Sources:".yellow().bold());
        for (path, count) in &metrics_data.source_word_counts {
            println!("  {:40} {} words", path, count);
        }
        println!();
        println!("{}", "Removals:".yellow().bold());
        let counts = &metrics_data.counts;
        println!("  frequency          {}", counts.removed_by_frequency);
        println!("  missing frequency  {}", counts.removed_missing_frequency);
        println!("  profanity          {}", counts.removed_profanity);
        println!("  geo terms          {}", counts.removed_geo_terms);
        println!("  demonyms           {}", counts.removed_demonyms);
        println!("  shape/abbreviation {}", counts.removed_abbreviations);
        println!("  rare               {}", counts.removed_rare);
        println!("  blocklist          {}", counts.blocklist_removed);
        println!();
        println!("{}", "Additions:".yellow().bold());
        println!("  inflections        {}", counts.inflections_added);
        println!("  allowlist          {}", counts.allowlist_added);
        println!();
    }

    dictionary.save(&output_path)?;
    metrics_data.save(&metrics_path)?;

    println!(
        "{} words={} {}",
        "Dictionary build complete.".green().bold(),
        dictionary.words.len().to_string().white().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
