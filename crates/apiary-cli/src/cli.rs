//! CLI argument definitions using clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Apiary: deterministic word-curation and daily-puzzle pipeline
#[derive(Parser)]
#[command(name = "apiary")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Curate the raw corpus into a dictionary artifact
    Dictionary {
        /// Directory source paths in the policy resolve against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Policy file (default: <root>/data/raw/policy.json)
        #[arg(long)]
        policy: Option<PathBuf>,

        /// Allow-list file (default: <root>/data/raw/allowlist.txt)
        #[arg(long)]
        allow: Option<PathBuf>,

        /// Block-list file (default: <root>/data/raw/blocklist.txt)
        #[arg(long)]
        block: Option<PathBuf>,

        /// Output dictionary path (default: <root>/data/dictionary-v1.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output metrics path (default: <root>/data/dictionary-v1-meta.json)
        #[arg(long)]
        metrics: Option<PathBuf>,
    },

    /// Generate and schedule daily puzzles from a dictionary artifact
    Puzzles {
        /// Directory default paths resolve against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Dictionary artifact (default: <root>/data/dictionary-v1.json)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Output schedule path (default: <root>/data/puzzles-v1.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// First puzzle date, ISO form (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of puzzles to publish
        #[arg(long, default_value_t = apiary::DEFAULT_PUZZLE_COUNT)]
        count: usize,
    },

    /// Check both artifacts against every pipeline invariant
    Validate {
        /// Directory default paths resolve against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Dictionary artifact (default: <root>/data/dictionary-v1.json)
        #[arg(long)]
        dictionary: Option<PathBuf>,

        /// Schedule artifact (default: <root>/data/puzzles-v1.json)
        #[arg(long)]
        puzzles: Option<PathBuf>,

        /// Policy file (default: <root>/data/raw/policy.json)
        #[arg(long)]
        policy: Option<PathBuf>,
    },
}
