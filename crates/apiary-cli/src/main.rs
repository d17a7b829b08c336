//! Apiary CLI - word-curation and daily-puzzle pipeline.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dictionary {
            root,
            policy,
            allow,
            block,
            output,
            metrics,
        } => commands::dictionary::run(root, policy, allow, block, output, metrics, cli.verbose),

        Commands::Puzzles {
            root,
            dictionary,
            output,
            start,
            count,
        } => commands::puzzles::run(root, dictionary, output, start, count, cli.verbose),

        Commands::Validate {
            root,
            dictionary,
            puzzles,
            policy,
        } => commands::validate::run(root, dictionary, puzzles, policy, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
