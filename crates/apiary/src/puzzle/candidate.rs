//! Candidate enumeration: every 7-letter group seen in a long word, with
//! every choice of center letter.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexSet;

use crate::puzzle::ranks;
use crate::scoring::ScoringPolicy;

/// Default minimum playable words per candidate.
pub const DEFAULT_MIN_WORDS: usize = 12;

/// Default minimum pangrams per candidate.
pub const DEFAULT_MIN_PANGRAMS: usize = 1;

/// Generator thresholds and the scoring policy candidates are scored with.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Candidates with fewer playable words are discarded.
    pub min_words: usize,
    /// Candidates with fewer pangrams are discarded.
    pub min_pangrams: usize,
    /// Shared scoring rule.
    pub scoring: ScoringPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            min_pangrams: DEFAULT_MIN_PANGRAMS,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// A provisional puzzle: one 7-letter group with one chosen center letter,
/// before ranking and date assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The group's sorted distinct letters.
    pub signature: String,
    pub center_letter: char,
    /// The other six letters, sorted.
    pub outer_letters: Vec<char>,
    /// Playable words, sorted ascending.
    pub valid_words: Vec<String>,
    /// Pangrams, sorted ascending.
    pub pangrams: Vec<String>,
    pub max_score: u32,
    pub rank_thresholds: indexmap::IndexMap<String, u32>,
    /// Ranking heuristic, never persisted.
    pub quality: u32,
}

/// Enumerates puzzle candidates from a dictionary word list.
pub struct CandidateGenerator {
    config: GeneratorConfig,
}

impl CandidateGenerator {
    /// Generator with default thresholds and scoring.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    /// Generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Enumerate, score, and rank every viable candidate.
    ///
    /// Output order is deterministic for a fixed word list: candidates
    /// sort by descending quality, ties broken by encounter order
    /// (signatures in first-seen order, centers in signature order).
    pub fn generate(&self, words: &[String]) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for signature in seven_letter_signatures(words) {
            for center in signature.chars() {
                if let Some(candidate) = self.build(&signature, center, words) {
                    candidates.push(candidate);
                }
            }
        }

        candidates.sort_by(|a, b| b.quality.cmp(&a.quality));
        dedup_by_core(candidates)
    }

    fn build(&self, signature: &str, center: char, words: &[String]) -> Option<Candidate> {
        let mut valid_words: Vec<String> = words
            .iter()
            .filter(|word| word.contains(center) && uses_only(word, signature))
            .cloned()
            .collect();
        valid_words.sort();

        let mut pangrams: Vec<String> = valid_words
            .iter()
            .filter(|word| distinct_letters(word).len() == signature.len())
            .cloned()
            .collect();
        pangrams.sort();

        if valid_words.len() < self.config.min_words || pangrams.len() < self.config.min_pangrams {
            return None;
        }

        let max_score = self.config.scoring.max_score(&valid_words, &pangrams);
        let quality = max_score + 3 * valid_words.len() as u32 + 10 * pangrams.len() as u32;
        let outer_letters: Vec<char> = signature.chars().filter(|&c| c != center).collect();

        Some(Candidate {
            signature: signature.to_string(),
            center_letter: center,
            outer_letters,
            valid_words,
            pangrams,
            max_score,
            rank_thresholds: ranks::rank_thresholds(max_score),
            quality,
        })
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted-letter signatures of every word with exactly 7 distinct letters,
/// in first-encounter order.
fn seven_letter_signatures(words: &[String]) -> IndexSet<String> {
    let mut signatures = IndexSet::new();
    for word in words {
        if word.len() < 7 {
            continue;
        }
        let letters = distinct_letters(word);
        if letters.len() != 7 {
            continue;
        }
        signatures.insert(letters.into_iter().collect::<String>());
    }
    signatures
}

fn distinct_letters(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

fn uses_only(word: &str, signature: &str) -> bool {
    word.chars().all(|c| signature.contains(c))
}

/// Keep the first candidate for each `(signature, center)` pair. Unique by
/// construction; guards against any upstream duplication.
fn dedup_by_core(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert((candidate.signature.clone(), candidate.center_letter)))
        .collect()
}
