//! Scoring policy shared by puzzle generation and validation.
//!
//! Exactly one implementation of the scoring rule exists in this crate.
//! The generator and the validator both call it; recomputed scores must
//! match stored scores bit-for-bit.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Default minimum playable word length: such words score a single point.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

/// Default bonus for a word that uses all seven letters.
pub const DEFAULT_PANGRAM_BONUS: u32 = 7;

/// The scoring rule as configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringPolicy {
    /// Words of exactly this length score one point; longer words score
    /// their length.
    pub min_word_length: usize,
    /// Added on top of the base points for each pangram.
    pub pangram_bonus: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            pangram_bonus: DEFAULT_PANGRAM_BONUS,
        }
    }
}

impl ScoringPolicy {
    /// Points for a single accepted word.
    pub fn word_score(&self, word: &str, is_pangram: bool) -> u32 {
        let length = word.chars().count();
        let base = if length == self.min_word_length {
            1
        } else {
            length as u32
        };
        let bonus = if is_pangram { self.pangram_bonus } else { 0 };
        base + bonus
    }

    /// Maximum achievable score over an accepted word set.
    ///
    /// Pure and order-independent: any permutation of `words` yields the
    /// same total.
    pub fn max_score(&self, words: &[String], pangrams: &[String]) -> u32 {
        let pangram_set: HashSet<&str> = pangrams.iter().map(String::as_str).collect();
        words
            .iter()
            .map(|word| self.word_score(word, pangram_set.contains(word.as_str())))
            .sum()
    }
}
