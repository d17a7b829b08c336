//! Puzzle data model, candidate generation, and scheduling.

mod candidate;
pub mod ranks;
mod schedule;

pub use candidate::{Candidate, CandidateGenerator, GeneratorConfig};
pub use schedule::{select_schedule, ScheduleArtifact, DEFAULT_PUZZLE_COUNT};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One published daily puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Equal to `date` by contract.
    pub id: String,
    /// ISO calendar date the puzzle is played on.
    pub date: String,
    /// The letter every accepted word must contain.
    pub center_letter: char,
    /// The six remaining letters, sorted.
    pub outer_letters: Vec<char>,
    /// Version of the dictionary artifact the puzzle was derived from.
    pub dictionary_version: String,
    /// Every playable word, sorted ascending.
    pub valid_words: Vec<String>,
    /// Words using all seven letters, sorted ascending.
    pub pangrams: Vec<String>,
    /// Maximum achievable score under the scoring policy.
    pub max_score: u32,
    /// Cumulative score required per rank, in ladder order.
    pub rank_thresholds: IndexMap<String, u32>,
}

impl Puzzle {
    /// All seven letters of the puzzle: center first, then outers.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        std::iter::once(self.center_letter).chain(self.outer_letters.iter().copied())
    }
}
