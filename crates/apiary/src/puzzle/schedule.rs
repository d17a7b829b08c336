//! Puzzle selection, date assignment, and idempotent artifact writes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::artifact::{write_json_pretty, ARTIFACT_VERSION};
use crate::error::{ApiaryError, Result};
use crate::puzzle::{Candidate, Puzzle};

/// Default number of puzzles published per run.
pub const DEFAULT_PUZZLE_COUNT: usize = 60;

/// The published puzzle schedule artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleArtifact {
    /// Artifact format version.
    pub version: String,
    /// When this run produced the artifact. Excluded from the idempotence
    /// comparison.
    pub generated_at: DateTime<Utc>,
    /// Version of the dictionary the puzzles were derived from.
    pub source_dictionary_version: String,
    pub puzzles: Vec<Puzzle>,
}

impl ScheduleArtifact {
    /// Load a schedule artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        crate::artifact::read_json(path.as_ref())
    }

    /// Canonical projection used for content comparison and diffing:
    /// everything except the generation timestamp.
    pub fn comparable(&self) -> serde_json::Value {
        json!({
            "version": self.version,
            "sourceDictionaryVersion": self.source_dictionary_version,
            "puzzles": self.puzzles,
        })
    }

    /// Write the artifact unless an existing file at `path` already holds
    /// identical content (ignoring `generatedAt`). Returns whether a write
    /// happened. A missing prior artifact is a first run, not an error;
    /// any other read failure is fatal.
    pub fn save_if_changed(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(existing) => {
                let existing: ScheduleArtifact = serde_json::from_str(&existing)?;
                if existing.comparable() == self.comparable() {
                    return Ok(false);
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(ApiaryError::io(path, e)),
        }

        write_json_pretty(path, self)?;
        Ok(true)
    }
}

/// Select the top `count` candidates and assign consecutive dates starting
/// at `start`. Candidates must already be in quality order.
pub fn select_schedule(
    candidates: &[Candidate],
    dictionary_version: &str,
    start: NaiveDate,
    count: usize,
) -> Result<ScheduleArtifact> {
    let mut puzzles = Vec::new();

    for (offset, candidate) in candidates.iter().take(count).enumerate() {
        let date = start
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| {
                ApiaryError::Config(format!("schedule date overflow at offset {offset}"))
            })?;
        let date = date.format("%Y-%m-%d").to_string();

        puzzles.push(Puzzle {
            id: date.clone(),
            date,
            center_letter: candidate.center_letter,
            outer_letters: candidate.outer_letters.clone(),
            dictionary_version: dictionary_version.to_string(),
            valid_words: candidate.valid_words.clone(),
            pangrams: candidate.pangrams.clone(),
            max_score: candidate.max_score,
            rank_thresholds: candidate.rank_thresholds.clone(),
        });
    }

    Ok(ScheduleArtifact {
        version: ARTIFACT_VERSION.to_string(),
        generated_at: Utc::now(),
        source_dictionary_version: dictionary_version.to_string(),
        puzzles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{CandidateGenerator, GeneratorConfig};
    use crate::scoring::ScoringPolicy;

    fn candidates() -> Vec<Candidate> {
        let words: Vec<String> = ["central", "alert", "alter", "acre", "crane", "recant"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        CandidateGenerator::with_config(GeneratorConfig {
            min_words: 1,
            min_pangrams: 1,
            scoring: ScoringPolicy::default(),
        })
        .generate(&words)
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    #[test]
    fn test_consecutive_dates() {
        let schedule = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        assert_eq!(schedule.puzzles.len(), 2);
        assert_eq!(schedule.puzzles[0].date, "2026-02-10");
        assert_eq!(schedule.puzzles[1].date, "2026-02-11");
        assert_eq!(schedule.puzzles[0].id, schedule.puzzles[0].date);
    }

    #[test]
    fn test_month_boundary() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let schedule = select_schedule(&candidates(), "v1", start, 2).unwrap();
        assert_eq!(schedule.puzzles[1].date, "2026-02-01");
    }

    #[test]
    fn test_count_caps_selection() {
        let all = candidates();
        let schedule = select_schedule(&all, "v1", start(), 3).unwrap();
        assert_eq!(schedule.puzzles.len(), 3.min(all.len()));
    }

    #[test]
    fn test_comparable_ignores_timestamp() {
        let mut a = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        let b = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        a.generated_at = a.generated_at + chrono::Duration::hours(5);
        assert_eq!(a.comparable(), b.comparable());
    }

    #[test]
    fn test_save_if_changed_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles-v1.json");

        let schedule = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        assert!(schedule.save_if_changed(&path).unwrap());

        // Identical content, later timestamp: the write is skipped and the
        // file bytes stay untouched.
        let mut rerun = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        rerun.generated_at = rerun.generated_at + chrono::Duration::hours(1);
        let before = fs::read_to_string(&path).unwrap();
        assert!(!rerun.save_if_changed(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);

        // Different content supersedes the artifact.
        let moved = select_schedule(&candidates(), "v1", start() + chrono::Duration::days(1), 2)
            .unwrap();
        assert!(moved.save_if_changed(&path).unwrap());
    }

    #[test]
    fn test_save_if_changed_corrupt_existing_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles-v1.json");
        fs::write(&path, "not json").unwrap();

        let schedule = select_schedule(&candidates(), "v1", start(), 1).unwrap();
        assert!(schedule.save_if_changed(&path).is_err());
        // The prior artifact is preserved on failure.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("puzzles-v1.json");
        let schedule = select_schedule(&candidates(), "v1", start(), 2).unwrap();
        schedule.save_if_changed(&path).unwrap();

        let loaded = ScheduleArtifact::load(&path).unwrap();
        assert_eq!(loaded.puzzles, schedule.puzzles);
        assert_eq!(loaded.version, ARTIFACT_VERSION);
    }
}
