//! Independent validation of the dictionary and schedule artifacts.
//!
//! The validator re-derives every invariant from the published files
//! alone. It is fail-fast: the first violation aborts the run with a
//! message naming the offending record and the broken invariant. There is
//! no severity grading and no partial acceptance.

use std::collections::HashSet;

use chrono::NaiveDate;
use regex::Regex;

use crate::artifact::{Dictionary, ARTIFACT_VERSION};
use crate::error::{ApiaryError, Result};
use crate::puzzle::ranks::RANK_LADDER;
use crate::puzzle::{Puzzle, ScheduleArtifact};
use crate::scoring::ScoringPolicy;

/// What the validator holds the artifacts to.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Expected artifact format version.
    pub artifact_version: String,
    /// Minimum word length from the curation policy.
    pub min_word_length: usize,
    /// The same scoring rule the generator used.
    pub scoring: ScoringPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            artifact_version: ARTIFACT_VERSION.to_string(),
            min_word_length: crate::policy::DEFAULT_MINIMUM_LENGTH,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Totals reported after a fully successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSummary {
    pub dictionary_words: usize,
    pub puzzles: usize,
    pub min_word_length: usize,
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ApiaryError::Validation(message()))
    }
}

fn is_lower_alpha(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}

fn is_sorted_unique(values: &[String]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Validate both artifacts against each other and the configuration.
pub fn validate(
    dictionary: &Dictionary,
    schedule: &ScheduleArtifact,
    config: &ValidatorConfig,
) -> Result<ValidationSummary> {
    let iso_date = Regex::new(r"^\d{4}-\d{2}-\d{2}$")?;

    check_dictionary(dictionary, config)?;

    ensure(schedule.version == config.artifact_version, || {
        format!(
            "expected puzzles version \"{}\"; got \"{}\"",
            config.artifact_version, schedule.version
        )
    })?;
    ensure(
        schedule.source_dictionary_version == dictionary.version,
        || "puzzles sourceDictionaryVersion must match dictionary version".to_string(),
    )?;
    ensure(!schedule.puzzles.is_empty(), || {
        "puzzles must not be empty".to_string()
    })?;

    let mut seen_ids = HashSet::new();
    for puzzle in &schedule.puzzles {
        ensure(seen_ids.insert(puzzle.id.as_str()), || {
            format!("puzzle ids must be unique; \"{}\" repeats", puzzle.id)
        })?;
    }

    let mut previous_date: Option<NaiveDate> = None;
    for (i, puzzle) in schedule.puzzles.iter().enumerate() {
        let date = check_puzzle(i, puzzle, dictionary, config, &iso_date)?;

        if let Some(previous) = previous_date {
            ensure((date - previous).num_days() == 1, || {
                format!("puzzle[{i}] date must be contiguous (+1 day) from previous puzzle")
            })?;
        }
        previous_date = Some(date);
    }

    Ok(ValidationSummary {
        dictionary_words: dictionary.words.len(),
        puzzles: schedule.puzzles.len(),
        min_word_length: config.min_word_length,
    })
}

fn check_dictionary(dictionary: &Dictionary, config: &ValidatorConfig) -> Result<()> {
    ensure(dictionary.version == config.artifact_version, || {
        format!(
            "expected dictionary version \"{}\"; got \"{}\"",
            config.artifact_version, dictionary.version
        )
    })?;
    ensure(is_sorted_unique(&dictionary.words), || {
        "dictionary words must be sorted and free of duplicates".to_string()
    })?;

    for word in &dictionary.words {
        ensure(is_lower_alpha(word), || {
            format!("dictionary word must be lowercase alpha: \"{word}\"")
        })?;
        ensure(word.len() >= config.min_word_length, || {
            format!(
                "dictionary word shorter than minimum length ({}): \"{word}\"",
                config.min_word_length
            )
        })?;
    }
    Ok(())
}

fn check_puzzle(
    i: usize,
    puzzle: &Puzzle,
    dictionary: &Dictionary,
    config: &ValidatorConfig,
    iso_date: &Regex,
) -> Result<NaiveDate> {
    ensure(iso_date.is_match(&puzzle.id), || {
        format!("puzzle[{i}] id must be an ISO date, got \"{}\"", puzzle.id)
    })?;
    ensure(iso_date.is_match(&puzzle.date), || {
        format!(
            "puzzle[{i}] date must be an ISO date, got \"{}\"",
            puzzle.date
        )
    })?;
    ensure(puzzle.id == puzzle.date, || {
        format!("puzzle[{i}] id must equal date")
    })?;

    let date = NaiveDate::parse_from_str(&puzzle.date, "%Y-%m-%d").map_err(|e| {
        ApiaryError::Validation(format!(
            "puzzle[{i}] date \"{}\" is not a real calendar date: {e}",
            puzzle.date
        ))
    })?;

    ensure(puzzle.center_letter.is_ascii_lowercase(), || {
        format!("puzzle[{i}] invalid centerLetter")
    })?;
    ensure(puzzle.outer_letters.len() == 6, || {
        format!("puzzle[{i}] outerLetters must have 6 letters")
    })?;
    let outer_set: HashSet<char> = puzzle.outer_letters.iter().copied().collect();
    ensure(outer_set.len() == puzzle.outer_letters.len(), || {
        format!("puzzle[{i}] outerLetters must be unique")
    })?;
    ensure(!outer_set.contains(&puzzle.center_letter), || {
        format!("puzzle[{i}] centerLetter cannot appear in outerLetters")
    })?;
    for &letter in &puzzle.outer_letters {
        ensure(letter.is_ascii_lowercase(), || {
            format!("puzzle[{i}] outerLetters must be single lowercase letters")
        })?;
    }

    let allowed: HashSet<char> = puzzle.letters().collect();
    ensure(allowed.len() == 7, || {
        format!("puzzle[{i}] must define exactly 7 unique letters")
    })?;

    ensure(is_sorted_unique(&puzzle.valid_words), || {
        format!("puzzle[{i}] validWords must be sorted and free of duplicates")
    })?;
    ensure(is_sorted_unique(&puzzle.pangrams), || {
        format!("puzzle[{i}] pangrams must be sorted and free of duplicates")
    })?;

    for word in &puzzle.valid_words {
        ensure(is_lower_alpha(word), || {
            format!("puzzle[{i}] validWords must be lowercase alpha: \"{word}\"")
        })?;
        ensure(word.len() >= config.min_word_length, || {
            format!("puzzle[{i}] valid word shorter than minimum length: \"{word}\"")
        })?;
        ensure(word.contains(puzzle.center_letter), || {
            format!("puzzle[{i}] valid word missing center letter: \"{word}\"")
        })?;
        ensure(word.chars().all(|c| allowed.contains(&c)), || {
            format!("puzzle[{i}] valid word uses disallowed letter: \"{word}\"")
        })?;
    }

    let valid_set: HashSet<&str> = puzzle.valid_words.iter().map(String::as_str).collect();
    for word in &puzzle.pangrams {
        ensure(valid_set.contains(word.as_str()), || {
            format!("puzzle[{i}] pangram missing from validWords: \"{word}\"")
        })?;
        let distinct: HashSet<char> = word.chars().collect();
        ensure(distinct == allowed, || {
            format!("puzzle[{i}] pangram does not use all 7 letters: \"{word}\"")
        })?;
    }

    ensure(puzzle.dictionary_version == dictionary.version, || {
        format!("puzzle[{i}] dictionaryVersion must match dictionary version")
    })?;

    let computed = config
        .scoring
        .max_score(&puzzle.valid_words, &puzzle.pangrams);
    ensure(puzzle.max_score == computed, || {
        format!(
            "puzzle[{i}] maxScore mismatch: expected {computed} got {}",
            puzzle.max_score
        )
    })?;

    check_rank_thresholds(i, puzzle)?;

    Ok(date)
}

fn check_rank_thresholds(i: usize, puzzle: &Puzzle) -> Result<()> {
    let thresholds = &puzzle.rank_thresholds;

    ensure(thresholds.len() == RANK_LADDER.len(), || {
        format!(
            "puzzle[{i}] rankThresholds must define {} ranks, got {}",
            RANK_LADDER.len(),
            thresholds.len()
        )
    })?;

    let mut previous: Option<u32> = None;
    for (position, &(key, _)) in RANK_LADDER.iter().enumerate() {
        let Some((stored_key, &value)) = thresholds.get_index(position) else {
            return Err(ApiaryError::Validation(format!(
                "puzzle[{i}] missing rank threshold \"{key}\""
            )));
        };
        ensure(stored_key == key, || {
            format!(
                "puzzle[{i}] rank thresholds out of order: expected \"{key}\" at position {position}, got \"{stored_key}\""
            )
        })?;
        ensure(previous.is_none_or(|p| value >= p), || {
            format!("puzzle[{i}] threshold \"{key}\" must be monotonically non-decreasing")
        })?;
        previous = Some(value);
    }

    ensure(thresholds["beginner"] == 0, || {
        format!("puzzle[{i}] beginner threshold must be 0")
    })?;
    ensure(thresholds["queenBee"] == puzzle.max_score, || {
        format!("puzzle[{i}] queenBee threshold must equal maxScore")
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::ranks::rank_thresholds;
    use chrono::Utc;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary {
            version: "v1".to_string(),
            strict: true,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn puzzle(date: &str) -> Puzzle {
        let valid_words: Vec<String> = ["acre", "alert", "alter", "central"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let pangrams = vec!["central".to_string()];
        let max_score = ScoringPolicy::default().max_score(&valid_words, &pangrams);
        Puzzle {
            id: date.to_string(),
            date: date.to_string(),
            center_letter: 'a',
            outer_letters: vec!['c', 'e', 'l', 'n', 'r', 't'],
            dictionary_version: "v1".to_string(),
            valid_words,
            pangrams,
            max_score,
            rank_thresholds: rank_thresholds(max_score),
        }
    }

    fn schedule(puzzles: Vec<Puzzle>) -> ScheduleArtifact {
        ScheduleArtifact {
            version: "v1".to_string(),
            generated_at: Utc::now(),
            source_dictionary_version: "v1".to_string(),
            puzzles,
        }
    }

    fn good_inputs() -> (Dictionary, ScheduleArtifact) {
        (
            dictionary(&["acre", "alert", "alter", "central"]),
            schedule(vec![puzzle("2026-02-10"), puzzle("2026-02-11")]),
        )
    }

    #[test]
    fn test_valid_artifacts_pass() {
        let (dict, sched) = good_inputs();
        let summary = validate(&dict, &sched, &ValidatorConfig::default()).unwrap();
        assert_eq!(summary.dictionary_words, 4);
        assert_eq!(summary.puzzles, 2);
    }

    #[test]
    fn test_unsorted_dictionary_rejected() {
        let (mut dict, sched) = good_inputs();
        dict.words.swap(0, 1);
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("sorted"));
    }

    #[test]
    fn test_center_in_outer_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[0].outer_letters[0] = 'a';
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err
            .to_string()
            .contains("centerLetter cannot appear in outerLetters"));
        assert!(err.to_string().contains("puzzle[0]"));
    }

    #[test]
    fn test_non_contiguous_dates_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[1].id = "2026-02-13".to_string();
        sched.puzzles[1].date = "2026-02-13".to_string();
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("contiguous"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[1] = sched.puzzles[0].clone();
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unique"));
    }

    #[test]
    fn test_id_date_mismatch_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[0].id = "2026-02-09".to_string();
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("id must equal date"));
    }

    #[test]
    fn test_score_drift_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[0].max_score += 1;
        sched.puzzles[0].rank_thresholds = rank_thresholds(sched.puzzles[0].max_score);
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("maxScore mismatch"));
    }

    #[test]
    fn test_tampered_threshold_rejected() {
        let (dict, mut sched) = good_inputs();
        *sched.puzzles[0]
            .rank_thresholds
            .get_mut("queenBee")
            .unwrap() += 1;
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("queenBee"));
    }

    #[test]
    fn test_pangram_not_in_valid_words_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[0].pangrams = vec!["lantern".to_string()];
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("pangram missing from validWords"));
    }

    #[test]
    fn test_word_missing_center_rejected() {
        let (dict, mut sched) = good_inputs();
        // "tercel" uses only allowed letters but lacks the center 'a'.
        sched.puzzles[0].valid_words.push("tercel".to_string());
        sched.puzzles[0].valid_words.sort();
        sched.puzzles[0].max_score = ScoringPolicy::default().max_score(
            &sched.puzzles[0].valid_words,
            &sched.puzzles[0].pangrams,
        );
        sched.puzzles[0].rank_thresholds = rank_thresholds(sched.puzzles[0].max_score);
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("missing center letter"));
    }

    #[test]
    fn test_word_outside_letter_set_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles[0].valid_words.insert(0, "abacus".to_string());
        sched.puzzles[0].max_score = ScoringPolicy::default().max_score(
            &sched.puzzles[0].valid_words,
            &sched.puzzles[0].pangrams,
        );
        sched.puzzles[0].rank_thresholds = rank_thresholds(sched.puzzles[0].max_score);
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("disallowed letter"));
    }

    #[test]
    fn test_dictionary_version_mismatch_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.source_dictionary_version = "v2".to_string();
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("sourceDictionaryVersion"));
    }

    #[test]
    fn test_empty_schedule_rejected() {
        let (dict, mut sched) = good_inputs();
        sched.puzzles.clear();
        let err = validate(&dict, &sched, &ValidatorConfig::default()).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
