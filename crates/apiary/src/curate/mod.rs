//! Dictionary curation: normalize, filter, augment, publish.

mod inflect;
mod metrics;

pub use inflect::{InflectionStrategy, SuffixInflections};
pub use metrics::{CurationMetrics, FrequencyProvenance, RemovalCounts};

use std::collections::{BTreeSet, HashSet};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::artifact::Dictionary;
use crate::corpus::LoadedCorpus;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::policy::Policy;

/// Category denylists and compiled patterns, resolved once per run.
struct Filters {
    minimum_length: usize,
    patterns: Vec<Regex>,
    profanity: Option<HashSet<String>>,
    geo_terms: Option<HashSet<String>>,
    demonyms: Option<HashSet<String>>,
    rare_terms: Option<HashSet<String>>,
}

impl Filters {
    fn from_policy(policy: &Policy) -> Result<Self> {
        let enabled = |flag: bool, terms: &[String]| flag.then(|| Policy::term_set(terms));
        Ok(Self {
            minimum_length: policy.minimum_length,
            patterns: policy.compiled_patterns()?,
            profanity: enabled(policy.exclude_profanity, &policy.profanity),
            geo_terms: enabled(policy.exclude_geo_terms, &policy.geo_terms),
            demonyms: enabled(policy.exclude_demonyms, &policy.demonyms),
            rare_terms: enabled(policy.exclude_rare, &policy.rare_terms),
        })
    }

    fn is_alpha(word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
    }

    fn matches_blocked_pattern(&self, word: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(word))
    }

    fn in_category(set: &Option<HashSet<String>>, word: &str) -> bool {
        set.as_ref().is_some_and(|terms| terms.contains(word))
    }

    /// Every eligibility rule except the frequency gate. Inflection
    /// candidates must pass this independently of their base form.
    fn non_frequency_eligible(&self, word: &str) -> bool {
        Self::is_alpha(word)
            && word.len() >= self.minimum_length
            && !self.matches_blocked_pattern(word)
            && !Self::in_category(&self.profanity, word)
            && !Self::in_category(&self.geo_terms, word)
            && !Self::in_category(&self.demonyms, word)
            && !Self::in_category(&self.rare_terms, word)
    }
}

/// Why the filter pass rejected a word.
enum Rejection {
    Shape,
    MissingFrequency,
    LowFrequency,
    Profanity,
    GeoTerm,
    Demonym,
    Rare,
}

/// The dictionary curator. Holds the inflection strategy; everything else
/// arrives per call so runs stay independent and reproducible.
pub struct Curator {
    inflections: Box<dyn InflectionStrategy>,
}

impl Curator {
    /// Curator with the default suffix-rule inflection strategy.
    pub fn new() -> Self {
        Self {
            inflections: Box::new(SuffixInflections),
        }
    }

    /// Curator with a custom inflection strategy.
    pub fn with_inflections(strategy: impl InflectionStrategy + 'static) -> Self {
        Self {
            inflections: Box::new(strategy),
        }
    }

    /// Run the full curation pipeline over a loaded corpus.
    ///
    /// The stages run in a fixed order so results are reproducible:
    /// normalize/dedupe, filter with counters, allow-list union,
    /// inflection augmentation, block-list subtraction, sort.
    pub fn curate(
        &self,
        corpus: &LoadedCorpus,
        allow_list: &[String],
        block_list: &[String],
        policy: &Policy,
        frequency: &FrequencyTable,
    ) -> Result<(Dictionary, CurationMetrics)> {
        let filters = Filters::from_policy(policy)?;
        let mut counts = RemovalCounts::default();
        counts.input_total = corpus.words.len();

        let normalized = normalize(&corpus.words);
        counts.normalized_total = normalized.len();

        let mut accepted = BTreeSet::new();
        for word in &normalized {
            match classify(word, &filters, policy, frequency) {
                Ok(()) => {
                    accepted.insert(word.clone());
                }
                Err(rejection) => counts.record(rejection),
            }
        }

        for word in dedup_lowercase(allow_list) {
            if accepted.insert(word) {
                counts.allowlist_added += 1;
            }
        }

        if policy.include_common_inflections {
            let bases: Vec<String> = accepted.iter().cloned().collect();
            for base in &bases {
                for candidate in self.inflections.candidates(base) {
                    if !normalized.contains(&candidate) {
                        continue;
                    }
                    if !filters.non_frequency_eligible(&candidate) {
                        continue;
                    }
                    if accepted.insert(candidate) {
                        counts.inflections_added += 1;
                    }
                }
            }
        }

        for word in dedup_lowercase(block_list) {
            if accepted.remove(&word) {
                counts.blocklist_removed += 1;
            }
        }

        let words: Vec<String> = accepted.into_iter().collect();
        counts.final_total = words.len();

        let dictionary = Dictionary {
            version: policy.version.clone(),
            strict: true,
            words,
        };
        let metrics = CurationMetrics::new(policy, &corpus.stats, frequency.len(), counts);

        Ok((dictionary, metrics))
    }
}

impl Default for Curator {
    fn default() -> Self {
        Self::new()
    }
}

/// NFKC-normalize, lowercase, and de-duplicate the raw corpus.
fn normalize(words: &[String]) -> BTreeSet<String> {
    words
        .iter()
        .map(|word| word.nfkc().collect::<String>().to_lowercase())
        .collect()
}

fn dedup_lowercase(words: &[String]) -> BTreeSet<String> {
    words.iter().map(|word| word.to_lowercase()).collect()
}

/// Apply every filter to one normalized word, in policy order.
fn classify(
    word: &str,
    filters: &Filters,
    policy: &Policy,
    frequency: &FrequencyTable,
) -> std::result::Result<(), Rejection> {
    if !Filters::is_alpha(word)
        || word.len() < filters.minimum_length
        || filters.matches_blocked_pattern(word)
    {
        return Err(Rejection::Shape);
    }

    if policy.frequency.enabled {
        if let Some(min_zipf) = policy.frequency.min_zipf {
            match frequency.score(word) {
                None if policy.frequency.require_score => {
                    return Err(Rejection::MissingFrequency)
                }
                Some(score) if score < min_zipf => return Err(Rejection::LowFrequency),
                _ => {}
            }
        }
    }

    if Filters::in_category(&filters.profanity, word) {
        return Err(Rejection::Profanity);
    }
    if Filters::in_category(&filters.geo_terms, word) {
        return Err(Rejection::GeoTerm);
    }
    if Filters::in_category(&filters.demonyms, word) {
        return Err(Rejection::Demonym);
    }
    if Filters::in_category(&filters.rare_terms, word) {
        return Err(Rejection::Rare);
    }

    Ok(())
}

impl RemovalCounts {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Shape => self.removed_abbreviations += 1,
            Rejection::MissingFrequency => self.removed_missing_frequency += 1,
            Rejection::LowFrequency => self.removed_by_frequency += 1,
            Rejection::Profanity => self.removed_profanity += 1,
            Rejection::GeoTerm => self.removed_geo_terms += 1,
            Rejection::Demonym => self.removed_demonyms += 1,
            Rejection::Rare => self.removed_rare += 1,
        }
    }
}
