//! Curation provenance and removal metrics.
//!
//! Audit-only artifact: no downstream stage reads it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::corpus::SourceStats;
use crate::policy::Policy;

/// Frequency-gate provenance recorded in the metrics artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyProvenance {
    pub enabled: bool,
    pub file: Option<String>,
    pub min_zipf: Option<f64>,
    pub rows_loaded: usize,
}

/// Every counter accumulated across the curation stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalCounts {
    pub input_total: usize,
    pub normalized_total: usize,
    pub removed_by_frequency: usize,
    pub removed_missing_frequency: usize,
    pub removed_profanity: usize,
    pub removed_geo_terms: usize,
    pub removed_demonyms: usize,
    /// Non-alphabetic, too-short, or pattern-blocked words.
    pub removed_abbreviations: usize,
    pub removed_rare: usize,
    pub inflections_added: usize,
    pub allowlist_added: usize,
    pub blocklist_removed: usize,
    pub final_total: usize,
}

/// The full metrics artifact written next to the dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurationMetrics {
    pub source_name: String,
    pub source_version: String,
    pub license: String,
    pub policy_version: String,
    pub source_files_used: Vec<String>,
    pub source_word_counts: IndexMap<String, usize>,
    pub source_hashes: IndexMap<String, String>,
    pub frequency: FrequencyProvenance,
    pub counts: RemovalCounts,
}

impl CurationMetrics {
    /// Assemble the metrics artifact from a finished curation run.
    pub fn new(
        policy: &Policy,
        stats: &SourceStats,
        frequency_rows: usize,
        counts: RemovalCounts,
    ) -> Self {
        Self {
            source_name: "scowl+wordfreq+project-policy".to_string(),
            source_version: policy.source_version.clone(),
            license: "mixed-open-sources".to_string(),
            policy_version: policy.version.clone(),
            source_files_used: stats.files_used.clone(),
            source_word_counts: stats.word_counts.clone(),
            source_hashes: stats.hashes.clone(),
            frequency: FrequencyProvenance {
                enabled: policy.frequency.enabled,
                file: policy
                    .frequency
                    .enabled
                    .then(|| policy.frequency.path.clone()),
                min_zipf: policy.frequency.min_zipf,
                rows_loaded: frequency_rows,
            },
            counts,
        }
    }

    /// Write the metrics artifact.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> crate::error::Result<()> {
        crate::artifact::write_json_pretty(path.as_ref(), self)
    }
}
