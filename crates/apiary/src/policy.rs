//! Curation policy: the structured configuration record driving the pipeline.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ApiaryError, Result};

/// Default minimum playable word length.
pub const DEFAULT_MINIMUM_LENGTH: usize = 4;

/// Source word list used when the policy names none.
pub const DEFAULT_SOURCE_LIST: &str = "data/raw/dictionary-base.txt";

/// A configured source word list: a bare path, or a path marked optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceEntry {
    /// Required source, referenced by path alone.
    Path(String),
    /// Source with an explicit optional flag.
    Detailed {
        path: String,
        #[serde(default)]
        optional: bool,
    },
}

impl SourceEntry {
    /// The configured path.
    pub fn path(&self) -> &str {
        match self {
            SourceEntry::Path(path) => path,
            SourceEntry::Detailed { path, .. } => path,
        }
    }

    /// Whether a missing file is tolerated.
    pub fn optional(&self) -> bool {
        match self {
            SourceEntry::Path(_) => false,
            SourceEntry::Detailed { optional, .. } => *optional,
        }
    }
}

/// Tabular format of the frequency table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

/// Frequency-gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrequencyConfig {
    /// Whether the frequency gate is applied at all.
    pub enabled: bool,
    /// Path to the word→zipf table.
    pub path: String,
    /// File format of the table.
    pub format: FrequencyFormat,
    /// Column holding the word.
    pub word_column: String,
    /// Column holding the zipf score.
    pub zipf_column: String,
    /// Words scoring below this are rejected. None disables the gate.
    pub min_zipf: Option<f64>,
    /// Reject words with no score at all.
    pub require_score: bool,
    /// Tolerate a missing table file.
    pub optional: bool,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "data/raw/sources/wordfreq.tsv".to_string(),
            format: FrequencyFormat::Tsv,
            word_column: "word".to_string(),
            zipf_column: "zipf".to_string(),
            min_zipf: None,
            require_score: false,
            optional: false,
        }
    }
}

/// The full curation policy record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    /// Minimum accepted word length.
    pub minimum_length: usize,
    /// Frequency-gate configuration.
    pub frequency: FrequencyConfig,
    /// Toggles for the category denylists.
    pub exclude_profanity: bool,
    pub exclude_geo_terms: bool,
    pub exclude_demonyms: bool,
    pub exclude_rare: bool,
    /// Category denylists, matched as literal lowercase words.
    pub profanity: Vec<String>,
    pub geo_terms: Vec<String>,
    pub demonyms: Vec<String>,
    pub rare_terms: Vec<String>,
    /// Regex patterns; any match rejects the word.
    pub blocked_patterns: Vec<String>,
    /// Augment accepted words with regular inflections.
    pub include_common_inflections: bool,
    /// Raw word-list sources, concatenated in order.
    pub source_word_lists: Vec<SourceEntry>,
    /// Version tag stamped on the dictionary artifact.
    pub version: String,
    /// Version tag of the upstream corpus snapshot.
    pub source_version: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            frequency: FrequencyConfig::default(),
            exclude_profanity: false,
            exclude_geo_terms: false,
            exclude_demonyms: false,
            exclude_rare: false,
            profanity: Vec::new(),
            geo_terms: Vec::new(),
            demonyms: Vec::new(),
            rare_terms: Vec::new(),
            blocked_patterns: Vec::new(),
            include_common_inflections: false,
            source_word_lists: Vec::new(),
            version: "v1".to_string(),
            source_version: "v1".to_string(),
        }
    }
}

impl Policy {
    /// Load a policy from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ApiaryError::io(path, e))?;
        let policy = serde_json::from_reader(BufReader::new(file))?;
        Ok(policy)
    }

    /// The configured sources, falling back to the default list when empty.
    pub fn sources(&self) -> Vec<SourceEntry> {
        if self.source_word_lists.is_empty() {
            vec![SourceEntry::Path(DEFAULT_SOURCE_LIST.to_string())]
        } else {
            self.source_word_lists.clone()
        }
    }

    /// Compile the blocked patterns. A malformed pattern is fatal.
    pub fn compiled_patterns(&self) -> Result<Vec<Regex>> {
        self.blocked_patterns
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(ApiaryError::from))
            .collect()
    }

    /// Lowercased set view of a category denylist.
    pub fn term_set(terms: &[String]) -> HashSet<String> {
        terms.iter().map(|term| term.to_lowercase()).collect()
    }
}
