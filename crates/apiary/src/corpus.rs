//! Raw word-list loading with per-source provenance.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use crate::error::{ApiaryError, Result};
use crate::policy::SourceEntry;

/// Provenance collected while loading sources.
#[derive(Debug, Clone, Default)]
pub struct SourceStats {
    /// Paths actually read, in configuration order.
    pub files_used: Vec<String>,
    /// Words contributed per source.
    pub word_counts: IndexMap<String, usize>,
    /// SHA-256 of each consumed file.
    pub hashes: IndexMap<String, String>,
}

/// The concatenated corpus plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    /// All source words in file order, lowercased, comments stripped.
    pub words: Vec<String>,
    pub stats: SourceStats,
}

/// Parse a raw word-list file: one word per line, lowercased, trimmed,
/// first whitespace-delimited token kept, blank and `#` lines dropped.
pub fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}

/// Resolve a configured path against the pipeline root.
pub fn resolve_path(root: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Read a file to a string; a missing optional file reads as `None`.
pub(crate) fn maybe_read(path: &Path, optional: bool) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if optional && e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ApiaryError::io(path, e)),
    }
}

/// Load and concatenate the configured source word lists.
///
/// A source marked optional that is absent is skipped; any other missing
/// source is fatal, as is an empty merged corpus.
pub fn load_sources(entries: &[SourceEntry], root: &Path) -> Result<LoadedCorpus> {
    let mut words = Vec::new();
    let mut stats = SourceStats::default();

    for entry in entries {
        let path = resolve_path(root, entry.path());
        let Some(content) = maybe_read(&path, entry.optional())? else {
            continue;
        };

        let hash = format!("sha256:{:x}", Sha256::digest(content.as_bytes()));
        let source_words = parse_word_lines(&content);

        stats.files_used.push(entry.path().to_string());
        stats
            .word_counts
            .insert(entry.path().to_string(), source_words.len());
        stats.hashes.insert(entry.path().to_string(), hash);
        words.extend(source_words);
    }

    if words.is_empty() {
        return Err(ApiaryError::EmptyCorpus(
            "no source words loaded; check the policy's sourceWordLists".to_string(),
        ));
    }

    Ok(LoadedCorpus { words, stats })
}

/// Load a required word-list file (allow-list or block-list).
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ApiaryError::io(path, e))?;
    Ok(parse_word_lines(&content))
}
