//! Artifact persistence: versioned JSON files, written whole, never mutated.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiaryError, Result};

/// Artifact format version stamped on every published file.
pub const ARTIFACT_VERSION: &str = "v1";

/// The published dictionary artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Artifact format version.
    pub version: String,
    /// Whether the curation policy ran in strict mode.
    pub strict: bool,
    /// Accepted words, sorted ascending, duplicate-free.
    pub words: Vec<String>,
}

impl Dictionary {
    /// Load a dictionary artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }

    /// Write the dictionary artifact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json_pretty(path.as_ref(), self)
    }
}

/// Read a JSON value with path context on failure.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| ApiaryError::io(path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Write a pretty-printed, newline-terminated JSON file, creating parent
/// directories as needed.
pub(crate) fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ApiaryError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| ApiaryError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ApiaryError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dictionary-v1.json");

        let dictionary = Dictionary {
            version: ARTIFACT_VERSION.to_string(),
            strict: true,
            words: vec!["acre".to_string(), "alert".to_string()],
        };
        dictionary.save(&path).unwrap();

        let loaded = Dictionary::load(&path).unwrap();
        assert_eq!(loaded, dictionary);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_load_missing_dictionary_fatal() {
        let err = Dictionary::load("no-such-file.json").unwrap_err();
        assert!(matches!(err, ApiaryError::Io { .. }));
    }
}
