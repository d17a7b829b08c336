//! Word→frequency-score table used to prune low-frequency words.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::corpus::{maybe_read, resolve_path};
use crate::error::{ApiaryError, Result};
use crate::policy::{FrequencyConfig, FrequencyFormat};

/// A loaded word→zipf table. Disabled or absent-but-optional configs load
/// as an empty table, which never rejects anything.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table described by the frequency config.
    pub fn load(config: &FrequencyConfig, root: &Path) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::empty());
        }

        let path = resolve_path(root, &config.path);
        let Some(raw) = maybe_read(&path, config.optional)? else {
            return Ok(Self::empty());
        };

        let rows = match config.format {
            FrequencyFormat::Json => parse_json(&raw, config)?,
            FrequencyFormat::Csv => parse_delimited(&raw, b',', config)?,
            FrequencyFormat::Tsv => parse_delimited(&raw, b'\t', config)?,
        };

        let mut scores = HashMap::new();
        for (word, zipf) in rows {
            let word = word.trim().to_lowercase();
            if word.is_empty() || !zipf.is_finite() {
                continue;
            }
            scores.insert(word, zipf);
        }

        Ok(Self { scores })
    }

    /// Score for a word, if the table has one.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Parse a delimited table with a header row, extracting the configured
/// word and zipf columns. Missing columns are a fatal configuration error.
fn parse_delimited(raw: &str, delimiter: u8, config: &FrequencyConfig) -> Result<Vec<(String, f64)>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let word_idx = headers.iter().position(|h| h == &config.word_column);
    let zipf_idx = headers.iter().position(|h| h == &config.zipf_column);

    let (Some(word_idx), Some(zipf_idx)) = (word_idx, zipf_idx) else {
        return Err(ApiaryError::Config(format!(
            "missing frequency columns: expected \"{},{}\" found \"{}\"",
            config.word_column,
            config.zipf_column,
            headers.join(",")
        )));
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let word = record.get(word_idx).unwrap_or("").to_string();
        let zipf = record
            .get(zipf_idx)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        rows.push((word, zipf));
    }
    Ok(rows)
}

/// Parse a JSON table: either an array of row objects keyed by the
/// configured columns, or a flat word→score map.
fn parse_json(raw: &str, config: &FrequencyConfig) -> Result<Vec<(String, f64)>> {
    let payload: Value = serde_json::from_str(raw)?;

    let rows = match payload {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                let word = item
                    .get(&config.word_column)
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                let zipf = item
                    .get(&config.zipf_column)
                    .map(number_or_numeric_string)
                    .unwrap_or(f64::NAN);
                (word, zipf)
            })
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(word, zipf)| (word, number_or_numeric_string(&zipf)))
            .collect(),
        other => {
            return Err(ApiaryError::Config(format!(
                "frequency table must be a JSON array or object, got {}",
                json_type_name(&other)
            )))
        }
    };

    Ok(rows)
}

/// Accept scores serialized either as numbers or numeric strings.
fn number_or_numeric_string(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn enabled_config() -> FrequencyConfig {
        FrequencyConfig {
            enabled: true,
            min_zipf: Some(3.0),
            ..FrequencyConfig::default()
        }
    }

    #[test]
    fn test_disabled_config_loads_empty() {
        let config = FrequencyConfig::default();
        let table = FrequencyTable::load(&config, Path::new(".")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_tsv() {
        let raw = "word\tzipf\napple\t4.5\npear\t2.1\n";
        let rows = parse_delimited(raw, b'\t', &enabled_config()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("apple".to_string(), 4.5));
    }

    #[test]
    fn test_missing_columns_fatal() {
        let raw = "term\tscore\napple\t4.5\n";
        let err = parse_delimited(raw, b'\t', &enabled_config()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("word,zipf"), "got: {message}");
        assert!(message.contains("term,score"), "got: {message}");
    }

    #[test]
    fn test_parse_json_array_and_map() {
        let config = enabled_config();
        let array = r#"[{"word": "apple", "zipf": 4.5}, {"word": "pear", "zipf": "2.1"}]"#;
        let rows = parse_json(array, &config).unwrap();
        assert_eq!(rows[1], ("pear".to_string(), 2.1));

        let map = r#"{"apple": 4.5, "pear": 2.1}"#;
        let rows = parse_json(map, &config).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_non_finite_scores_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.tsv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"word\tzipf\napple\t4.5\nbad\tnot-a-number\n")
            .unwrap();

        let config = FrequencyConfig {
            path: "freq.tsv".to_string(),
            ..enabled_config()
        };
        let table = FrequencyTable::load(&config, dir.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.score("apple"), Some(4.5));
        assert_eq!(table.score("bad"), None);
    }

    #[test]
    fn test_missing_optional_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = FrequencyConfig {
            path: "absent.tsv".to_string(),
            optional: true,
            ..enabled_config()
        };
        let table = FrequencyTable::load(&config, dir.path()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_required_file_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = FrequencyConfig {
            path: "absent.tsv".to_string(),
            ..enabled_config()
        };
        assert!(FrequencyTable::load(&config, dir.path()).is_err());
    }
}
