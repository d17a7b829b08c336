//! Apiary: deterministic word-curation and daily letter-puzzle pipeline.
//!
//! Apiary turns a raw word corpus into a versioned, policy-filtered
//! dictionary and a versioned schedule of daily letter puzzles, each
//! provably solvable and internally consistent.
//!
//! # Core Principles
//!
//! - **Deterministic**: the same inputs always produce the same artifacts
//! - **Policy-driven**: every filter threshold and denylist is configuration
//! - **Cross-checked**: an independent validator re-derives every invariant
//!   from the published artifacts and fails loudly on any mismatch
//!
//! # Example
//!
//! ```no_run
//! use apiary::{CandidateGenerator, Dictionary};
//!
//! let dictionary = Dictionary::load("data/dictionary-v1.json").unwrap();
//! let candidates = CandidateGenerator::new().generate(&dictionary.words);
//!
//! println!("Candidates: {}", candidates.len());
//! ```

pub mod artifact;
pub mod corpus;
pub mod curate;
pub mod error;
pub mod frequency;
pub mod policy;
pub mod puzzle;
pub mod scoring;
pub mod validate;

pub use artifact::{Dictionary, ARTIFACT_VERSION};
pub use corpus::{load_word_list, LoadedCorpus};
pub use curate::{CurationMetrics, Curator, InflectionStrategy, SuffixInflections};
pub use error::{ApiaryError, Result};
pub use frequency::FrequencyTable;
pub use policy::{FrequencyConfig, FrequencyFormat, Policy, SourceEntry};
pub use puzzle::{
    select_schedule, Candidate, CandidateGenerator, GeneratorConfig, Puzzle, ScheduleArtifact,
    DEFAULT_PUZZLE_COUNT,
};
pub use scoring::ScoringPolicy;
pub use validate::{validate, ValidationSummary, ValidatorConfig};
