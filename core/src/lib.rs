//! labelcheck-core
//!
//! Dictionary-based correction of noisy OCR text and watch-list scanning of
//! the corrected result.
//!
//! The corrector uses a symmetric-delete index over a unigram frequency
//! dictionary, bounded edit distances, and a bigram table to rank candidates
//! in context. Whole texts are corrected with compound lookup, which can also
//! merge adjacent tokens and split run-together ones.
//!
//! Public API:
//! - `Corrector` - Loaded, immutable corrector (`load`, `lookup`, `correct`)
//! - `Suggestion` / `Verbosity` - Ranked candidates for single-term lookup
//! - `Lexicon` / `WordBigram` - Unigram and bigram stores
//! - `WatchLists` - Ingredient watch-lists loaded from TOML
//! - `Config` - Configuration loaded from TOML
//! - `ResourceError` / `ParseWarning` - What loading can report
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error;
pub use error::{ParseWarning, ResourceError};

pub mod distance;
pub use distance::DistanceAlgorithm;

pub mod suggestion;
pub use suggestion::{Suggestion, Verbosity};

pub mod lexicon;
pub use lexicon::{FrequencyEntry, Lexicon, TermId};

pub mod word_bigram;
pub use word_bigram::{BigramEntry, WordBigram};

pub mod dictionary;
pub use dictionary::ColumnFormat;

pub mod deletes;
pub use deletes::DeleteIndex;

pub mod text;

pub mod corrector;
pub use corrector::{Corrector, DictionaryStats};

pub mod watchlist;
pub use watchlist::{Finding, ListReport, Report, WatchList, WatchLists};

/// Corrector configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Largest edit distance the delete index supports. Lookups asking for
    /// more are clamped to this.
    pub max_edit_distance: usize,
    /// Only this many leading characters of a term are indexed. Must exceed
    /// `max_edit_distance`.
    pub prefix_length: usize,
    /// Dictionary entries with a smaller count are ignored.
    pub count_threshold: u64,
    /// Edit distance used to confirm candidates.
    pub distance: DistanceAlgorithm,

    // Resource layout
    /// Column separator in both dictionary files; a single space splits on
    /// any whitespace.
    pub separator: String,
    pub term_index: usize,
    pub count_index: usize,
    pub bigram_term_index: usize,
    pub bigram_count_index: usize,

    // Token handling for compound lookup
    /// Look tokens up without leading and trailing punctuation, which is
    /// put back around the correction.
    pub strip_punctuation: bool,
    /// Look tokens up in lower case.
    pub lowercase: bool,
    /// Leave tokens with digits and all-caps acronyms untouched.
    pub ignore_non_words: bool,
    /// Apply the input token's casing to its correction.
    pub transfer_casing: bool,
    /// Allow two adjacent tokens to become one term.
    pub merge_tokens: bool,
    /// Allow one token to become two terms.
    pub split_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
            distance: DistanceAlgorithm::DamerauOsa,
            separator: " ".to_string(),
            term_index: 0,
            count_index: 1,
            bigram_term_index: 0,
            bigram_count_index: 2,
            strip_punctuation: true,
            lowercase: true,
            ignore_non_words: false,
            transfer_casing: false,
            merge_tokens: true,
            split_tokens: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ResourceError::open(path, e))?;
        Self::from_toml_str(&content).map_err(|source| ResourceError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Column layout of the unigram file.
    pub fn unigram_format(&self) -> ColumnFormat {
        ColumnFormat {
            separator: self.separator.clone(),
            term_index: self.term_index,
            count_index: self.count_index,
        }
    }

    /// Column layout of the bigram file.
    pub fn bigram_format(&self) -> ColumnFormat {
        ColumnFormat {
            separator: self.separator.clone(),
            term_index: self.bigram_term_index,
            count_index: self.bigram_count_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_frequency_dictionary_layout() {
        let cfg = Config::default();
        assert_eq!(cfg.max_edit_distance, 2);
        assert_eq!(cfg.prefix_length, 7);
        assert_eq!(cfg.unigram_format(), ColumnFormat::unigram());
        assert_eq!(cfg.bigram_format(), ColumnFormat::bigram());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            max_edit_distance = 1
            distance = "levenshtein"
            transfer_casing = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_edit_distance, 1);
        assert_eq!(cfg.distance, DistanceAlgorithm::Levenshtein);
        assert!(cfg.transfer_casing);
        assert_eq!(cfg.prefix_length, 7);
        assert!(cfg.lowercase);
        assert!(cfg.strip_punctuation);
    }

    #[test]
    fn toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.separator = "\t".into();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn unknown_file_is_a_resource_error() {
        let err = Config::load_toml("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ResourceError::Open { .. }));
    }
}
