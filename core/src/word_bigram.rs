// core/src/word_bigram.rs
//
// Word-level bigram counts for adjacent term pairs.
// Used to prefer contextually likely corrections and to score token splits.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A two-term key ("first second") and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramEntry {
    pub key: String,
    pub count: u64,
}

impl BigramEntry {
    pub fn new<T: Into<String>>(key: T, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }

    /// The key split back into its two terms, on the first space only.
    pub fn terms(&self) -> Option<(&str, &str)> {
        self.key.split_once(' ')
    }
}

/// Bigram count table keyed by "first second".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordBigram {
    data: AHashMap<String, u64>,
    /// Smallest count loaded; caps the estimate for unseen pairs.
    min_count: Option<u64>,
}

impl WordBigram {
    /// Create an empty bigram table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bigram observation. Duplicate keys sum their counts.
    pub fn add_bigram<K: Into<String>>(&mut self, key: K, count: u64) {
        let slot = self.data.entry(key.into()).or_insert(0);
        *slot = slot.saturating_add(count);
        self.min_count = Some(self.min_count.map_or(count, |m| m.min(count)));
    }

    /// Count for the whole key, e.g. `"the quick"`.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.data.get(key).copied()
    }

    /// Count for the pair `first second`; 0 if unseen.
    pub fn pair_count(&self, first: &str, second: &str) -> u64 {
        if self.data.is_empty() {
            return 0;
        }
        let mut key = String::with_capacity(first.len() + second.len() + 1);
        key.push_str(first);
        key.push(' ');
        key.push_str(second);
        self.get(&key).unwrap_or(0)
    }

    /// Smallest loaded count, or `u64::MAX` when the table is empty.
    pub fn min_count(&self) -> u64 {
        self.min_count.unwrap_or(u64::MAX)
    }

    /// Get number of distinct pairs
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.data.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
