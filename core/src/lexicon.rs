//! Unigram frequency dictionary.
//!
//! Public API:
//! - `FrequencyEntry` - a term and its occurrence count
//! - `Lexicon` - term storage addressed by `TermId`, with exact lookup
//!
//! Terms are stored exactly as they appear in the resource (case-sensitive).
//! The delete index refers to terms by id so each term string is stored once.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Index of a term inside a `Lexicon`.
pub type TermId = u32;

/// A single unigram dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub term: String,
    /// Occurrence count. Higher means more frequent.
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new<T: Into<String>>(term: T, count: u64) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// In-memory unigram dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<FrequencyEntry>,
    ids: AHashMap<String, TermId>,
    /// Longest term, in characters.
    max_length: usize,
    /// Sum of all counts, used as N when estimating probabilities.
    corpus_count: u64,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term with the given count.
    ///
    /// If the term already exists its count is incremented (saturating) and
    /// `(id, false)` is returned; otherwise the new id and `true`.
    pub fn insert<T: Into<String>>(&mut self, term: T, count: u64) -> (TermId, bool) {
        let term = term.into();
        self.corpus_count = self.corpus_count.saturating_add(count);

        if let Some(&id) = self.ids.get(&term) {
            let e = &mut self.entries[id as usize];
            e.count = e.count.saturating_add(count);
            return (id, false);
        }

        let id = self.entries.len() as TermId;
        self.max_length = self.max_length.max(term.chars().count());
        self.ids.insert(term.clone(), id);
        self.entries.push(FrequencyEntry::new(term, count));
        (id, true)
    }

    /// Id of an exactly matching term.
    pub fn id(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Count of an exactly matching term.
    pub fn count_of(&self, term: &str) -> Option<u64> {
        self.id(term).map(|id| self.entries[id as usize].count)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.ids.contains_key(term)
    }

    /// Entry for an id handed out by this lexicon.
    pub fn entry(&self, id: TermId) -> &FrequencyEntry {
        &self.entries[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &FrequencyEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i as TermId, e))
    }

    /// Longest stored term in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Total of all counts; never zero so it can be divided by.
    pub fn corpus_count(&self) -> u64 {
        self.corpus_count.max(1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut lx = Lexicon::new();
        let (id, fresh) = lx.insert("sugar", 40);
        assert!(fresh);
        assert_eq!(lx.count_of("sugar"), Some(40));
        assert_eq!(lx.entry(id).term, "sugar");
        assert_eq!(lx.count_of("Sugar"), None);
    }

    #[test]
    fn duplicate_insert_sums_count() {
        let mut lx = Lexicon::new();
        lx.insert("salt", 1);
        let (_, fresh) = lx.insert("salt", 3);
        assert!(!fresh);
        assert_eq!(lx.len(), 1);
        assert_eq!(lx.count_of("salt"), Some(4));
        assert_eq!(lx.corpus_count(), 4);
    }

    #[test]
    fn tracks_longest_term_in_chars() {
        let mut lx = Lexicon::new();
        lx.insert("crème", 1);
        lx.insert("oil", 1);
        assert_eq!(lx.max_length(), 5);
    }

    #[test]
    fn count_saturates() {
        let mut lx = Lexicon::new();
        lx.insert("x", u64::MAX);
        lx.insert("x", 5);
        assert_eq!(lx.count_of("x"), Some(u64::MAX));
    }

    #[test]
    fn empty_corpus_count_is_one() {
        assert_eq!(Lexicon::new().corpus_count(), 1);
    }
}
