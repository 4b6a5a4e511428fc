//! Symmetric-delete index.
//!
//! Every dictionary term registers the strings obtained by deleting up to
//! `max_edit_distance` characters from its first `prefix_length` characters.
//! A query generates its own deletion variants and looks them up here, so
//! candidate generation never scans the dictionary.

use ahash::{AHashMap, AHashSet};

use crate::lexicon::TermId;

/// Maps a deletion variant to the terms that produce it.
#[derive(Debug, Clone, Default)]
pub struct DeleteIndex {
    map: AHashMap<String, Vec<TermId>>,
    max_edit_distance: usize,
    prefix_length: usize,
}

impl DeleteIndex {
    pub fn new(max_edit_distance: usize, prefix_length: usize) -> Self {
        Self {
            map: AHashMap::new(),
            max_edit_distance,
            prefix_length,
        }
    }

    /// Register all deletion variants of `term` under `id`.
    pub fn insert(&mut self, term: &str, id: TermId) {
        for variant in self.variants(term) {
            self.map.entry(variant).or_default().push(id);
        }
    }

    /// Terms sharing the deletion variant `variant`.
    pub fn get(&self, variant: &str) -> &[TermId] {
        self.map.get(variant).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All deletion variants registered for `term`, including the (prefix of
    /// the) term itself.
    pub fn variants(&self, term: &str) -> AHashSet<String> {
        let chars: Vec<char> = term.chars().collect();
        let mut out = AHashSet::new();

        if chars.len() <= self.max_edit_distance {
            out.insert(String::new());
        }

        let key = &chars[..chars.len().min(self.prefix_length)];
        out.insert(key.iter().collect());
        self.collect_deletes(key, 0, &mut out);
        out
    }

    fn collect_deletes(&self, word: &[char], depth: usize, out: &mut AHashSet<String>) {
        let depth = depth + 1;
        if depth > self.max_edit_distance || word.len() <= 1 {
            return;
        }
        for i in 0..word.len() {
            let mut shorter = word.to_vec();
            shorter.remove(i);
            let variant: String = shorter.iter().collect();
            if out.insert(variant) && depth < self.max_edit_distance {
                self.collect_deletes(&shorter, depth, out);
            }
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Number of distinct variants.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
