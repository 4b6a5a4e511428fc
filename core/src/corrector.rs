//! Dictionary-based correction of noisy OCR text.
//!
//! `Corrector` owns a unigram `Lexicon`, a `WordBigram` table and the
//! `DeleteIndex` built from the lexicon. It is constructed once, after which
//! it is read-only: `lookup` and `correct` take `&self`, perform no I/O and
//! can be called from any number of threads through an `Arc<Corrector>`.
//!
//! Public API:
//! - `Corrector::load` / `from_readers` / `load_snapshot` - construction
//! - `Corrector::lookup` - single-term suggestions
//! - `Corrector::lookup_compound` / `correct` - whole-text correction with
//!   token merging and splitting

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::deletes::DeleteIndex;
use crate::dictionary::{for_each_line, parse_bigram_line, parse_unigram_line};
use crate::error::{ResourceError, Result};
use crate::lexicon::{Lexicon, TermId};
use crate::suggestion::{Suggestion, Verbosity};
use crate::text;
use crate::word_bigram::WordBigram;
use crate::Config;

const SNAPSHOT_VERSION: u32 = 1;

/// Counters collected while loading dictionaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub unigrams: usize,
    pub bigrams: usize,
    pub skipped_unigram_lines: usize,
    pub skipped_bigram_lines: usize,
    /// Lines whose count was below `count_threshold`.
    pub below_threshold: usize,
    /// Length in characters of the longest term.
    pub longest_term: usize,
    /// Sum of all unigram counts.
    pub corpus_count: u64,
}

/// Compound spelling corrector over an immutable frequency dictionary.
#[derive(Debug, Clone)]
pub struct Corrector {
    config: Config,
    lexicon: Lexicon,
    bigrams: WordBigram,
    deletes: DeleteIndex,
    stats: DictionaryStats,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    config: &'a Config,
    lexicon: &'a Lexicon,
    bigrams: &'a WordBigram,
    stats: &'a DictionaryStats,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    config: Config,
    lexicon: Lexicon,
    bigrams: WordBigram,
    stats: DictionaryStats,
}

/// A whitespace token with its surrounding punctuation split off.
#[derive(Debug, Clone)]
struct Token {
    /// As written.
    raw: String,
    lead: String,
    /// The part that is looked up.
    word: String,
    trail: String,
}

impl Token {
    fn whole(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            lead: String::new(),
            word: raw.to_string(),
            trail: String::new(),
        }
    }

    fn split(raw: &str) -> Self {
        let (lead, word, trail) = text::split_affixes(raw);
        Self {
            raw: raw.to_string(),
            lead: lead.to_string(),
            word: word.to_string(),
            trail: trail.to_string(),
        }
    }

    /// `self` directly followed by `next`, written without the space.
    fn joined(&self, next: &Token) -> Self {
        Self {
            raw: format!("{}{}", self.raw, next.raw),
            lead: self.lead.clone(),
            word: format!("{}{}", self.word, next.word),
            trail: next.trail.clone(),
        }
    }
}

/// One output slot of a compound lookup.
#[derive(Debug)]
struct Part {
    token: Token,
    key: String,
    best: Suggestion,
    /// False when no dictionary term was chosen and the token is emitted.
    known: bool,
    /// Ignored non-words and bare punctuation never merge with a neighbour.
    mergeable: bool,
    /// Edits this part contributes to the distance of the whole result.
    edits: usize,
}

impl Part {
    fn known(token: Token, key: String, best: Suggestion, edits: usize) -> Self {
        Self {
            token,
            key,
            best,
            known: true,
            mergeable: true,
            edits,
        }
    }

    fn unknown(token: Token, key: String, max_edit_distance: usize) -> Self {
        let best = Suggestion::new(token.word.as_str(), max_edit_distance + 1, 0);
        Self {
            token,
            key,
            best,
            known: false,
            mergeable: true,
            edits: 0,
        }
    }

    fn verbatim(raw: &str) -> Self {
        Self {
            token: Token::whole(raw),
            key: raw.to_string(),
            best: Suggestion::new(raw, 0, 0),
            known: false,
            mergeable: false,
            edits: 0,
        }
    }

    /// Whether `next` may be glued onto this part.
    fn merges_with(&self, next: &Token) -> bool {
        self.mergeable && self.token.trail.is_empty() && next.lead.is_empty()
    }

    /// Last word of the chosen term, used as bigram context.
    fn context(&self) -> Option<&str> {
        self.known
            .then(|| self.best.term.rsplit(' ').next())
            .flatten()
    }

    fn render(&self, transfer_casing: bool) -> String {
        if !self.known {
            return self.token.raw.clone();
        }
        let term = if transfer_casing {
            text::transfer_casing(&self.token.word, &self.best.term)
        } else {
            self.best.term.clone()
        };
        format!("{}{}{}", self.token.lead, term, self.token.trail)
    }
}

impl Corrector {
    /// Create an empty corrector. Terms are added with `create_entry` /
    /// `create_bigram` or the `load_*` methods.
    pub fn new(config: &Config) -> Self {
        let mut config = config.clone();
        if config.prefix_length <= config.max_edit_distance {
            warn!(
                prefix_length = config.prefix_length,
                max_edit_distance = config.max_edit_distance,
                "prefix_length must exceed max_edit_distance; raising it"
            );
            config.prefix_length = config.max_edit_distance + 1;
        }
        let deletes = DeleteIndex::new(config.max_edit_distance, config.prefix_length);
        Self {
            config,
            lexicon: Lexicon::new(),
            bigrams: WordBigram::new(),
            deletes,
            stats: DictionaryStats::default(),
        }
    }

    /// Load the unigram and bigram dictionaries from files.
    ///
    /// Fails if either file cannot be opened or read; malformed lines are
    /// logged and skipped.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        unigram_path: P,
        bigram_path: Q,
        config: &Config,
    ) -> Result<Self> {
        let mut corrector = Self::new(config);
        corrector.load_dictionary(unigram_path)?;
        corrector.load_bigram_dictionary(bigram_path)?;
        corrector.log_loaded();
        Ok(corrector)
    }

    /// Same as `load` but from in-memory or already opened sources.
    pub fn from_readers<U: BufRead, B: BufRead>(
        unigrams: U,
        bigrams: B,
        config: &Config,
    ) -> Result<Self> {
        let mut corrector = Self::new(config);
        corrector.read_unigrams(unigrams, Path::new("<unigram reader>"))?;
        corrector.read_bigrams(bigrams, Path::new("<bigram reader>"))?;
        corrector.log_loaded();
        Ok(corrector)
    }

    /// Add every well-formed line of a unigram file. Returns the number of
    /// lines accepted.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ResourceError::open(path, e))?;
        self.read_unigrams(BufReader::new(file), path)
    }

    /// Add every well-formed line of a bigram file. Returns the number of
    /// lines accepted.
    pub fn load_bigram_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ResourceError::open(path, e))?;
        self.read_bigrams(BufReader::new(file), path)
    }

    fn read_unigrams<R: BufRead>(&mut self, reader: R, origin: &Path) -> Result<usize> {
        let format = self.config.unigram_format();
        let mut accepted = 0;
        for_each_line(reader, origin, |line, content| {
            match parse_unigram_line(content, line, &format) {
                Ok(Some(entry)) => {
                    if self.create_entry(entry.term, entry.count) {
                        accepted += 1;
                    }
                }
                Ok(None) => {}
                Err(warning) => {
                    warn!(resource = %origin.display(), "skipping unigram entry: {warning}");
                    self.stats.skipped_unigram_lines += 1;
                }
            }
        })?;
        self.stats.unigrams = self.lexicon.len();
        Ok(accepted)
    }

    fn read_bigrams<R: BufRead>(&mut self, reader: R, origin: &Path) -> Result<usize> {
        let format = self.config.bigram_format();
        let mut accepted = 0;
        for_each_line(reader, origin, |line, content| {
            match parse_bigram_line(content, line, &format) {
                Ok(Some(entry)) => {
                    self.create_bigram(entry.key, entry.count);
                    accepted += 1;
                }
                Ok(None) => {}
                Err(warning) => {
                    warn!(resource = %origin.display(), "skipping bigram entry: {warning}");
                    self.stats.skipped_bigram_lines += 1;
                }
            }
        })?;
        self.stats.bigrams = self.bigrams.len();
        Ok(accepted)
    }

    fn log_loaded(&self) {
        info!(
            unigrams = self.stats.unigrams,
            bigrams = self.stats.bigrams,
            deletes = self.deletes.len(),
            skipped = self.stats.skipped_unigram_lines + self.stats.skipped_bigram_lines,
            "dictionary loaded"
        );
    }

    /// Add a term. Returns false when the count is below `count_threshold`.
    ///
    /// Repeated terms sum their counts.
    pub fn create_entry<T: Into<String>>(&mut self, term: T, count: u64) -> bool {
        let term = term.into();
        if count < self.config.count_threshold {
            debug!(term = %term, count, "below count threshold");
            self.stats.below_threshold += 1;
            return false;
        }
        let (id, fresh) = self.lexicon.insert(term.as_str(), count);
        if fresh {
            self.deletes.insert(&term, id);
        }
        self.stats.unigrams = self.lexicon.len();
        self.stats.longest_term = self.lexicon.max_length();
        self.stats.corpus_count = self.lexicon.corpus_count();
        true
    }

    /// Add a bigram keyed `"first second"`.
    pub fn create_bigram<K: Into<String>>(&mut self, key: K, count: u64) {
        self.bigrams.add_bigram(key, count);
        self.stats.bigrams = self.bigrams.len();
    }

    /// Write dictionaries and settings as a bincode snapshot.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ResourceError::open(path, e))?;
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            config: &self.config,
            lexicon: &self.lexicon,
            bigrams: &self.bigrams,
            stats: &self.stats,
        };
        bincode::serialize_into(BufWriter::new(file), &snapshot).map_err(|source| {
            ResourceError::Encode {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Restore a corrector written by `save_snapshot`. The delete index is
    /// rebuilt from the stored terms.
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ResourceError::open(path, e))?;
        let snapshot: Snapshot =
            bincode::deserialize_from(BufReader::new(file)).map_err(|source| {
                ResourceError::Snapshot {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ResourceError::Snapshot {
                path: path.to_path_buf(),
                source: Box::new(bincode::ErrorKind::Custom(format!(
                    "unsupported snapshot version {} (expected {})",
                    snapshot.version, SNAPSHOT_VERSION
                ))),
            });
        }

        let mut corrector = Self::new(&snapshot.config);
        for (id, entry) in snapshot.lexicon.iter() {
            corrector.deletes.insert(&entry.term, id);
        }
        corrector.lexicon = snapshot.lexicon;
        corrector.bigrams = snapshot.bigrams;
        corrector.stats = snapshot.stats;
        corrector.log_loaded();
        Ok(corrector)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stats(&self) -> &DictionaryStats {
        &self.stats
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn bigrams(&self) -> &WordBigram {
        &self.bigrams
    }

    /// Count of an exactly matching term.
    pub fn count(&self, term: &str) -> Option<u64> {
        self.lexicon.count_of(term)
    }

    fn clamp_distance(&self, requested: usize) -> usize {
        let built = self.deletes.max_edit_distance();
        if requested > built {
            debug!(requested, built, "edit distance clamped to index bound");
        }
        requested.min(built)
    }

    /// Suggestions for a single term, taken as given (no lowercasing).
    ///
    /// `max_edit_distance` above the value the index was built with is
    /// clamped. Results are sorted best first.
    pub fn lookup(&self, input: &str, verbosity: Verbosity, max_edit_distance: usize) -> Vec<Suggestion> {
        let max_ed = self.clamp_distance(max_edit_distance);
        let input_chars: Vec<char> = input.chars().collect();
        let input_len = input_chars.len();
        let mut suggestions = Vec::new();

        if input_len > self.lexicon.max_length() + max_ed {
            return suggestions;
        }

        let mut seen_terms: AHashSet<TermId> = AHashSet::new();
        if let Some(id) = self.lexicon.id(input) {
            seen_terms.insert(id);
            suggestions.push(Suggestion::new(input, 0, self.lexicon.entry(id).count));
            if verbosity != Verbosity::All {
                return suggestions;
            }
        }
        if max_ed == 0 {
            return suggestions;
        }

        let prefix_length = self.deletes.prefix_length();
        let input_prefix_len = input_len.min(prefix_length);
        let mut bound = max_ed;
        let mut seen_deletes: AHashSet<String> = AHashSet::new();
        let mut queue: Vec<String> = vec![input_chars[..input_prefix_len].iter().collect()];
        let mut cursor = 0;

        while cursor < queue.len() {
            let candidate = std::mem::take(&mut queue[cursor]);
            cursor += 1;
            let candidate_chars: Vec<char> = candidate.chars().collect();
            let candidate_len = candidate_chars.len();
            let length_diff = input_prefix_len - candidate_len;

            // The queue is ordered by length, so nothing later can do better.
            if length_diff > bound {
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            for &id in self.deletes.get(&candidate) {
                if !seen_terms.insert(id) {
                    continue;
                }
                let entry = self.lexicon.entry(id);
                let term_chars: Vec<char> = entry.term.chars().collect();
                let term_len = term_chars.len();
                if term_len.abs_diff(input_len) > bound {
                    continue;
                }
                let term_prefix_len = term_len.min(prefix_length);
                if term_prefix_len > input_prefix_len && term_prefix_len - candidate_len > bound {
                    continue;
                }
                let Some(distance) = self.config.distance.distance(&input_chars, &term_chars, bound)
                else {
                    continue;
                };

                let found = Suggestion::new(entry.term.as_str(), distance, entry.count);
                if !suggestions.is_empty() {
                    match verbosity {
                        Verbosity::Closest => {
                            if distance < bound {
                                suggestions.clear();
                            }
                        }
                        Verbosity::Top => {
                            if distance < bound || entry.count > suggestions[0].count {
                                bound = distance;
                                suggestions[0] = found;
                            }
                            continue;
                        }
                        Verbosity::All => {}
                    }
                }
                if verbosity != Verbosity::All {
                    bound = distance;
                }
                suggestions.push(found);
            }

            if length_diff < max_ed && candidate_len <= prefix_length {
                if verbosity != Verbosity::All && length_diff >= bound {
                    continue;
                }
                for i in 0..candidate_len {
                    let delete: String = candidate_chars
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, c)| c)
                        .collect();
                    if seen_deletes.insert(delete.clone()) {
                        queue.push(delete);
                    }
                }
            }
        }

        suggestions.sort();
        suggestions
    }

    /// Best dictionary match for one token.
    ///
    /// The raw token is tried first so mixed-case dictionary terms stay
    /// stable; otherwise `key` is looked up and the closest candidates are
    /// ranked by distance, unigram count, then bigram count after `previous`.
    fn best_match(
        &self,
        raw: &str,
        key: &str,
        max_ed: usize,
        previous: Option<&str>,
    ) -> Option<Suggestion> {
        if let Some(count) = self.lexicon.count_of(raw) {
            return Some(Suggestion::new(raw, 0, count));
        }
        let found = self.lookup(key, Verbosity::Closest, max_ed);
        let first = found.first()?;
        let Some(previous) = previous else {
            return Some(first.clone());
        };
        found
            .iter()
            .take_while(|s| s.distance == first.distance && s.count == first.count)
            .max_by(|a, b| {
                let ca = self.bigrams.pair_count(previous, &a.term);
                let cb = self.bigrams.pair_count(previous, &b.term);
                ca.cmp(&cb).then_with(|| b.term.cmp(&a.term))
            })
            .cloned()
    }

    /// Naive Bayes estimate of how often two terms occur together:
    /// P(a) * P(b) * N.
    fn naive_pair_count(&self, a: u64, b: u64) -> u64 {
        (a as f64 / self.lexicon.corpus_count() as f64 * b as f64) as u64
    }

    fn pair_estimate(&self, first: &Suggestion, second: Option<&Suggestion>) -> u64 {
        let Some(second) = second else {
            return 0;
        };
        match self.bigrams.pair_count(&first.term, &second.term) {
            0 => self.naive_pair_count(first.count, second.count),
            known => known,
        }
    }

    /// Count assigned to a split candidate `left right`.
    fn split_count(&self, joined: &str, left: &Suggestion, right: &Suggestion, single: Option<&Suggestion>) -> u64 {
        match self.bigrams.get(joined) {
            Some(bigram) => match single {
                // Keep a split that contains the single-term correction
                // ahead of that correction.
                Some(best) if left.term == best.term || right.term == best.term => {
                    bigram.max(best.count.saturating_add(1))
                }
                _ => bigram,
            },
            None => self
                .bigrams
                .min_count()
                .min(self.naive_pair_count(left.count, right.count)),
        }
    }

    /// Try every split position of `key` and return the best of the splits
    /// and `single`. A split must stay within `max_ed` of the token.
    fn best_with_splits(
        &self,
        key: &str,
        single: Option<Suggestion>,
        max_ed: usize,
        previous: Option<&str>,
    ) -> Option<Suggestion> {
        let chars: Vec<char> = key.chars().collect();
        let mut best = single.clone();

        for j in 1..chars.len() {
            let left: String = chars[..j].iter().collect();
            let right: String = chars[j..].iter().collect();
            let Some(s1) = self.best_match(&left, &left, max_ed, previous) else {
                continue;
            };
            let Some(s2) = self.best_match(&right, &right, max_ed, Some(&s1.term)) else {
                continue;
            };
            let joined = format!("{} {}", s1.term, s2.term);
            let Some(distance) = self.config.distance.distance_str(key, &joined, max_ed) else {
                continue;
            };
            if best.as_ref().is_some_and(|b| distance > b.distance) {
                continue;
            }
            let count = self.split_count(&joined, &s1, &s2, single.as_ref());
            let better = match &best {
                None => true,
                Some(b) => distance < b.distance || count > b.count,
            };
            if better {
                best = Some(Suggestion::new(joined, distance, count));
            }
        }
        best
    }

    /// Correct a whole text, allowing adjacent tokens to merge and single
    /// tokens to split. Returns the corrected text with an estimated count.
    ///
    /// The distance is summed over the tokens (lookup key to chosen term,
    /// plus one per removed space), so the cost stays linear in the number
    /// of tokens.
    pub fn lookup_compound(&self, input: &str, max_edit_distance: usize) -> Suggestion {
        let max_ed = self.clamp_distance(max_edit_distance);
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.is_empty() {
            return Suggestion::new(input, 0, 0);
        }

        let mut parts: Vec<Part> = Vec::with_capacity(tokens.len());
        let mut last_merged = false;

        for raw in tokens {
            if self.config.ignore_non_words && text::is_non_word(raw) {
                parts.push(Part::verbatim(raw));
                last_merged = false;
                continue;
            }

            let token = if self.config.strip_punctuation && !self.lexicon.contains(raw) {
                Token::split(raw)
            } else {
                Token::whole(raw)
            };
            if token.word.is_empty() {
                parts.push(Part::verbatim(raw));
                last_merged = false;
                continue;
            }

            let key = text::lookup_key(&token.word, self.config.lowercase);
            let previous = parts.last().and_then(Part::context).map(str::to_owned);
            let best = self.best_match(&token.word, &key, max_ed, previous.as_deref());

            // Merge check comes before split, and never twice in a row.
            if self.config.merge_tokens && !last_merged {
                if let Some(prev) = parts.last().filter(|p| p.merges_with(&token)) {
                    let merged_token = prev.token.joined(&token);
                    let merged_key = format!("{}{}", prev.key, key);
                    let context = parts
                        .len()
                        .checked_sub(2)
                        .and_then(|i| parts[i].context())
                        .map(str::to_owned);
                    if let Some(merged) = self.best_match(
                        &merged_token.word,
                        &merged_key,
                        max_ed,
                        context.as_deref(),
                    ) {
                        let separate =
                            prev.best.distance + best.as_ref().map_or(max_ed + 1, |b| b.distance);
                        let pair = self.pair_estimate(&prev.best, best.as_ref());
                        if merged.distance < separate
                            || (merged.distance == separate && merged.count > pair)
                        {
                            let edits = merged.distance + 1;
                            if let Some(last) = parts.last_mut() {
                                *last = Part::known(merged_token, merged_key, merged, edits);
                            }
                            last_merged = true;
                            continue;
                        }
                    }
                }
            }
            last_merged = false;

            let single_char = key.chars().count() == 1;
            let chosen = match best {
                Some(b) if b.distance == 0 || single_char => Some(b),
                best if self.config.split_tokens && !single_char => {
                    self.best_with_splits(&key, best, max_ed, previous.as_deref())
                }
                best => best,
            };
            match chosen {
                Some(s) => {
                    let edits = s.distance;
                    parts.push(Part::known(token, key, s, edits));
                }
                None => parts.push(Part::unknown(token, key, max_ed)),
            }
        }

        let corrected = parts
            .iter()
            .map(|p| p.render(self.config.transfer_casing))
            .collect::<Vec<_>>()
            .join(" ");
        let distance = parts.iter().map(|p| p.edits).sum();
        let n = self.lexicon.corpus_count() as f64;
        let count = parts
            .iter()
            .fold(n, |acc, p| acc * (p.best.count as f64 / n));
        Suggestion::new(corrected, distance, count as u64)
    }

    /// Corrected form of `text`.
    ///
    /// Never fails: tokens without a dictionary match inside the edit budget
    /// are kept as written, and text without any token is returned as is.
    /// Otherwise tokens are joined with single spaces.
    pub fn correct(&self, text: &str, max_edit_distance: usize) -> String {
        self.lookup_compound(text, max_edit_distance).term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(words: &[(&str, u64)], pairs: &[(&str, u64)]) -> Corrector {
        let mut c = Corrector::new(&Config::default());
        for (w, n) in words {
            c.create_entry(*w, *n);
        }
        for (k, n) in pairs {
            c.create_bigram(*k, *n);
        }
        c
    }

    #[test]
    fn lookup_exact_match_wins() {
        let c = corrector(&[("salt", 10), ("malt", 50)], &[]);
        let s = c.lookup("salt", Verbosity::Top, 2);
        assert_eq!(s, vec![Suggestion::new("salt", 0, 10)]);
    }

    #[test]
    fn lookup_top_prefers_higher_count_at_same_distance() {
        let c = corrector(&[("salt", 10), ("malt", 50)], &[]);
        let s = c.lookup("xalt", Verbosity::Top, 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].term, "malt");
        assert_eq!(s[0].distance, 1);
    }

    #[test]
    fn lookup_closest_keeps_all_at_best_distance() {
        let c = corrector(&[("salt", 10), ("malt", 50), ("sat", 5)], &[]);
        let s = c.lookup("xalt", Verbosity::Closest, 2);
        let terms: Vec<&str> = s.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["malt", "salt"]);
    }

    #[test]
    fn lookup_all_includes_farther_terms() {
        let c = corrector(&[("salt", 10), ("malt", 50), ("sat", 5)], &[]);
        let s = c.lookup("salt", Verbosity::All, 2);
        assert_eq!(s[0], Suggestion::new("salt", 0, 10));
        assert!(s.iter().any(|x| x.term == "malt" && x.distance == 1));
        assert!(s.iter().any(|x| x.term == "sat" && x.distance == 1));
    }

    #[test]
    fn lookup_respects_bound_and_clamps() {
        let c = corrector(&[("gelatin", 10)], &[]);
        assert!(c.lookup("gelxxxn", Verbosity::Top, 2).is_empty());
        assert_eq!(c.lookup("gelatn", Verbosity::Top, 1)[0].term, "gelatin");
        // asking for more than the index supports is not an error
        assert_eq!(c.lookup("glatn", Verbosity::Top, 9)[0].distance, 2);
        assert!(c.lookup("gelatn", Verbosity::Top, 0).is_empty());
    }

    #[test]
    fn lookup_beyond_prefix_length() {
        let c = corrector(&[("maltodextrin", 10)], &[]);
        let s = c.lookup("maltodextrn", Verbosity::Top, 2);
        assert_eq!(s[0].term, "maltodextrin");
        let s = c.lookup("naltodextrin", Verbosity::Top, 2);
        assert_eq!(s[0].term, "maltodextrin");
    }

    #[test]
    fn bigram_breaks_ties_after_previous_term() {
        let c = corrector(
            &[("night", 10), ("oil", 30), ("owl", 30)],
            &[("night owl", 5)],
        );
        assert_eq!(c.correct("night oxl", 2), "night owl");
        // without context the lexicographic order decides
        assert_eq!(c.correct("oxl", 2), "oil");
    }

    #[test]
    fn below_threshold_terms_are_not_indexed() {
        let mut cfg = Config::default();
        cfg.count_threshold = 5;
        let mut c = Corrector::new(&cfg);
        assert!(!c.create_entry("rare", 2));
        assert!(c.create_entry("common", 9));
        assert_eq!(c.count("rare"), None);
        assert_eq!(c.stats().below_threshold, 1);
        assert_eq!(c.stats().longest_term, 6);
        assert_eq!(c.stats().corpus_count, 9);
    }

    #[test]
    fn prefix_length_is_raised_above_distance() {
        let mut cfg = Config::default();
        cfg.prefix_length = 2;
        let c = Corrector::new(&cfg);
        assert_eq!(c.config().prefix_length, 3);
    }

    #[test]
    fn output_is_single_spaced() {
        let c = corrector(&[("salt", 10), ("and", 50)], &[]);
        assert_eq!(c.correct("zzqx   wvvk", 2), "zzqx wvvk");
        assert_eq!(c.correct("salt  and\n", 2), "salt and");
        assert_eq!(c.correct("salt  annd\n", 2), "salt and");
        // no token at all: returned as given
        assert_eq!(c.correct("\t", 2), "\t");
    }

    #[test]
    fn punctuation_is_kept_around_corrections() {
        let c = corrector(&[("gelatin", 10), ("sugar", 50), ("salt", 40)], &[]);
        assert_eq!(c.correct("(gelatn),", 2), "(gelatin),");
        assert_eq!(c.correct("sugar, salt.", 2), "sugar, salt.");
        assert_eq!(c.correct("suger, - salt", 2), "sugar, - salt");
    }

    #[test]
    fn punctuation_can_be_looked_up_as_written() {
        let mut cfg = Config::default();
        cfg.strip_punctuation = false;
        let mut c = Corrector::new(&cfg);
        c.create_entry("gelatin", 10);
        assert_eq!(c.correct("(gelatn),", 2), "(gelatn),");
    }

    #[test]
    fn punctuation_blocks_merging() {
        let c = corrector(&[("base", 50), ("ball", 50), ("baseball", 100)], &[]);
        assert_eq!(c.correct("base ball", 2), "baseball");
        assert_eq!(c.correct("base, ball", 2), "base, ball");
    }

    #[test]
    fn non_words_pass_through() {
        let mut cfg = Config::default();
        cfg.ignore_non_words = true;
        let mut c = Corrector::new(&cfg);
        c.create_entry("e", 100);
        c.create_entry("salt", 100);
        assert_eq!(c.correct("E621 salt", 2), "E621 salt");
    }

    #[test]
    fn casing_is_transferred_when_enabled() {
        let mut cfg = Config::default();
        cfg.transfer_casing = true;
        let mut c = Corrector::new(&cfg);
        c.create_entry("sugar", 100);
        c.create_entry("salt", 100);
        assert_eq!(c.correct("SUGR Salt", 2), "SUGAR Salt");
    }

    #[test]
    fn splitting_and_merging_can_be_disabled() {
        let mut cfg = Config::default();
        cfg.split_tokens = false;
        cfg.merge_tokens = false;
        let mut c = Corrector::new(&cfg);
        for (w, n) in [("news", 100), ("paper", 100), ("base", 50), ("ball", 50), ("baseball", 100)] {
            c.create_entry(w, n);
        }
        assert_eq!(c.correct("newspaper", 2), "newspaper");
        assert_eq!(c.correct("base ball", 2), "base ball");
    }

    #[test]
    fn compound_result_reports_distance() {
        let c = corrector(&[("the", 100), ("quick", 50)], &[("the quick", 40)]);
        let s = c.lookup_compound("teh quikc", 2);
        assert_eq!(s.term, "the quick");
        assert_eq!(s.distance, 2);
    }

    #[test]
    fn compound_distance_counts_removed_spaces() {
        let c = corrector(&[("base", 50), ("ball", 50), ("baseball", 100)], &[]);
        let s = c.lookup_compound("base ball", 2);
        assert_eq!(s.term, "baseball");
        assert_eq!(s.distance, 1);

        let c = corrector(&[("news", 100), ("paper", 90)], &[]);
        let s = c.lookup_compound("newspaper", 2);
        assert_eq!(s.term, "news paper");
        assert_eq!(s.distance, 1);
    }
}
