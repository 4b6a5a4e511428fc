//! Ranked correction candidates.
//!
//! This module provides:
//! - `Suggestion`: a candidate term with its edit distance and frequency
//! - `Verbosity`: how many candidates a single-term lookup returns

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A candidate correction.
///
/// Ordering is the ranking order: smaller distance first, then higher count,
/// then lexicographic term so that sorting is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
    pub count: u64,
}

impl Suggestion {
    pub fn new<T: Into<String>>(term: T, distance: usize, count: u64) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            count,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Controls how many suggestions a single-term lookup keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only the best suggestion (smallest distance, highest count).
    #[default]
    Top,
    /// Every suggestion at the smallest distance found.
    Closest,
    /// Every suggestion within the distance bound. Slowest.
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_distance_then_count() {
        let mut v = vec![
            Suggestion::new("sugars", 1, 900),
            Suggestion::new("sugar", 0, 10),
            Suggestion::new("cigar", 1, 5000),
        ];
        v.sort();
        assert_eq!(v[0].term, "sugar");
        assert_eq!(v[1].term, "cigar");
        assert_eq!(v[2].term, "sugars");
    }

    #[test]
    fn ties_break_on_term() {
        let mut v = vec![Suggestion::new("salt", 1, 3), Suggestion::new("malt", 1, 3)];
        v.sort();
        assert_eq!(v[0].term, "malt");
    }
}
