//! Bounded edit distance.
//!
//! Candidates produced by the delete index only share a deletion variant with
//! the query, so each one is confirmed with a real edit distance. The
//! computation gives up as soon as every cell of a row exceeds the bound,
//! which keeps the per-candidate cost proportional to the bound rather than to
//! the product of the string lengths.

use serde::{Deserialize, Serialize};

/// Which edit distance confirms a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceAlgorithm {
    /// Insertions, deletions, substitutions and adjacent transpositions
    /// (optimal string alignment). "teh" -> "the" costs 1.
    #[default]
    DamerauOsa,
    /// Insertions, deletions and substitutions only.
    Levenshtein,
}

impl DistanceAlgorithm {
    /// Distance between `a` and `b`, or `None` if it exceeds `max`.
    pub fn distance(self, a: &[char], b: &[char], max: usize) -> Option<usize> {
        // Common prefix and suffix never contribute.
        let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        let (a, b) = (&a[prefix..], &b[prefix..]);
        let suffix = a
            .iter()
            .rev()
            .zip(b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

        if a.len().abs_diff(b.len()) > max {
            return None;
        }
        if a.is_empty() || b.is_empty() {
            let d = a.len().max(b.len());
            return (d <= max).then_some(d);
        }

        let m = b.len();
        let mut before: Vec<usize> = vec![0; m + 1];
        let mut prev: Vec<usize> = (0..=m).collect();
        let mut cur: Vec<usize> = vec![0; m + 1];

        for i in 1..=a.len() {
            cur[0] = i;
            let mut row_min = cur[0];
            for j in 1..=m {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut v = (prev[j] + 1).min(cur[j - 1] + 1).min(prev[j - 1] + cost);
                if self == DistanceAlgorithm::DamerauOsa
                    && i > 1
                    && j > 1
                    && a[i - 1] == b[j - 2]
                    && a[i - 2] == b[j - 1]
                {
                    v = v.min(before[j - 2] + 1);
                }
                cur[j] = v;
                row_min = row_min.min(v);
            }
            if row_min > max {
                return None;
            }
            std::mem::swap(&mut before, &mut prev);
            std::mem::swap(&mut prev, &mut cur);
        }

        let d = prev[m];
        (d <= max).then_some(d)
    }

    /// Convenience wrapper over `&str`.
    pub fn distance_str(self, a: &str, b: &str, max: usize) -> Option<usize> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        self.distance(&a, &b, max)
    }
}
