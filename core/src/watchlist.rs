//! Ingredient watch-lists.
//!
//! Lists are data, loaded from TOML:
//!
//! ```toml
//! [[list]]
//! name = "religious-dietary"
//! label = "Haram"
//! clean = "halal"
//! terms = ["gelatin", "lard"]
//! ```
//!
//! Scanning is case-insensitive substring containment of each term in the
//! corrected text.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// A named list of terms to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchList {
    pub name: String,
    /// Human-readable label used in reports; defaults to `name`.
    #[serde(default)]
    pub label: String,
    /// What a text without any match can be called, e.g. "halal".
    #[serde(default)]
    pub clean: String,
    pub terms: Vec<String>,
}

impl WatchList {
    pub fn new<N: Into<String>>(name: N, terms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            clean: String::new(),
            terms,
        }
    }

    pub fn label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Terms of this list found in `lowered`, which must already be lower
    /// case.
    fn matches_in<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.terms
            .iter()
            .filter(move |t| !t.is_empty() && lowered.contains(&t.to_lowercase()))
    }
}

/// A term of a list that occurs in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub list: String,
    pub label: String,
    pub term: String,
}

/// Matches grouped per list, in list order. Lists without matches are kept
/// with an empty `matches` so callers can report them as clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub lists: Vec<ListReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListReport {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub clean: String,
    pub matches: Vec<String>,
}

impl Report {
    /// True when no list matched.
    pub fn is_clean(&self) -> bool {
        self.lists.iter().all(|l| l.matches.is_empty())
    }

    pub fn list(&self, name: &str) -> Option<&ListReport> {
        self.lists.iter().find(|l| l.name == name)
    }
}

/// All configured watch-lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchLists {
    #[serde(rename = "list", default)]
    pub lists: Vec<WatchList>,
}

impl WatchLists {
    pub fn new(lists: Vec<WatchList>) -> Self {
        Self { lists }
    }

    /// Load watch-lists from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ResourceError::open(path, e))?;
        Self::from_toml_str(&content).map_err(|source| ResourceError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Every listed term contained in `text`, ignoring case.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let lowered = text.to_lowercase();
        self.lists
            .iter()
            .flat_map(|list| {
                list.matches_in(&lowered).map(move |term| Finding {
                    list: list.name.clone(),
                    label: list.label().to_string(),
                    term: term.clone(),
                })
            })
            .collect()
    }

    /// `scan` grouped per list.
    pub fn report(&self, text: &str) -> Report {
        let lowered = text.to_lowercase();
        Report {
            lists: self
                .lists
                .iter()
                .map(|list| ListReport {
                    name: list.name.clone(),
                    label: list.label().to_string(),
                    clean: list.clean.clone(),
                    matches: list.matches_in(&lowered).cloned().collect(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[list]]
        name = "religious-dietary"
        label = "Haram"
        clean = "halal"
        terms = ["gelatin", "pork", "wine vinegar"]

        [[list]]
        name = "nutritional-concern"
        terms = ["corn syrup", "high fructose corn syrup", "MSG"]
    "#;

    #[test]
    fn parses_lists() {
        let wl = WatchLists::from_toml_str(SAMPLE).unwrap();
        assert_eq!(wl.len(), 2);
        assert_eq!(wl.lists[0].label(), "Haram");
        assert_eq!(wl.lists[1].label(), "nutritional-concern");
        assert_eq!(wl.lists[0].clean, "halal");
        assert!(wl.lists[1].clean.is_empty());
    }

    #[test]
    fn scan_is_case_insensitive_substring() {
        let wl = WatchLists::from_toml_str(SAMPLE).unwrap();
        let found = wl.scan("Sugar, HIGH FRUCTOSE CORN SYRUP, beef gelatine, msg");
        let terms: Vec<&str> = found.iter().map(|f| f.term.as_str()).collect();
        assert_eq!(
            terms,
            vec!["gelatin", "corn syrup", "high fructose corn syrup", "MSG"]
        );
        assert_eq!(found[0].list, "religious-dietary");
    }

    #[test]
    fn report_keeps_clean_lists() {
        let wl = WatchLists::from_toml_str(SAMPLE).unwrap();
        let report = wl.report("water, salt");
        assert!(report.is_clean());
        assert_eq!(report.lists.len(), 2);
        assert_eq!(report.lists[0].clean, "halal");

        let report = wl.report("pork sausage");
        assert!(!report.is_clean());
        assert_eq!(
            report.list("religious-dietary").unwrap().matches,
            vec!["pork".to_string()]
        );
        assert!(report.list("nutritional-concern").unwrap().matches.is_empty());
    }

    #[test]
    fn empty_text_matches_nothing() {
        let wl = WatchLists::new(vec![WatchList::new("x", vec!["salt".into(), String::new()])]);
        assert!(wl.scan("").is_empty());
    }

    #[test]
    fn missing_file_is_resource_error() {
        assert!(matches!(
            WatchLists::load("no/such/watchlists.toml"),
            Err(ResourceError::Open { .. })
        ));
    }
}
