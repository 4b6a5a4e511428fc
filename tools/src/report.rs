//! Analysis result of one label text: what was read, what it was corrected
//! to, and which watch-lists matched.

use std::fmt;

use anyhow::{bail, Result};
use labelcheck_core::{Corrector, Report, WatchLists};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub raw: String,
    pub corrected: String,
    pub watchlists: Report,
}

impl AnalysisReport {
    /// Correct `raw` and scan the corrected text.
    ///
    /// Text without any word is refused: an empty report would read as a
    /// clean label.
    pub fn analyze(
        corrector: &Corrector,
        lists: &WatchLists,
        raw: &str,
        max_edit_distance: usize,
    ) -> Result<Self> {
        if raw.trim().is_empty() {
            bail!("no text detected in the input");
        }
        let corrected = corrector.correct(raw, max_edit_distance);
        let watchlists = lists.report(&corrected);
        Ok(Self {
            raw: raw.to_string(),
            corrected,
            watchlists,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original:  {}", self.raw)?;
        writeln!(f, "Corrected: {}", self.corrected)?;
        for list in &self.watchlists.lists {
            if !list.matches.is_empty() {
                writeln!(f, "{} ingredients detected: {}", list.label, list.matches.join(", "))?;
            } else if list.clean.is_empty() {
                writeln!(f, "No {} ingredients detected.", list.label)?;
            } else {
                writeln!(
                    f,
                    "No {} ingredients detected. The product appears to be {}.",
                    list.label, list.clean
                )?;
            }
        }
        Ok(())
    }
}

/// Lines of OCR output joined into one text with single spaces. Blank lines
/// are dropped.
pub fn join_lines(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelcheck_core::Config;
    use std::io::Cursor;

    fn fixture() -> (Corrector, WatchLists) {
        let corrector = Corrector::from_readers(
            Cursor::new("sugar 80\ncorn 40\nsyrup 30\ngelatin 20\nsalt 70\n"),
            Cursor::new("corn syrup 25\n"),
            &Config::default(),
        )
        .unwrap();
        let lists = WatchLists::from_toml_str(
            r#"
            [[list]]
            name = "religious-dietary"
            label = "Haram"
            clean = "halal"
            terms = ["gelatin"]

            [[list]]
            name = "nutritional-concern"
            label = "Unhealthy"
            terms = ["corn syrup"]
            "#,
        )
        .unwrap();
        (corrector, lists)
    }

    #[test]
    fn matches_are_found_after_correction() {
        let (c, wl) = fixture();
        let r = AnalysisReport::analyze(&c, &wl, "sugar corn syrop gelatln", 2).unwrap();
        assert_eq!(r.corrected, "sugar corn syrup gelatin");
        assert_eq!(r.watchlists.list("religious-dietary").unwrap().matches, vec!["gelatin"]);
        assert_eq!(r.watchlists.list("nutritional-concern").unwrap().matches, vec!["corn syrup"]);
    }

    #[test]
    fn text_output_lists_every_label() {
        let (c, wl) = fixture();
        let r = AnalysisReport::analyze(&c, &wl, "salt", 2).unwrap();
        let text = r.to_string();
        assert!(text.contains("Corrected: salt"));
        assert!(text.contains("No Haram ingredients detected. The product appears to be halal."));
        assert!(text.contains("No Unhealthy ingredients detected.\n"));
    }

    #[test]
    fn text_output_names_matches() {
        let (c, wl) = fixture();
        let r = AnalysisReport::analyze(&c, &wl, "corn syrup", 2).unwrap();
        assert!(r.to_string().contains("Unhealthy ingredients detected: corn syrup"));
    }

    #[test]
    fn blank_input_is_refused() {
        let (c, wl) = fixture();
        let blank_ocr = join_lines("\n \n");
        for raw in ["", "   ", blank_ocr.as_str()] {
            let err = AnalysisReport::analyze(&c, &wl, raw, 2).unwrap_err();
            assert!(err.to_string().contains("no text detected"));
        }
    }

    #[test]
    fn json_output_parses_back() {
        let (c, wl) = fixture();
        let r = AnalysisReport::analyze(&c, &wl, "gelatin", 2).unwrap();
        let back: AnalysisReport = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn ocr_lines_are_joined() {
        assert_eq!(join_lines("INGREDIENTS:\n  sugar,\n\ncorn syrup\r\n"), "INGREDIENTS: sugar, corn syrup");
        assert_eq!(join_lines(""), "");
    }
}
