//! Line-oriented frequency dictionary parsing.
//!
//! Unigram lines look like `term<SEP>count`, bigram lines like
//! `term1 term2<SEP>count`. Column positions are configurable so files with
//! extra columns can be consumed unchanged. A line that does not fit the
//! format yields a `ParseWarning` and is skipped by the caller.

use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParseWarning, ResourceError, Result};
use crate::lexicon::FrequencyEntry;
use crate::word_bigram::BigramEntry;

/// Column layout of a dictionary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFormat {
    /// Field separator. A single space (the default) splits on any run of
    /// whitespace.
    pub separator: String,
    /// Column holding the term (the first term, for bigram files).
    pub term_index: usize,
    /// Column holding the count.
    pub count_index: usize,
}

impl ColumnFormat {
    /// `term count`
    pub fn unigram() -> Self {
        Self {
            separator: " ".to_string(),
            term_index: 0,
            count_index: 1,
        }
    }

    /// `term1 term2 count`
    pub fn bigram() -> Self {
        Self {
            separator: " ".to_string(),
            term_index: 0,
            count_index: 2,
        }
    }

    fn splits_on_whitespace(&self) -> bool {
        self.separator.is_empty() || self.separator == " "
    }

    fn fields<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if self.splits_on_whitespace() {
            line.split_whitespace().collect()
        } else {
            line.split(self.separator.as_str()).map(str::trim).collect()
        }
    }
}

fn column<'a>(fields: &[&'a str], column: usize, line: usize) -> std::result::Result<&'a str, ParseWarning> {
    fields
        .get(column)
        .copied()
        .ok_or(ParseWarning::MissingColumn { line, column })
}

fn count(fields: &[&str], index: usize, line: usize) -> std::result::Result<u64, ParseWarning> {
    let raw = column(fields, index, line)?;
    raw.parse::<u64>().map_err(|_| ParseWarning::InvalidCount {
        line,
        value: raw.to_string(),
    })
}

/// Parse one unigram line. Blank lines yield `Ok(None)`.
pub fn parse_unigram_line(
    text: &str,
    line: usize,
    format: &ColumnFormat,
) -> std::result::Result<Option<FrequencyEntry>, ParseWarning> {
    let text = text.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return Ok(None);
    }
    let fields = format.fields(text);
    let term = column(&fields, format.term_index, line)?;
    if term.is_empty() {
        return Err(ParseWarning::EmptyTerm { line });
    }
    let count = count(&fields, format.count_index, line)?;
    Ok(Some(FrequencyEntry::new(term, count)))
}

/// Parse one bigram line. Blank lines yield `Ok(None)`.
///
/// With the whitespace separator the key spans two columns starting at
/// `term_index`. With any other separator the key is a single column that
/// must itself contain a space.
pub fn parse_bigram_line(
    text: &str,
    line: usize,
    format: &ColumnFormat,
) -> std::result::Result<Option<BigramEntry>, ParseWarning> {
    let text = text.trim_end_matches(['\r', '\n']);
    if text.trim().is_empty() {
        return Ok(None);
    }
    let fields = format.fields(text);

    let key = if format.splits_on_whitespace() {
        let first = column(&fields, format.term_index, line)?;
        let second = column(&fields, format.term_index + 1, line)?;
        format!("{first} {second}")
    } else {
        let joined = column(&fields, format.term_index, line)?;
        let (first, second) = joined
            .split_once(' ')
            .ok_or(ParseWarning::MissingColumn {
                line,
                column: format.term_index + 1,
            })?;
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(ParseWarning::EmptyTerm { line });
        }
        format!("{first} {second}")
    };

    let count = count(&fields, format.count_index, line)?;
    Ok(Some(BigramEntry::new(key, count)))
}

/// Feed every line of `reader` to `f` with its 1-based line number.
///
/// Read failures are fatal and reported against `origin`.
pub(crate) fn for_each_line<R, F>(reader: R, origin: &Path, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str),
{
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ResourceError::read(origin, e))?;
        // A UTF-8 BOM on the first line would otherwise become part of a term.
        let line = if i == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };
        f(i + 1, line);
    }
    Ok(())
}
