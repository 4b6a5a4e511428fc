//! Token helpers for compound correction.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Digits anywhere, or an all-caps acronym of two or more letters.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:.*\d.*|\p{Lu}{2,})$").expect("valid non-word pattern"));

/// Lookup key for a raw token: NFC-normalized, optionally lowercased.
pub fn lookup_key(raw: &str, lowercase: bool) -> String {
    let normalized: String = raw.nfc().collect();
    if lowercase {
        normalized.to_lowercase()
    } else {
        normalized
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Split a token into leading punctuation, the word, and trailing
/// punctuation. A token without letters or digits comes back as all lead.
pub fn split_affixes(raw: &str) -> (&str, &str, &str) {
    let start = raw.find(is_word_char).unwrap_or(raw.len());
    let (lead, rest) = raw.split_at(start);
    let word = rest.trim_end_matches(|c: char| !is_word_char(c));
    let (word, trail) = rest.split_at(word.len());
    (lead, word, trail)
}

/// Tokens that should never be corrected: numbers, codes such as `E621` or
/// `B12`, and acronyms such as `MSG`.
pub fn is_non_word(raw: &str) -> bool {
    NON_WORD.is_match(raw)
}

/// Give `term` the casing pattern of `source`.
///
/// Only three patterns are recognized: all upper case, leading capital, and
/// anything else (left as is).
pub fn transfer_casing(source: &str, term: &str) -> String {
    let letters: Vec<char> = source.chars().filter(|c| c.is_alphabetic()).collect();
    let Some(&first) = letters.first() else {
        return term.to_string();
    };

    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return term.to_uppercase();
    }

    if first.is_uppercase() {
        let mut chars = term.chars();
        return match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    term.to_string()
}
