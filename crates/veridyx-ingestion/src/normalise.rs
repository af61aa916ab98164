//! Text normalization for extracted document text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref EXTRA_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Clean up raw extractor output: strip null bytes, turn form feeds into
/// newlines, collapse runs of spaces/tabs, and collapse 3+ consecutive
/// newlines to exactly two. Newlines are kept intact so blank-line paragraph
/// boundaries survive for the chunker.
pub fn normalize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != '\0')
        .map(|c| if c == '\u{0C}' { '\n' } else { c })
        .collect();

    let collapsed = HORIZONTAL_WS.replace_all(&cleaned, " ");
    EXTRA_NEWLINES
        .replace_all(&collapsed, "\n\n")
        .trim()
        .to_string()
}
