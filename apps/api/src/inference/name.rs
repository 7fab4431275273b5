//! Name extraction: two modes with different precedence rules, one per
//! entry point. Résumés conventionally put the candidate's name in the
//! first short line, but header words like "Resume" must never win.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::inference::keywords::NAME_HEADER_BLOCKLIST;

static FILENAME_EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").unwrap());
static FILENAME_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\-0-9]+").unwrap());

/// Two words of at least two letters each, Latin or Arabic script.
static TWO_TOKEN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z\x{0621}-\x{064A}]{2,}\s+[A-Za-z\x{0621}-\x{064A}]{2,}").unwrap()
});

/// Single-parse mode: scan the first 5 non-empty lines, drop common CV
/// headers, and take the first line shorter than 5 words. Empty when no
/// line qualifies; the caller decides any fallback.
pub fn from_header_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
        .find(|line| {
            let lower = line.to_lowercase();
            !NAME_HEADER_BLOCKLIST.contains(&lower.as_str()) && line.split(' ').count() < 5
        })
        .map(str::to_string)
        .unwrap_or_default()
}

/// Batch mode, step 2: derive a name from the original filename by
/// stripping the extension and collapsing runs of digits, underscores,
/// and hyphens into single spaces.
pub fn from_filename(original_name: &str) -> String {
    let stem = FILENAME_EXTENSION.replace(original_name, "");
    FILENAME_NOISE.replace_all(&stem, " ").trim().to_string()
}

/// Batch mode, step 3: look through the first 3 non-empty lines for a
/// "word word" shaped line; fall back to the first non-empty line capped
/// at 100 characters.
pub fn from_text_head(text: &str) -> String {
    let head: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(3)
        .collect();

    head.iter()
        .find(|line| TWO_TOKEN_NAME.is_match(line))
        .or_else(|| head.first())
        .map(|line| line.chars().take(100).collect())
        .unwrap_or_default()
}
