//! Education extraction: two modes, one per entry point.
//!
//! The single-parse path wants the first matching line as a display string;
//! the batch path wants every keyword that appears anywhere in the text.
//! Neither mode replaces the other.

use crate::inference::keywords::EDUCATION_KEYWORDS;

/// First line containing any education keyword (case-insensitive
/// substring), returned whole with its original casing. Empty if no line
/// matches.
pub fn first_match_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let lower = line.to_lowercase();
            EDUCATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(str::to_string)
        .unwrap_or_default()
}

/// Every keyword present anywhere in the lowered text, in list order.
/// Overlapping keywords both appear, so duplicates across related terms
/// are possible by design.
pub fn collect_all(lower_text: &str) -> Vec<String> {
    EDUCATION_KEYWORDS
        .iter()
        .filter(|kw| lower_text.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}
