//! Skill detection: fuzzy keyword matching with three fallback tiers.
//!
//! The per-keyword patterns are compiled once into a static table instead
//! of being rebuilt on every call; the tier semantics (word boundary, then
//! prefix token, then substring) are unchanged.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::inference::keywords::SKILL_KEYWORDS;

struct SkillPattern {
    keyword: &'static str,
    word: Regex,
    /// Token-start pattern built from the first 4 characters. None for
    /// keywords shorter than 3 characters, which skip the prefix tier.
    prefix: Option<Regex>,
}

impl SkillPattern {
    fn compile(keyword: &'static str) -> Self {
        let word = Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).unwrap();
        let head: String = keyword.chars().take(4).collect();
        let prefix = (head.chars().count() >= 3)
            .then(|| Regex::new(&format!(r"\b{}\w*", regex::escape(&head))).unwrap());
        SkillPattern {
            keyword,
            word,
            prefix,
        }
    }

    /// Tiers short-circuit: exact whole word, then prefix token, then
    /// plain substring containment.
    fn matches(&self, lower_text: &str) -> bool {
        self.word.is_match(lower_text)
            || self
                .prefix
                .as_ref()
                .is_some_and(|p| p.is_match(lower_text))
            || lower_text.contains(self.keyword)
    }
}

static SKILL_PATTERNS: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    SKILL_KEYWORDS
        .iter()
        .map(|&kw| SkillPattern::compile(kw))
        .collect()
});

/// Detected skills in keyword-list order. `lower_text` must already be
/// lowercased; the engine lowers the document once per call.
pub fn detect(lower_text: &str) -> Vec<String> {
    if lower_text.is_empty() {
        return Vec::new();
    }
    SKILL_PATTERNS
        .iter()
        .filter(|p| p.matches(lower_text))
        .map(|p| p.keyword.to_string())
        .collect()
}

/// Union of caller-supplied and detected skills: caller entries first with
/// their original casing preserved, detected entries after, deduplicated
/// by exact string equality. A caller-supplied "JavaScript" and a detected
/// "javascript" are distinct entries and both survive.
pub fn merge(caller_supplied: &[String], detected: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    caller_supplied
        .iter()
        .cloned()
        .chain(detected)
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
