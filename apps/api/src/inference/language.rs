//! Language extraction: substring hits against the merged English/Arabic
//! keyword list, collected in list order.

use crate::inference::keywords::LANGUAGE_KEYWORDS;

pub fn detect(lower_text: &str) -> Vec<String> {
    LANGUAGE_KEYWORDS
        .iter()
        .filter(|kw| lower_text.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}
