//! Email and phone extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").unwrap());

/// Egyptian mobile numbers: optional +20/0020 country code, optional
/// leading zero, operator prefix 10/11/12/15, then the subscriber digits
/// with optional separators between groups.
static EGYPTIAN_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(?:\+20|0020)\s?)?0?(?:10|11|12|15)[\s\-()]*\d{3,4}[\s\-()]*\d{4}").unwrap()
});

/// Fallback for any other phone shape: leading optional `+`, digits with
/// space/hyphen/parenthesis/period separators, bounded by digits.
static GENERIC_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s\-().]{6,}\d").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// First RFC-shaped address in the text, or empty.
pub fn email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Two-tier phone detection. The Egyptian tier is tried first and
/// short-circuits the generic tier, so a generic-shaped number is only
/// returned when no Egyptian-shaped one exists anywhere in the text.
pub fn phone(text: &str) -> String {
    if let Some(m) = EGYPTIAN_MOBILE.find(text) {
        return WHITESPACE_RUN
            .replace_all(m.as_str(), " ")
            .trim()
            .to_string();
    }
    if let Some(m) = GENERIC_PHONE.find(text) {
        return WHITESPACE_RUN.replace_all(m.as_str(), " ").into_owned();
    }
    String::new()
}
