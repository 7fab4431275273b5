//! Experience-years extraction. English pattern first, Arabic second,
//! first match wins; the digits round-trip as a string.

use once_cell::sync::Lazy;
use regex::Regex;

static YEARS_EN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{1,2})\+?\s*(?:years?|yrs?)").unwrap());
static YEARS_AR: Lazy<Regex> = Lazy::new(|| Regex::new(r"خبرة\s*(\d{1,2})\s*(?:سنة|سنوات)").unwrap());

pub fn years(text: &str) -> String {
    for pattern in [&*YEARS_EN, &*YEARS_AR] {
        if let Some(caps) = pattern.captures(text) {
            return caps[1].to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_years() {
        assert_eq!(years("3 years of backend work"), "3");
    }

    #[test]
    fn test_english_plus_suffix() {
        assert_eq!(years("5+ years of experience"), "5");
    }

    #[test]
    fn test_english_yr_abbreviation() {
        assert_eq!(years("12 yrs in fintech"), "12");
    }

    #[test]
    fn test_arabic_years() {
        assert_eq!(years("خبرة 7 سنوات"), "7");
    }

    #[test]
    fn test_arabic_singular_year() {
        assert_eq!(years("خبرة 1 سنة"), "1");
    }

    #[test]
    fn test_english_wins_over_arabic() {
        assert_eq!(years("خبرة 7 سنوات and 4 years abroad"), "4");
    }

    #[test]
    fn test_neither_pattern_yields_empty() {
        assert_eq!(years("a lifetime of learning"), "");
    }
}
