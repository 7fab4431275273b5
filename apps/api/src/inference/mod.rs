//! Field Inference Engine: runs the fixed set of heuristic extractors
//! over extracted text and assembles a structured profile.
//!
//! Every extractor is pure and order-independent; only assembly order
//! affects field order in the output. The same text and overrides always
//! produce byte-identical profiles.

pub mod contact;
pub mod education;
pub mod experience;
pub mod keywords;
pub mod language;
pub mod name;
pub mod skills;

use crate::models::profile::{CandidateProfile, ParsedCv};

/// Caller-supplied overrides for the batch-upload inference mode. An
/// override, when present and non-empty, wins over detection for that
/// field.
#[derive(Debug, Clone, Default)]
pub struct BatchOverrides {
    pub candidate_name: Option<String>,
    /// Original upload filename, used for name derivation before the text
    /// heuristic is consulted.
    pub original_filename: String,
    pub skills: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Single-document parse mode: strict name heuristic over the document
/// head, keyword-only skills, first-match education, no languages.
pub fn infer_single(text: &str) -> ParsedCv {
    let lower = text.to_lowercase();
    ParsedCv {
        name: name::from_header_lines(text),
        email: contact::email(text),
        phone: contact::phone(text),
        skills: skills::detect(&lower),
        experience_years: experience::years(&lower),
        education: education::first_match_line(text),
    }
}

/// Batch-upload mode: override-aware name/email/phone, merged skills,
/// collect-all education, languages computed. The name may come back
/// empty; the record assembler owns the "Unknown" fallback.
pub fn infer_batch(text: &str, overrides: &BatchOverrides) -> CandidateProfile {
    let lower = text.to_lowercase();

    let candidate_name = overrides
        .candidate_name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| non_empty(name::from_filename(&overrides.original_filename)))
        .or_else(|| non_empty(name::from_text_head(text)))
        .unwrap_or_default();

    let email = overrides
        .email
        .clone()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| contact::email(text));
    let phone = overrides
        .phone
        .clone()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| contact::phone(text));

    CandidateProfile {
        candidate_name,
        email,
        phone,
        skills: skills::merge(&overrides.skills, skills::detect(&lower)),
        experience_years: experience::years(&lower),
        education: education::collect_all(&lower),
        languages: language::detect(&lower),
    }
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE_CV: &str = "Jane Smith\n\
        Software Engineer\n\
        jane.smith@example.com\n\
        010-1234-5678\n\
        5 years javascript react experience\n\
        Bachelor degree in Computer Science";

    #[test]
    fn test_single_parse_end_to_end() {
        let parsed = infer_single(JANE_CV);
        assert_eq!(parsed.name, "Jane Smith");
        assert_eq!(parsed.email, "jane.smith@example.com");
        assert_eq!(parsed.phone, "010-1234-5678");
        assert!(parsed.skills.contains(&"javascript".to_string()));
        assert!(parsed.skills.contains(&"react".to_string()));
        assert_eq!(parsed.experience_years, "5");
        assert!(parsed.education.contains("degree"));
    }

    #[test]
    fn test_single_parse_is_deterministic() {
        assert_eq!(infer_single(JANE_CV), infer_single(JANE_CV));
    }

    #[test]
    fn test_batch_is_deterministic() {
        let overrides = BatchOverrides {
            candidate_name: None,
            original_filename: "jane_smith.pdf".to_string(),
            skills: vec!["Rust".to_string()],
            email: None,
            phone: None,
        };
        assert_eq!(
            infer_batch(JANE_CV, &overrides),
            infer_batch(JANE_CV, &overrides)
        );
    }

    #[test]
    fn test_batch_name_prefers_override() {
        let overrides = BatchOverrides {
            candidate_name: Some("Sara Ali".to_string()),
            original_filename: "John_Doe_2023.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.candidate_name, "Sara Ali");
    }

    #[test]
    fn test_batch_name_falls_back_to_filename() {
        let overrides = BatchOverrides {
            original_filename: "John_Doe_2023.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.candidate_name, "John Doe");
    }

    #[test]
    fn test_batch_name_falls_back_to_text_head() {
        // A filename of pure noise collapses to nothing, so the two-token
        // line heuristic takes over.
        let overrides = BatchOverrides {
            original_filename: "12345.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.candidate_name, "Jane Smith");
    }

    #[test]
    fn test_batch_name_empty_when_all_sources_dry() {
        let overrides = BatchOverrides {
            original_filename: "9.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch("", &overrides);
        assert_eq!(profile.candidate_name, "");
    }

    #[test]
    fn test_batch_skills_union_keeps_both_casings() {
        let overrides = BatchOverrides {
            original_filename: "cv.pdf".to_string(),
            skills: vec!["Python".to_string()],
            ..Default::default()
        };
        let profile = infer_batch("python and javascript work", &overrides);
        assert!(profile.skills.contains(&"Python".to_string()));
        assert!(profile.skills.contains(&"python".to_string()));
        // Caller-supplied entries come before every detected entry.
        assert_eq!(profile.skills[0], "Python");
    }

    #[test]
    fn test_batch_email_override_wins_over_detection() {
        let overrides = BatchOverrides {
            original_filename: "cv.pdf".to_string(),
            email: Some("override@example.com".to_string()),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.email, "override@example.com");
    }

    #[test]
    fn test_batch_empty_email_override_is_ignored() {
        let overrides = BatchOverrides {
            original_filename: "cv.pdf".to_string(),
            email: Some(String::new()),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.email, "jane.smith@example.com");
    }

    #[test]
    fn test_batch_education_collects_keywords() {
        let overrides = BatchOverrides {
            original_filename: "cv.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch(JANE_CV, &overrides);
        assert_eq!(profile.education, vec!["bachelor", "degree"]);
    }

    #[test]
    fn test_batch_languages_computed() {
        let overrides = BatchOverrides {
            original_filename: "cv.pdf".to_string(),
            ..Default::default()
        };
        let profile = infer_batch("Languages: English, العربية", &overrides);
        assert_eq!(profile.languages, vec!["english", "العربية"]);
    }

    #[test]
    fn test_adversarial_text_yields_empty_profile_not_error() {
        let junk = "\u{0}\u{1}@@@@ ++++ ----\n\n\n....";
        let profile = infer_batch(junk, &BatchOverrides::default());
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, "");
        assert!(profile.education.is_empty());
        assert!(profile.languages.is_empty());
    }
}
