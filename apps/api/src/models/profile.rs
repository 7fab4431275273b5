use serde::{Deserialize, Serialize};

/// Structured profile produced by the inference engine for the batch-upload
/// path. A pure function of the extracted text plus explicit caller
/// overrides: no clock, no randomness, no hidden state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    /// Best-effort candidate name; may be empty (the record assembler
    /// decides the "Unknown" fallback).
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    /// Caller-supplied skills first (original casing), then detected
    /// keywords in list order. Deduplicated by exact string equality only.
    pub skills: Vec<String>,
    /// Numeric string such as "5", or empty. Kept as a string so partial
    /// matches like "5+" round-trip without a lossy parse.
    pub experience_years: String,
    /// Every education keyword found anywhere in the text, in list order.
    pub education: Vec<String>,
    /// Language keyword hits, English and Arabic lists merged.
    pub languages: Vec<String>,
}

/// Profile shape returned by the single-document parse endpoint. Education
/// is the first matching line (not a keyword sequence) and languages are
/// not computed on this path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCv {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience_years: String,
    pub education: String,
}
