use serde::{Deserialize, Serialize};

use crate::models::profile::CandidateProfile;

/// One intake record: the inferred profile plus the file metadata the
/// downstream persistence layer merges into its stored row. Storage path
/// and URL are assigned by that layer, not here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvRecord {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub original_name: String,
    pub file_size: usize,
    pub mime_type: String,
    pub folder: String,
    pub status: String,
    pub age: String,
    pub notes: String,
}

/// Per-file metadata overrides supplied in the batch upload's `meta` part,
/// keyed by original filename.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Outcome of one file in a batch upload. A failed sibling never aborts the
/// rest of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    pub file: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv: Option<CvRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_meta_accepts_partial_objects() {
        let meta: FileMeta =
            serde_json::from_str(r#"{"candidateName": "Sara Ali", "skills": ["React"]}"#).unwrap();
        assert_eq!(meta.candidate_name.as_deref(), Some("Sara Ali"));
        assert_eq!(meta.skills.as_deref(), Some(&["React".to_string()][..]));
        assert!(meta.folder.is_none());
    }

    #[test]
    fn test_cv_record_flattens_profile() {
        let record = CvRecord {
            profile: CandidateProfile {
                candidate_name: "Unknown".to_string(),
                email: String::new(),
                phone: String::new(),
                skills: vec![],
                experience_years: String::new(),
                education: vec![],
                languages: vec![],
            },
            original_name: "cv.pdf".to_string(),
            file_size: 1024,
            mime_type: "application/pdf".to_string(),
            folder: "general".to_string(),
            status: "new".to_string(),
            age: String::new(),
            notes: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        // Profile fields sit at the top level of the record, not nested.
        assert_eq!(json["candidateName"], "Unknown");
        assert_eq!(json["originalName"], "cv.pdf");
        assert!(json.get("profile").is_none());
    }

    #[test]
    fn test_upload_outcome_omits_absent_sides() {
        let failure = UploadOutcome {
            file: "broken.pdf".to_string(),
            success: false,
            cv: None,
            error: Some("Decode failure".to_string()),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("cv").is_none());
        assert_eq!(json["error"], "Decode failure");
    }
}
