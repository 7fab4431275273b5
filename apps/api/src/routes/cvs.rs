//! CV intake endpoints: single-document parse and batch upload.
//!
//! The two paths intentionally treat decode failures differently. The
//! parse endpoint reports them; the upload endpoint absorbs them into an
//! empty-text profile so one corrupt file never sinks its batch siblings.

use std::collections::HashMap;

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::{extract_text, MediaType};
use crate::inference::{self, BatchOverrides};
use crate::models::cv::{CvRecord, FileMeta, UploadOutcome};
use crate::models::profile::ParsedCv;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub data: ParsedCv,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub results: Vec<UploadOutcome>,
}

struct UploadedFile {
    original_name: String,
    mime_type: String,
    bytes: Bytes,
}

#[derive(Default)]
struct UploadForm {
    files: Vec<UploadedFile>,
    /// Per-file overrides keyed by original filename, from the `meta` part.
    meta: HashMap<String, FileMeta>,
    candidate_name: Option<String>,
    skills: Option<String>,
    folder: Option<String>,
    status: Option<String>,
    age: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    notes: Option<String>,
}

/// POST /api/v1/cvs/parse
///
/// Single-file preview parse. Unsupported or undecodable documents are
/// reported to the caller rather than swallowed.
pub async fn handle_parse(mut multipart: Multipart) -> Result<Json<ParseResponse>, AppError> {
    let mut uploaded: Option<UploadedFile> = None;

    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() == Some("file") {
            uploaded = Some(read_file_field(field).await?);
            break;
        }
    }

    let file = uploaded.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let media_type = MediaType::from_mime(&file.mime_type)
        .ok_or_else(|| AppError::UnsupportedFormat(file.mime_type.clone()))?;

    let text = extract_text(&file.bytes, media_type)?;
    let data = inference::infer_single(&text);
    info!(file = %file.original_name, "parsed CV");

    Ok(Json(ParseResponse {
        success: true,
        data,
    }))
}

/// POST /api/v1/cvs/upload
///
/// Batch upload. Files process sequentially and independently; each one
/// contributes a success or failure entry to the results list.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let form = read_upload_form(&mut multipart).await?;
    if form.files.is_empty() {
        return Err(AppError::Validation("No file uploaded".to_string()));
    }
    info!(count = form.files.len(), "files received");

    let results = form
        .files
        .iter()
        .map(|file| process_upload(file, &form))
        .collect();

    Ok(Json(UploadResponse {
        success: true,
        results,
    }))
}

fn process_upload(file: &UploadedFile, form: &UploadForm) -> UploadOutcome {
    let meta = form
        .meta
        .get(&file.original_name)
        .cloned()
        .unwrap_or_default();

    let media_type = match MediaType::from_mime(&file.mime_type) {
        Some(mt) => mt,
        None => {
            return UploadOutcome {
                file: file.original_name.clone(),
                success: false,
                cv: None,
                error: Some(format!("Unsupported format: {}", file.mime_type)),
            }
        }
    };

    // Decode failures are non-fatal on this path: log and infer from
    // empty text so the sibling files still go through.
    let text = match extract_text(&file.bytes, media_type) {
        Ok(text) => text,
        Err(e) => {
            warn!(file = %file.original_name, "text extraction failed: {e}");
            String::new()
        }
    };

    let overrides = BatchOverrides {
        candidate_name: meta.candidate_name.or_else(|| form.candidate_name.clone()),
        original_filename: file.original_name.clone(),
        skills: meta
            .skills
            .unwrap_or_else(|| split_skills(form.skills.as_deref())),
        email: meta.email.or_else(|| form.email.clone()),
        phone: meta.phone.or_else(|| form.phone.clone()),
    };

    let mut profile = inference::infer_batch(&text, &overrides);
    if profile.candidate_name.is_empty() {
        profile.candidate_name = "Unknown".to_string();
    }

    let record = CvRecord {
        profile,
        original_name: file.original_name.clone(),
        file_size: file.bytes.len(),
        mime_type: file.mime_type.clone(),
        folder: meta
            .folder
            .or_else(|| form.folder.clone())
            .unwrap_or_else(|| "general".to_string()),
        status: meta
            .status
            .or_else(|| form.status.clone())
            .unwrap_or_else(|| "new".to_string()),
        age: meta
            .age
            .or_else(|| form.age.clone())
            .unwrap_or_default(),
        notes: form.notes.clone().unwrap_or_default(),
    };

    UploadOutcome {
        file: file.original_name.clone(),
        success: true,
        cv: Some(record),
        error: None,
    }
}

async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = next_field(multipart).await? {
        match field.name() {
            Some("files") | Some("file") => form.files.push(read_file_field(field).await?),
            Some("meta") => {
                // Malformed metadata degrades to "no overrides" rather
                // than failing the whole batch.
                let raw = read_text_field(field).await?;
                form.meta = serde_json::from_str(&raw).unwrap_or_default();
            }
            Some("candidateName") => form.candidate_name = Some(read_text_field(field).await?),
            Some("skills") => form.skills = Some(read_text_field(field).await?),
            Some("folder") => form.folder = Some(read_text_field(field).await?),
            Some("status") => form.status = Some(read_text_field(field).await?),
            Some("age") => form.age = Some(read_text_field(field).await?),
            Some("email") => form.email = Some(read_text_field(field).await?),
            Some("phone") => form.phone = Some(read_text_field(field).await?),
            Some("notes") => form.notes = Some(read_text_field(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

async fn next_field(
    multipart: &mut Multipart,
) -> Result<Option<axum::extract::multipart::Field<'_>>, AppError> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))
}

async fn read_file_field(
    field: axum::extract::multipart::Field<'_>,
) -> Result<UploadedFile, AppError> {
    let original_name = field.file_name().unwrap_or_default().to_string();
    let mime_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read file part: {e}")))?;
    Ok(UploadedFile {
        original_name,
        mime_type,
        bytes,
    })
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))
}

fn split_skills(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
