//! Text Extractor: turns uploaded document bytes into one plain-text blob.
//!
//! Leaf component: delegates to the format-specific decoder and normalizes
//! the result. Callers decide whether a decode failure is fatal (single
//! parse) or absorbed into empty text (batch upload).

use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const WORD_LEGACY_MIME: &str = "application/msword";
pub const WORD_OOXML_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported document kinds, parsed from the declared MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    WordLegacy,
    WordOoxml,
}

impl MediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(MediaType::Pdf),
            WORD_LEGACY_MIME => Some(MediaType::WordLegacy),
            WORD_OOXML_MIME => Some(MediaType::WordOoxml),
            _ => None,
        }
    }
}

/// Extracts plain text from document bytes. The unsupported-format check in
/// [`MediaType::from_mime`] happens before this is ever reached, so the only
/// failure mode here is a decoder error on the bytes themselves.
pub fn extract_text(bytes: &[u8], media_type: MediaType) -> Result<String, AppError> {
    match media_type {
        MediaType::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Decode(format!("PDF text extraction failed: {e}"))),
        MediaType::WordLegacy | MediaType::WordOoxml => extract_word_text(bytes),
    }
}

/// Raw-text extraction for Word documents: paragraph run text joined by
/// newlines, formatting and embedded objects discarded.
fn extract_word_text(bytes: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AppError::Decode(format!("Word text extraction failed: {e}")))?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let text: String = para
                .children
                .iter()
                .filter_map(|pc| match pc {
                    docx_rs::ParagraphChild::Run(run) => Some(
                        run.children
                            .iter()
                            .filter_map(|rc| match rc {
                                docx_rs::RunChild::Text(t) => Some(t.text.as_str()),
                                _ => None,
                            })
                            .collect::<Vec<_>>()
                            .join(""),
                    ),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("");
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}
