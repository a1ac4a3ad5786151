use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::keywords::{normalize_text, skill_set_from_text};
use crate::resume::{extract_text, smart_chunk, DEFAULT_CHUNK_CHARS, DEFAULT_CHUNK_OVERLAP};

#[derive(Debug, Serialize)]
pub struct ResumeExtractResponse {
    pub doc_id: Uuid,
    pub user_id: Option<String>,
    pub chars: usize,
    pub chunk_count: usize,
    pub chunks: Vec<String>,
    pub detected_skills: Vec<String>,
}

struct Upload {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/v1/resume/extract
///
/// Multipart form: `file` (PDF or TXT, required), `user_id` (optional, echoed back).
pub async fn handle_extract(
    mut multipart: Multipart,
) -> Result<Json<ResumeExtractResponse>, AppError> {
    let mut upload: Option<Upload> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                upload = Some(Upload {
                    file_name,
                    content_type,
                    data,
                });
            }
            Some("user_id") => {
                let value = field.text().await?;
                user_id = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    let text = tokio::task::spawn_blocking(move || {
        extract_text(&upload.file_name, &upload.content_type, &upload.data)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    let chunks = smart_chunk(&text, DEFAULT_CHUNK_CHARS, DEFAULT_CHUNK_OVERLAP);
    if chunks.is_empty() {
        return Err(AppError::Validation(
            "No chunks produced from resume text".to_string(),
        ));
    }

    let detected_skills = skill_set_from_text(&normalize_text(&text))
        .into_iter()
        .collect();
    let doc_id = Uuid::new_v4();
    let chars = text.chars().count();
    info!("Extracted resume {doc_id}: {chars} chars, {} chunks", chunks.len());

    Ok(Json(ResumeExtractResponse {
        doc_id,
        user_id,
        chars,
        chunk_count: chunks.len(),
        chunks,
        detected_skills,
    }))
}
