//! Resume text extraction and chunking.

pub mod handlers;

use bytes::Bytes;
use thiserror::Error;

/// Uploads yielding fewer characters than this carry no usable content.
pub const MIN_TEXT_CHARS: usize = 20;
pub const DEFAULT_CHUNK_CHARS: usize = 1200;
pub const DEFAULT_CHUNK_OVERLAP: usize = 150;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type for '{file_name}'; use PDF or TXT")]
    UnsupportedType { file_name: String },

    #[error("could not extract meaningful text from file ({chars} chars)")]
    TooShort { chars: usize },

    #[error("PDF parsing failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Detects the kind from the file extension first, then the content type.
    pub fn detect(file_name: &str, content_type: &str) -> Option<Self> {
        let name = file_name.to_lowercase();
        let ctype = content_type.to_lowercase();
        if name.ends_with(".txt") || ctype.contains("text/plain") {
            Some(DocumentKind::PlainText)
        } else if name.ends_with(".pdf") || ctype.contains("pdf") {
            Some(DocumentKind::Pdf)
        } else {
            None
        }
    }
}

/// Extracts trimmed text from an uploaded document. CPU-bound for PDFs;
/// call from a blocking task.
pub fn extract_text(file_name: &str, content_type: &str, data: &Bytes) -> Result<String, ExtractError> {
    let kind = DocumentKind::detect(file_name, content_type).ok_or_else(|| {
        ExtractError::UnsupportedType {
            file_name: file_name.to_string(),
        }
    })?;

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8_lossy(data).into_owned(),
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))?
        }
    };

    let text = text.trim().to_string();
    let chars = text.chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(ExtractError::TooShort { chars });
    }
    Ok(text)
}

/// Last index `i` in `[from, to)` where `needle` starts and fits entirely before `to`.
fn rfind_in(chars: &[char], needle: &[char], from: usize, to: usize) -> Option<usize> {
    if to < from + needle.len() {
        return None;
    }
    (from..=to - needle.len())
        .rev()
        .find(|&i| chars[i..i + needle.len()] == *needle)
}

/// Splits text into overlapping windows of at most `max_chars` characters.
///
/// Each window prefers to end at a newline, then at a sentence boundary, within
/// its last 40%. Overlap is clamped below `max_chars` so every iteration moves
/// forward. Chunks are trimmed and never empty.
pub fn smart_chunk(text: &str, max_chars: usize, overlap: usize) -> Vec<String> {
    if max_chars == 0 {
        return Vec::new();
    }
    let overlap = overlap.min(max_chars - 1);

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let chars: Vec<char> = normalized.trim().chars().collect();
    let n = chars.len();

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < n {
        let window_end = n.min(start + max_chars);
        let nice_start = (start + max_chars * 6 / 10).min(window_end);

        let break_pos = if nice_start < window_end {
            rfind_in(&chars, &['\n'], nice_start, window_end)
                .or_else(|| rfind_in(&chars, &['.', ' '], nice_start, window_end))
        } else {
            None
        };

        let cut = match break_pos {
            Some(pos) if pos > start => pos + 1,
            _ => window_end,
        };

        let chunk: String = chars[start..cut].iter().collect();
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }

        if cut >= n {
            break;
        }
        start = cut.saturating_sub(overlap).max(start + 1);
    }

    chunks
}
