use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{
        State,
        multipart::{Multipart, MultipartRejection},
    },
};
use serde::Serialize;
use std::sync::Arc;

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";
const MAX_FILE_NAME_BYTES: usize = 255;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_path: String,
}

/// # POST /upload_file/
/// Stores the `file` field in the upload directory, replacing any file
/// already stored under the same name.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = safe_file_name(field.file_name());
        let bytes = field.bytes().await?;

        tokio::fs::create_dir_all(&state.uploads.dir).await?;
        let path = state.uploads.dir.join(&file_name);
        tokio::fs::write(&path, &bytes).await?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Stored upload.");
        return Ok(Json(UploadResponse {
            file_path: path.display().to_string(),
        }));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

/// Derives a storage name from a client-supplied filename.
///
/// Only the last path component survives, restricted to `[A-Za-z0-9._-]`
/// with leading dots removed. Falls back to a random name when nothing
/// usable is left.
pub fn safe_file_name(original: Option<&str>) -> String {
    let cleaned: String = original
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let mut cleaned = cleaned.trim_start_matches('.').to_string();
    // ASCII only at this point, so any byte index is a char boundary.
    cleaned.truncate(MAX_FILE_NAME_BYTES);

    if cleaned.is_empty() {
        format!("upload-{}", uuid::Uuid::new_v4())
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ordinary_names() {
        assert_eq!(safe_file_name(Some("report-2024_v2.pdf")), "report-2024_v2.pdf");
    }

    #[test]
    fn strips_directories_and_traversal() {
        assert_eq!(safe_file_name(Some("../../etc/passwd")), "passwd");
        assert_eq!(safe_file_name(Some("C:\\Users\\me\\notes.txt")), "notes.txt");
        assert_eq!(safe_file_name(Some(".hidden")), "hidden");
    }

    #[test]
    fn drops_unsafe_characters() {
        assert_eq!(safe_file_name(Some("my file;rm -rf.txt")), "myfilerm-rf.txt");
    }

    #[test]
    fn falls_back_to_generated_name() {
        assert!(safe_file_name(None).starts_with("upload-"));
        assert!(safe_file_name(Some("..")).starts_with("upload-"));
        assert!(safe_file_name(Some("dir/")).starts_with("upload-"));
    }

    #[test]
    fn truncates_long_names() {
        let long = "a".repeat(400);
        assert_eq!(safe_file_name(Some(&long)).len(), MAX_FILE_NAME_BYTES);
    }
}
