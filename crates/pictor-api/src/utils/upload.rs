//! Multipart form extraction for media uploads.

use axum::extract::Multipart;
use bytes::Bytes;
use pictor_core::AppError;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The file pulled out of a multipart request, plus the optional description
/// field that may accompany it.
#[derive(Debug)]
pub struct UploadPayload {
    pub data: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
    pub description: Option<String>,
}

/// Drains a multipart request, extracting the required `file` part and the
/// optional `description` part. Unknown parts are skipped; more than one
/// `file` part is rejected.
pub async fn extract_upload(multipart: &mut Multipart) -> Result<UploadPayload, AppError> {
    let mut file: Option<(Bytes, String, Option<String>)> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                if file.is_some() {
                    return Err(AppError::Validation(
                        "Multiple file fields in upload".to_string(),
                    ));
                }

                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {}", e)))?;

                file = Some((data, content_type, file_name));
            }
            Some("description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read description: {}", e))
                })?;
                description = Some(text);
            }
            _ => {}
        }
    }

    let (data, content_type, file_name) =
        file.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    Ok(UploadPayload {
        data,
        content_type,
        file_name,
        description,
    })
}
