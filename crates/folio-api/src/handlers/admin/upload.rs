//! Multipart image upload handlers.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use folio_core::error::AppError;
use folio_service::upload::{BatchUploadReport, UploadFile, UploadedImage};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// Most files accepted in one batch request.
pub const MAX_BATCH_FILES: usize = 10;

fn multipart_error(err: MultipartError, max_bytes: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::validation(format!(
            "File too large. Maximum size is {}MB.",
            max_bytes / (1024 * 1024)
        ))
    } else {
        AppError::validation(format!("Invalid upload: {}", err.body_text()))
    }
}

/// Read every file field whose name is in `names`.
async fn read_files(
    multipart: &mut Multipart,
    names: &[&str],
    limit: usize,
    max_bytes: u64,
) -> Result<Vec<UploadFile>, AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if !field.name().is_some_and(|n| names.contains(&n)) {
            continue;
        }
        if files.len() == limit {
            return Err(AppError::validation(format!(
                "Too many files. Maximum is {limit} per upload."
            )));
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;
        files.push(UploadFile {
            file_name,
            content_type,
            data,
        });
    }
    Ok(files)
}

/// POST /api/admin/upload (multipart field `file`)
pub async fn upload_single(
    State(state): State<AppState>,
    _admin: AdminUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadedImage>>), ApiError> {
    let max_bytes = state.uploads.max_bytes();
    let file = read_files(&mut multipart, &["file"], 1, max_bytes)
        .await?
        .pop()
        .ok_or_else(|| AppError::validation("No file provided"))?;

    let uploaded = state.uploads.upload(file).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(uploaded))))
}

/// POST /api/admin/upload/batch (multipart fields `files`)
pub async fn upload_batch(
    State(state): State<AppState>,
    _admin: AdminUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<BatchUploadReport>>, ApiError> {
    let max_bytes = state.uploads.max_bytes();
    let files = read_files(&mut multipart, &["files", "file"], MAX_BATCH_FILES, max_bytes).await?;
    if files.is_empty() {
        return Err(AppError::validation("No files provided").into());
    }

    Ok(Json(ApiResponse::ok(state.uploads.upload_batch(files).await)))
}
