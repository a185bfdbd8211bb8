//! Axum route handlers for resume ingestion and retrieval.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::ingestion::validate::validate_upload;
use crate::repositories::{employee, resume};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub resume_id: i64,
    pub message: String,
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    data: Bytes,
}

/// POST /resume/upload
///
/// Multipart fields: `file`, `name`, `email`. Each step short-circuits:
/// missing file, oversized file, unsupported type, blank name, unknown
/// employee. Employee lookup and resume insert share one transaction so a
/// concurrent employee deletion cannot orphan the new resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut name: Option<String> = None;
    let mut email: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = match field.bytes().await {
                    Ok(data) => data,
                    // Bodies past the router's hard limit die mid-read;
                    // report them as oversized, same as the validator would.
                    Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                        return Err(AppError::PayloadTooLarge)
                    }
                    Err(e) => {
                        return Err(AppError::Validation(format!("Failed to read file: {e}")))
                    }
                };
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    data,
                });
            }
            "name" => {
                name = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read name field: {e}"))
                })?);
            }
            "email" => {
                email = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read email field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation("File required".to_string()))?;
    validate_upload(file.data.len(), &file.content_type)?;

    let name = name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        return Err(AppError::Validation(
            "Valid employee name required".to_string(),
        ));
    }
    let email = email.as_deref().map(str::trim).filter(|e| !e.is_empty());

    // Lookup and insert in one transaction: the FK stays satisfiable until
    // commit even if the employee is deleted concurrently.
    let mut tx = state.db.begin().await?;

    let owner = match email {
        Some(email) => employee::find_by_email(&mut *tx, email).await?,
        None => employee::find_by_name(&mut *tx, name).await?,
    };
    let owner = owner.ok_or(AppError::EmployeeNotFound)?;

    let stored = resume::insert(&mut *tx, owner.id, &file.file_name, &file.data, Utc::now()).await?;

    tx.commit().await?;

    info!(
        resume_id = stored.id,
        employee_id = owner.id,
        file_name = %stored.file_name,
        "Resume stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            resume_id: stored.id,
            message: "Resume uploaded successfully".to_string(),
        }),
    ))
}

/// GET /resume/:id
///
/// Streams the stored bytes back unchanged, with the original file name.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let row = resume::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        row.file_name.replace(['"', '\r', '\n'], "_")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        row.file_data,
    )
        .into_response())
}
