use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure maps to a JSON body with a single human-readable `error`
/// field. Internal detail (database messages, backend responses) is logged,
/// never leaked.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("File exceeds the 5 MiB upload limit")]
    PayloadTooLarge,

    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Resume not found")]
    ResumeNotFound,

    /// Ingestion requires the employee to exist before a resume can be
    /// attached; its absence is a client mistake, not a missing resource.
    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("Bio generation is currently unavailable")]
    GenerationUnavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::UnsupportedMediaType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::ResumeNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::EmployeeNotFound => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::GenerationUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(AppError::Validation("File required".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_payload_too_large_maps_to_413() {
        assert_eq!(
            status_of(AppError::PayloadTooLarge),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_unsupported_media_type_maps_to_415() {
        assert_eq!(
            status_of(AppError::UnsupportedMediaType("image/png".into())),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_missing_employee_is_a_client_error() {
        assert_eq!(status_of(AppError::EmployeeNotFound), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_resume_maps_to_404() {
        assert_eq!(status_of(AppError::ResumeNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(AppError::NotFound("Resume not found".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_maps_to_409() {
        assert_eq!(
            status_of(AppError::Conflict("Employee already exists".into())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_generation_unavailable_maps_to_503() {
        assert_eq!(
            status_of(AppError::GenerationUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
