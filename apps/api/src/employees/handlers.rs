//! Axum route handlers for the Employee API.
//!
//! Employees are created out-of-band before any resume can be attached;
//! the ingestion path never auto-provisions one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::employee::EmployeeRow;
use crate::repositories::{employee, is_foreign_key_violation, is_unique_violation};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteEmployeeResponse {
    pub message: String,
    pub employee: EmployeeRow,
}

/// Trims and validates the submitted name; blank names are rejected.
fn normalized_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// POST /employees
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeRow>), AppError> {
    let name = normalized_name(&request.name)
        .ok_or_else(|| AppError::Validation("Valid employee name required".to_string()))?;
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let created = employee::insert(&state.db, &name, email)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Employee already exists".to_string())
            } else {
                AppError::Database(e)
            }
        })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /employees
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeRow>>, AppError> {
    let employees = employee::list(&state.db).await?;
    Ok(Json(employees))
}

/// GET /employees/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeRow>, AppError> {
    let found = employee::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
    Ok(Json(found))
}

/// DELETE /employees/:id
///
/// Refused with 409 while resumes still reference the employee; cascade
/// deletion is not assumed.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteEmployeeResponse>, AppError> {
    let deleted = employee::delete(&state.db, id).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::Conflict("Employee still has resumes attached".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    let deleted = deleted.ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    Ok(Json(DeleteEmployeeResponse {
        message: "Employee deleted".to_string(),
        employee: deleted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_name_trims_whitespace() {
        assert_eq!(normalized_name("  Ada  "), Some("Ada".to_string()));
    }

    #[test]
    fn test_normalized_name_rejects_blank() {
        assert_eq!(normalized_name("   "), None);
        assert_eq!(normalized_name(""), None);
    }

    #[test]
    fn test_create_request_email_defaults_to_none() {
        let request: CreateEmployeeRequest = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(request.email, None);
    }

    #[test]
    fn test_create_request_accepts_null_email() {
        let request: CreateEmployeeRequest =
            serde_json::from_str(r#"{"name": "Ada", "email": null}"#).unwrap();
        assert_eq!(request.email, None);
    }
}
