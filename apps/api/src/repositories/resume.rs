use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::resume::{ResumeMetaRow, ResumeRow};

/// Persists an uploaded resume. Takes an executor so the ingestion path can
/// insert inside the same transaction that resolved the employee.
pub async fn insert(
    executor: impl sqlx::PgExecutor<'_>,
    employee_id: i64,
    file_name: &str,
    file_data: &[u8],
    uploaded_at: DateTime<Utc>,
) -> Result<ResumeMetaRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO resumes (employee_id, file_name, file_data, uploaded_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, employee_id, file_name, uploaded_at
        "#,
    )
    .bind(employee_id)
    .bind(file_name)
    .bind(file_data)
    .bind(uploaded_at)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
