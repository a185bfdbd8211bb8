use sqlx::PgPool;

use crate::models::bio::BioRow;

/// Persists a generated bio. Each generation run inserts a fresh row;
/// there is no dedup by resume id.
pub async fn insert(pool: &PgPool, resume_id: i64, content: &str) -> Result<BioRow, sqlx::Error> {
    sqlx::query_as("INSERT INTO generated_bios (resume_id, content) VALUES ($1, $2) RETURNING *")
        .bind(resume_id)
        .bind(content)
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<BioRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM generated_bios WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
