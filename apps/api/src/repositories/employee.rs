use sqlx::PgPool;

use crate::models::employee::EmployeeRow;

/// Inserts a new employee. A duplicate email surfaces as a database error
/// with code 23505; callers map it to `Conflict`.
pub async fn insert(
    pool: &PgPool,
    name: &str,
    email: Option<&str>,
) -> Result<EmployeeRow, sqlx::Error> {
    sqlx::query_as("INSERT INTO employees (name, email) VALUES ($1, $2) RETURNING *")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Resolves the employee a resume attaches to. Takes an executor so the
/// ingestion path can run lookup and insert inside one transaction.
pub async fn find_by_email(
    executor: impl sqlx::PgExecutor<'_>,
    email: &str,
) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
}

/// Fallback resolution for employees registered without an email.
/// Names are not unique; the oldest match wins.
pub async fn find_by_name(
    executor: impl sqlx::PgExecutor<'_>,
    name: &str,
) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE name = $1 ORDER BY id LIMIT 1")
        .bind(name)
        .fetch_optional(executor)
        .await
}

pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Deletes an employee, returning the removed row, or `None` if absent.
/// Fails with a 23503 database error while resumes still reference the row.
pub async fn delete(pool: &PgPool, id: i64) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as("DELETE FROM employees WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .await
}
