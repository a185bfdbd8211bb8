#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full resume row including the stored file bytes.
/// Only the download path and the generator load this; everything else uses
/// `ResumeMetaRow` to keep blobs out of JSON responses and query results.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub employee_id: i64,
    pub file_name: String,
    pub file_data: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMetaRow {
    pub id: i64,
    pub employee_id: i64,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
}
