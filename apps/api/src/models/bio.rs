use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BioRow {
    pub id: i64,
    pub resume_id: i64,
    pub content: String,
}
