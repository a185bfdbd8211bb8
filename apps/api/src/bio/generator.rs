//! Bio generation — resolves a stored resume, invokes the generation
//! backend, and persists the result.
//!
//! Flow: resolve resume → backend call → insert generated_bios row.
//! Repeated calls for the same resume create distinct bios.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::bio::prompts::{build_bio_prompt, BIO_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::bio::BioRow;
use crate::repositories::{bio, resume};

/// Seam between the generation pipeline and the external backend.
/// Production implementation is `LlmClient`; tests substitute their own.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate_bio(&self, resume_text: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl GenerationBackend for LlmClient {
    async fn generate_bio(&self, resume_text: &str) -> Result<String, LlmError> {
        self.complete(&build_bio_prompt(resume_text), BIO_SYSTEM)
            .await
    }
}

/// Generates and persists a bio for the given resume.
///
/// Terminal outcomes: `ResumeNotFound` when the resume is absent,
/// `GenerationUnavailable` when the backend errors or times out,
/// or the persisted bio row.
pub async fn generate_bio_from_resume(
    pool: &PgPool,
    backend: &dyn GenerationBackend,
    resume_id: i64,
) -> Result<BioRow, AppError> {
    let resume = resume::find_by_id(pool, resume_id)
        .await?
        .ok_or(AppError::ResumeNotFound)?;

    // Stored blobs are text-bearing documents; lossy decoding keeps binary
    // formats (PDF) usable enough for the prompt without a parsing stage.
    let resume_text = String::from_utf8_lossy(&resume.file_data);

    let content = match backend.generate_bio(&resume_text).await {
        Ok(content) => content,
        Err(e) => {
            warn!(resume_id, "Generation backend failed: {e}");
            return Err(AppError::GenerationUnavailable);
        }
    };

    let stored = bio::insert(pool, resume_id, &content).await?;

    info!(bio_id = stored.id, resume_id, "Bio generated");
    Ok(stored)
}

pub async fn get_bio_by_id(pool: &PgPool, id: i64) -> Result<Option<BioRow>, AppError> {
    Ok(bio::find_by_id(pool, id).await?)
}
