use std::sync::Arc;

use sqlx::PgPool;

use crate::bio::generator::GenerationBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable generation backend. Production: `LlmClient`.
    pub backend: Arc<dyn GenerationBackend>,
}
