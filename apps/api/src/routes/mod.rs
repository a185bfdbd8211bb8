pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::bio::handlers as bio_handlers;
use crate::employees::handlers as employee_handlers;
use crate::ingestion::handlers as ingestion_handlers;
use crate::ingestion::validate::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Multipart framing overhead allowed past the file ceiling; bodies inside
/// this window still reach the validator so the client gets the proper
/// error message rather than a bare framework rejection.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route("/resume/upload", post(ingestion_handlers::handle_upload))
        .route("/resume/:id", get(ingestion_handlers::handle_get_resume))
        // Bio generation
        .route("/bio/generate", post(bio_handlers::handle_generate))
        .route("/bio/:id", get(bio_handlers::handle_get_bio))
        // Employees
        .route(
            "/employees",
            get(employee_handlers::handle_list).post(employee_handlers::handle_create),
        )
        .route(
            "/employees/:id",
            get(employee_handlers::handle_get).delete(employee_handlers::handle_delete),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + BODY_LIMIT_SLACK))
        .with_state(state)
}
