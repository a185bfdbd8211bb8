//! Axum route handlers for the Bio API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::bio::generator::{generate_bio_from_resume, get_bio_by_id};
use crate::errors::AppError;
use crate::models::bio::BioRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBioRequest {
    pub resume_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBioResponse {
    pub bio_id: i64,
    pub content: String,
}

/// A body that doesn't conform (missing or non-numeric resumeId, wrong
/// content type) is the client's mistake, not an unprocessable entity.
fn invalid_body(_: JsonRejection) -> AppError {
    AppError::Validation("Valid resumeId required".to_string())
}

/// POST /bio/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateBioRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<GenerateBioResponse>), AppError> {
    let Json(request) = body.map_err(invalid_body)?;

    let bio =
        generate_bio_from_resume(&state.db, state.backend.as_ref(), request.resume_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateBioResponse {
            bio_id: bio.id,
            content: bio.content,
        }),
    ))
}

/// GET /bio/:id
pub async fn handle_get_bio(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BioRow>, AppError> {
    let bio = get_bio_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bio not found".to_string()))?;
    Ok(Json(bio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use axum::response::IntoResponse;

    /// Runs the generate endpoint's body extraction against a raw request
    /// and returns the wire status a non-conforming body would produce.
    async fn rejection_status(request: Request<Body>) -> StatusCode {
        let rejection = Json::<GenerateBioRequest>::from_request(request, &())
            .await
            .expect_err("body should not conform");
        invalid_body(rejection).into_response().status()
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/bio/generate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_non_numeric_resume_id_returns_400() {
        let status = rejection_status(json_request(r#"{"resumeId": "7"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_resume_id_returns_400() {
        let status = rejection_status(json_request(r#"{}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_json_content_type_returns_400() {
        let request = Request::builder()
            .method("POST")
            .uri("/bio/generate")
            .body(Body::from(r#"{"resumeId": 1}"#))
            .unwrap();
        assert_eq!(rejection_status(request).await, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_body_uses_camel_case() {
        let request: GenerateBioRequest = serde_json::from_str(r#"{"resumeId": 7}"#).unwrap();
        assert_eq!(request.resume_id, 7);
    }

    #[test]
    fn test_response_body_shape() {
        let body = serde_json::to_value(GenerateBioResponse {
            bio_id: 1,
            content: "A bio.".to_string(),
        })
        .unwrap();
        assert_eq!(body["bioId"], 1);
        assert_eq!(body["content"], "A bio.");
    }
}
