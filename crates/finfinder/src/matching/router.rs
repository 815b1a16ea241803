use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::{RepositoryError, SubmissionId, SubmissionRepository};
use super::service::{MatchService, MatchServiceError};
use super::QualificationForm;

/// Router builder exposing qualification matching endpoints.
pub fn match_router<R>(service: Arc<MatchService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/match", post(submit_handler::<R>))
        .route(
            "/api/v1/match/submissions/:submission_id",
            get(submission_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<MatchService<R>>>,
    axum::Json(form): axum::Json<QualificationForm>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(form) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(MatchServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submission_handler<R>(
    State(service): State<Arc<MatchService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(MatchServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "submission not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
