use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ChecklistId, ReviewDecision};
use super::repository::{ChecklistRepository, RepositoryError};
use super::service::{ChecklistService, ChecklistServiceError, NewChecklist};

/// Router builder exposing the document checklist endpoints.
pub fn checklist_router<R>(service: Arc<ChecklistService<R>>) -> Router
where
    R: ChecklistRepository + 'static,
{
    Router::new()
        .route("/api/v1/checklists", post(create_handler::<R>))
        .route(
            "/api/v1/checklists/:checklist_id",
            get(checklist_handler::<R>),
        )
        .route(
            "/api/v1/checklists/:checklist_id/documents/:order_index/upload",
            post(upload_handler::<R>),
        )
        .route(
            "/api/v1/checklists/:checklist_id/documents/:order_index/review",
            post(review_handler::<R>),
        )
        .with_state(service)
}

/// Body of an upload notification.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadRequest {
    pub file_url: String,
}

/// Body of a review verdict.
#[derive(Debug, Deserialize)]
pub(crate) struct ReviewRequest {
    pub decision: ReviewDecision,
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ChecklistService<R>>>,
    axum::Json(new): axum::Json<NewChecklist>,
) -> Response
where
    R: ChecklistRepository + 'static,
{
    match service.create(new) {
        Ok(request) => (StatusCode::CREATED, axum::Json(request.view())).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn checklist_handler<R>(
    State(service): State<Arc<ChecklistService<R>>>,
    Path(checklist_id): Path<String>,
) -> Response
where
    R: ChecklistRepository + 'static,
{
    let id = ChecklistId(checklist_id);
    match service.get(&id) {
        Ok(request) => (StatusCode::OK, axum::Json(request.view())).into_response(),
        Err(ChecklistServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "checklist not found",
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

pub(crate) async fn upload_handler<R>(
    State(service): State<Arc<ChecklistService<R>>>,
    Path((checklist_id, order_index)): Path<(String, u32)>,
    axum::Json(upload): axum::Json<UploadRequest>,
) -> Response
where
    R: ChecklistRepository + 'static,
{
    let id = ChecklistId(checklist_id);
    match service.record_upload(&id, order_index, upload.file_url) {
        Ok(request) => (StatusCode::OK, axum::Json(request.view())).into_response(),
        Err(error) => amendment_error(error),
    }
}

pub(crate) async fn review_handler<R>(
    State(service): State<Arc<ChecklistService<R>>>,
    Path((checklist_id, order_index)): Path<(String, u32)>,
    axum::Json(review): axum::Json<ReviewRequest>,
) -> Response
where
    R: ChecklistRepository + 'static,
{
    let id = ChecklistId(checklist_id);
    match service.review(&id, order_index, review.decision) {
        Ok(request) => (StatusCode::OK, axum::Json(request.view())).into_response(),
        Err(error) => amendment_error(error),
    }
}

/// Status mapping shared by the upload and review handlers.
fn amendment_error(error: ChecklistServiceError) -> Response {
    match error {
        error @ ChecklistServiceError::Transition(_) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        ChecklistServiceError::UnknownDocument(_) => {
            let payload = json!({
                "error": "document not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        ChecklistServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({
                "error": "checklist not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
