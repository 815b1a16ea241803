use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{ConversationId, ConversationRepository, RepositoryError};
use super::service::{ConversationService, ConversationServiceError};

/// Router builder exposing the guided-assistant endpoints.
pub fn conversation_router<R>(service: Arc<ConversationService<R>>) -> Router
where
    R: ConversationRepository + 'static,
{
    Router::new()
        .route("/api/v1/conversations", post(start_handler::<R>))
        .route(
            "/api/v1/conversations/:conversation_id/messages",
            post(message_handler::<R>),
        )
        .with_state(service)
}

/// Body of one user turn.
#[derive(Debug, Deserialize)]
pub(crate) struct UserTurn {
    pub message: String,
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
) -> Response
where
    R: ConversationRepository + 'static,
{
    match service.start() {
        Ok(reply) => (StatusCode::CREATED, axum::Json(reply)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn message_handler<R>(
    State(service): State<Arc<ConversationService<R>>>,
    Path(conversation_id): Path<String>,
    axum::Json(turn): axum::Json<UserTurn>,
) -> Response
where
    R: ConversationRepository + 'static,
{
    let id = ConversationId(conversation_id);
    match service.reply(&id, &turn.message) {
        Ok(reply) => (StatusCode::OK, axum::Json(reply)).into_response(),
        Err(error @ ConversationServiceError::EmptyMessage) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(error @ ConversationServiceError::Concluded) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(ConversationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "conversation not found",
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
