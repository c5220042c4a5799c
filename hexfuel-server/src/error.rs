//! API error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hexfuel_core::GameError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),

    /// Request body was not a valid coordinate
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error("game state lock poisoned")]
    Poisoned,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Game(GameError::IllegalMove(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Game(_) | ApiError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
