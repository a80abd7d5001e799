//! Error handling for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tokio::task::JoinError;

use crate::models::MessageResponse;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse { message })).into_response()
            }
            ApiError::Internal(_) => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        if !err.is_panic() {
            return ApiError::Internal(err.to_string());
        }
        let payload = err.into_panic();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "request task panicked".to_string());
        ApiError::Internal(message)
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
