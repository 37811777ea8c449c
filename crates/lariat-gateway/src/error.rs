use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lariat_shortener::ShortenerError;
use serde_json::json;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to HTTP clients as JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    InvalidUrl(String),
    NotFound,
    Internal(String),
}

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidUrl(message) => Self::InvalidUrl(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidUrl(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "URL not found".to_string()),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
