use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(msg.clone()),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream request failed".to_string(),
                Some(msg.clone()),
            ),
            AppError::UpstreamTimeout(msg) => (
                StatusCode::GATEWAY_TIMEOUT,
                "Upstream request timed out".to_string(),
                Some(msg.clone()),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
        };

        let body = match details {
            Some(details) => Json(json!({ "error": error, "details": details })),
            None => Json(json!({ "error": error })),
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
