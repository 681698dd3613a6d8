//! API error type with HTTP status code mapping.
//!
//! [`ApiError`] is the only place domain failures become status codes. Every
//! variant renders as `{"error": <message>}`. Internal failures carry a
//! generic message; the underlying cause is logged, never sent.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input (400).
    #[error("{0}")]
    Validation(String),

    /// Unknown todo id or route (404).
    #[error("{0}")]
    NotFound(String),

    /// Storage failure (500). Holds the public message only.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Translate a repository failure. `action` is the public message used
    /// when the failure is internal, e.g. `"failed to update todo"`.
    pub fn from_repository(err: RepositoryError, action: &'static str) -> Self {
        match err {
            RepositoryError::NotFound => {
                tracing::warn!("{action}: {err}");
                ApiError::NotFound(err.to_string())
            }
            RepositoryError::Internal(cause) => {
                tracing::error!(%cause, "{action}");
                ApiError::Internal(action)
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("invalid request: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(error = %rejection, "rejected path");
        ApiError::Validation(format!("invalid request: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
