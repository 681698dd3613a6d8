//! Error types for the todo API client.
//!
//! `NotFound` and `BadRequest` get dedicated variants because the app reacts
//! to them (drop a stale row, show a form error). Every other unexpected
//! status lands in `HttpError`. Messages come from the server's
//! `{"error": ...}` body when there is one.

/// Errors returned by `TodoClient` methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404: the todo does not exist (any more).
    #[error("not found: {0}")]
    NotFound(String),

    /// 400: the server rejected the request body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other status than the one the operation expects.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
