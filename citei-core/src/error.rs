use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::validation::FieldError;

/// Body returned for any 5xx, whatever the underlying cause.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Helper to create a JSON error response with a standard `{ "error": message }` body.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::json!({ "error": message.into() });
    (status, Json(body)).into_response()
}

/// The shared error type every handler returns.
///
/// Its [`IntoResponse`] impl is the single place where failures are mapped to
/// status codes and bodies. Domain errors reach it through `From` impls so that
/// handlers only need `?`.
pub enum HttpError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Unprocessable(String),
    Internal(String),
    /// Field-level validation failure, rendered as `{ "errors": [...] }`.
    Validation {
        status: StatusCode,
        errors: Vec<FieldError>,
    },
    Custom {
        status: StatusCode,
        body: serde_json::Value,
    },
}

impl HttpError {
    pub fn validation(status: StatusCode, errors: Vec<FieldError>) -> Self {
        HttpError::Validation { status, errors }
    }

    /// The status code this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Validation { status, .. } => *status,
            HttpError::Custom { status, .. } => *status,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        match self {
            HttpError::Validation { status, errors } => {
                let body = serde_json::json!({ "errors": errors });
                (status, Json(body)).into_response()
            }
            HttpError::Custom { status, body } => (status, Json(body)).into_response(),
            HttpError::Internal(_) => error_response(status, INTERNAL_ERROR_MESSAGE),
            HttpError::NotFound(msg)
            | HttpError::BadRequest(msg)
            | HttpError::Conflict(msg)
            | HttpError::Unprocessable(msg) => error_response(status, msg),
        }
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            HttpError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            HttpError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            HttpError::Unprocessable(msg) => write!(f, "Unprocessable: {msg}"),
            HttpError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            HttpError::Validation { errors, .. } => {
                write!(f, "Validation Error: {} errors", errors.len())
            }
            HttpError::Custom { status, body } => write!(f, "Custom Error ({status}): {body}"),
        }
    }
}

impl std::fmt::Debug for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for HttpError {}
