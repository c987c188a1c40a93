//! Error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scriptorium_error::ScriptoriumError;
use serde_json::json;

/// An error rendered as `{"error": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl ApiError {
    /// 400 for a request that cannot be processed.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Invalid request",
            message: message.into(),
        }
    }

    /// 404 for an unknown book.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "Book not found",
            message: message.into(),
        }
    }

    /// 500 for a failed generation.
    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Error generating book",
            message: message.into(),
        }
    }

    /// 500 for a storage failure outside generation.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal error",
            message: message.into(),
        }
    }

    /// Status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Map a failure from `POST /api/generate-book`.
    pub fn from_generation(err: &ScriptoriumError) -> Self {
        if err.is_validation() {
            Self::bad_request(err.to_string())
        } else {
            Self::generation_failed(err.to_string())
        }
    }

    /// Map a failure from a storage lookup.
    pub fn from_lookup(err: &ScriptoriumError) -> Self {
        if err.is_not_found() {
            Self::not_found(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
