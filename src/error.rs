//! Error types shared across layers.
//!
//! [`AppError`] is the HTTP-facing error and renders as `{"error": "<message>"}`.
//! [`UpstreamError`] covers every way a call to the breed API can fail; it is
//! logged in full and surfaced to clients only as a generic 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Failure while talking to the upstream breed API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read upstream response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    #[error("malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}
