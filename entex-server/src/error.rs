//! Error handling for the entex server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error response.
///
/// The body shape is fixed by the external contract: a single `detail`
/// field carrying the error's textual message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Entex library error
    #[error("{0}")]
    Entex(#[from] entex::Error),

    /// Internal server error
    #[error("Internal server error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

impl ServerError {
    /// Get the HTTP status code for this error.
    ///
    /// Per-request failures are not differentiated; everything surfaces as
    /// a 500 with the error's message.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
