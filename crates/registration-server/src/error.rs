// File: src/error.rs
// Purpose: Unified handler error mapped to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A unified error type so handlers can use `?`
#[derive(Debug)]
pub enum AppError {
    /// A 500 Internal Server Error (e.g. a record that failed to serialize)
    Internal(anyhow::Error),
    /// A 400 Bad Request (e.g. a malformed multipart body)
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(err) => {
                tracing::error!("Internal server error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

// Allows `?` on anyhow-compatible results
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::Internal(err.into())
    }
}
