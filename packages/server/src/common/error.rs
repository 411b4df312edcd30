//! Boundary error type for HTTP handlers.
//!
//! Storage failures propagate unmodified through the service layer and are
//! rendered here as a generic internal-error envelope. "Not found" is never
//! an error inside the core; handlers translate empty results directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::{JsonResponse, ResponseCode};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("persistence failure")]
    Persistence(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Persistence(source) => {
                tracing::error!(error = ?source, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(JsonResponse::empty(ResponseCode::InternalError)),
                )
                    .into_response()
            }
        }
    }
}
