//! JSON response envelope shared by every endpoint.
//!
//! Handlers wrap their payload in `{code, message, result?}`. The core
//! supplies only the result payload; the code table owns the message text.

use serde::Serialize;

/// Stable response codes carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    Created,
    InvalidRequest,
    NotFound,
    InternalError,
}

impl ResponseCode {
    /// Wire value of the code.
    pub fn code(self) -> &'static str {
        match self {
            ResponseCode::Success => "SUCCESS",
            ResponseCode::Created => "CREATED",
            ResponseCode::InvalidRequest => "INVALID_REQUEST",
            ResponseCode::NotFound => "NOT_FOUND",
            ResponseCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Default message rendered for the code.
    pub fn message(self) -> &'static str {
        match self {
            ResponseCode::Success => "Request completed successfully.",
            ResponseCode::Created => "Resource created successfully.",
            ResponseCode::InvalidRequest => "The request was malformed.",
            ResponseCode::NotFound => "The requested resource was not found.",
            ResponseCode::InternalError => "An internal error occurred.",
        }
    }
}

/// Envelope carrying a code, a message, and an optional result payload.
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T> {
    pub code: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> JsonResponse<T> {
    /// Envelope with a result payload.
    pub fn of(code: ResponseCode, result: T) -> Self {
        JsonResponse {
            code: code.code(),
            message: code.message(),
            result: Some(result),
        }
    }
}

impl JsonResponse<()> {
    /// Envelope without a payload.
    pub fn empty(code: ResponseCode) -> Self {
        JsonResponse {
            code: code.code(),
            message: code.message(),
            result: None,
        }
    }
}
