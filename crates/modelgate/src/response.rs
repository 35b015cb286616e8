//! JSON error responses shared by handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use modelgate_types::ErrorResponse;

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub fn error(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn unprocessable(message: impl Into<String>) -> ErrorReply {
    error(StatusCode::UNPROCESSABLE_ENTITY, message)
}

pub fn internal_error(message: impl Into<String>) -> ErrorReply {
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// A body the JSON extractor refused, reported with its own status.
pub fn rejection(rejection: JsonRejection) -> ErrorReply {
    error(rejection.status(), rejection.body_text())
}
