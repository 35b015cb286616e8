//! Login and registration form handlers.
//!
//! Only the form checks live here; account handling belongs to the
//! external auth provider.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use modelgate_types::{LoginForm, RegisterForm, StatusResponse};
use tracing::debug;

use crate::forms::{Validate, ValidationError};
use crate::response;

/// POST /api/v1/auth/login
pub async fn login(payload: Result<Json<LoginForm>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(form)) => reply("login", form.validate()),
        Err(rejection) => response::rejection(rejection).into_response(),
    }
}

/// POST /api/v1/auth/register
pub async fn register(payload: Result<Json<RegisterForm>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(form)) => reply("register", form.validate()),
        Err(rejection) => response::rejection(rejection).into_response(),
    }
}

fn reply(form: &'static str, result: Result<(), ValidationError>) -> Response {
    match result {
        Ok(()) => Json(StatusResponse::ok()).into_response(),
        Err(e) => {
            debug!(form, error = %e, "Form rejected");
            response::unprocessable(e.to_string()).into_response()
        }
    }
}
