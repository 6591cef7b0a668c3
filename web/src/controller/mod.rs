use crate::error::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use domain::error::{Error as DomainError, ValidationErrorKind};
use log::*;

pub mod dashboard_controller;
pub mod health_check_controller;
pub mod push_controller;
pub mod stream_controller;
pub mod webhook_controller;

/// Unwrap a typed JSON body, converting axum's rejection (missing body,
/// malformed JSON, missing field) into the platform's 400 `{"error": ...}`
/// shape.
pub(crate) fn require_body<T>(payload: core::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    match payload {
        Ok(Json(params)) => Ok(params),
        Err(rejection) => {
            warn!("Rejecting malformed request body: {}", rejection.body_text());
            Err(Error::from(DomainError::validation(
                ValidationErrorKind::InvalidBody(rejection.body_text()),
            )))
        }
    }
}
