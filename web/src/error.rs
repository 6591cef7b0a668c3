use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::error::{DomainErrorKind, Error as DomainError};
use log::*;
use serde_json::json;

pub type Result<T> = core::result::Result<T, Error>;

/// Web-layer wrapper over the domain error tree. Reduces error kinds to
/// HTTP status codes and `{"error": <reason>}` JSON bodies so handler
/// faults never crash the worker.
#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.0)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self.0.error_kind {
            DomainErrorKind::Validation(_) => StatusCode::BAD_REQUEST,
            DomainErrorKind::Transport(_) => StatusCode::BAD_GATEWAY,
            DomainErrorKind::Setup(_) | DomainErrorKind::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            debug!("Rejecting request: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
