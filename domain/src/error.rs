//! Error types for the `domain` layer.
//!
//! Errors are modeled as a tree: `Error` is the root type holding an
//! `error_kind` enum that classifies what went wrong, plus an optional
//! `source` carrying the original error. Lower layers (registries,
//! dispatcher, server bootstrap) construct these; the `web` layer reduces
//! the kinds to HTTP status codes and user-facing reason strings.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Major categories of errors in the platform.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    /// Missing or malformed caller input. Always a hard error to the caller.
    Validation(ValidationErrorKind),
    /// A single receiver's send or POST failed. Localized: broadcasts
    /// convert these into aggregate counts, they never abort siblings.
    Transport(TransportErrorKind),
    /// A subsystem failed to come up (bind, client construction). Fatal to
    /// that subsystem.
    Setup(SetupErrorKind),
    Internal(InternalErrorKind),
}

#[derive(Debug, PartialEq)]
pub enum ValidationErrorKind {
    /// The push message was empty or missing.
    MissingMessage,
    /// The webhook URL was empty.
    MissingWebhookUrl,
    /// The webhook URL lacked an `http://`/`https://` prefix.
    InvalidWebhookUrl,
    /// The request body was missing or failed to deserialize; carries the
    /// parser's description of the problem.
    InvalidBody(String),
}

#[derive(Debug, PartialEq)]
pub enum TransportErrorKind {
    /// Connection-level failure (refused, reset, DNS).
    Network,
    /// The per-delivery timeout elapsed.
    Timeout,
    /// The remote answered with a non-200 status.
    Status(u16),
}

#[derive(Debug, PartialEq)]
pub enum SetupErrorKind {
    /// The listening socket could not be bound.
    Bind,
    /// The shared webhook HTTP client could not be constructed.
    Client,
}

#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Other(String),
}

impl Error {
    pub fn validation(kind: ValidationErrorKind) -> Self {
        Self {
            source: None,
            error_kind: DomainErrorKind::Validation(kind),
        }
    }

    pub fn transport(
        kind: TransportErrorKind,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            error_kind: DomainErrorKind::Transport(kind),
        }
    }

    /// Transport failure signaled purely by a response status, no
    /// underlying I/O error to carry.
    pub fn transport_status(status: u16) -> Self {
        Self {
            source: None,
            error_kind: DomainErrorKind::Transport(TransportErrorKind::Status(status)),
        }
    }

    pub fn setup(kind: SetupErrorKind, source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            error_kind: DomainErrorKind::Setup(kind),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(message.into())),
        }
    }

    /// The reason string surfaced to callers, e.g. in `{"error": ...}`
    /// response bodies and control-interface output.
    pub fn user_message(&self) -> String {
        match &self.error_kind {
            DomainErrorKind::Validation(kind) => match kind {
                ValidationErrorKind::MissingMessage => "Message is required".to_string(),
                ValidationErrorKind::MissingWebhookUrl => "webhook_url is required".to_string(),
                ValidationErrorKind::InvalidWebhookUrl => {
                    "Invalid webhook URL format".to_string()
                }
                ValidationErrorKind::InvalidBody(reason) => reason.clone(),
            },
            DomainErrorKind::Transport(kind) => match kind {
                TransportErrorKind::Network => "delivery failed: network error".to_string(),
                TransportErrorKind::Timeout => "delivery failed: request timed out".to_string(),
                TransportErrorKind::Status(status) => {
                    format!("delivery failed: endpoint returned status {status}")
                }
            },
            DomainErrorKind::Setup(kind) => match kind {
                SetupErrorKind::Bind => "failed to bind server address".to_string(),
                SetupErrorKind::Client => "failed to construct HTTP client".to_string(),
            },
            DomainErrorKind::Internal(InternalErrorKind::Other(message)) => message.clone(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {source}", self.user_message()),
            None => write!(f, "{}", self.user_message()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
