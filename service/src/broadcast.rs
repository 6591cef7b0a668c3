//! Push orchestration shared by the HTTP front door and the control task.

use crate::AppState;
use domain::error::{Error, ValidationErrorKind};
use domain::BroadcastMessage;
use log::*;

/// Summary of one push across both delivery modes.
#[derive(Debug, Clone)]
pub struct PushOutcome {
    pub message: BroadcastMessage,
    /// Live stream connections after dead ones were pruned.
    pub clients: usize,
    /// Webhook deliveries answered with HTTP 200.
    pub webhooks_notified: usize,
    pub total_webhooks: usize,
}

/// Validate, timestamp and fan a message out to every stream connection
/// and every registered webhook. Per-receiver failures surface only as
/// counts; the push itself succeeds whenever the input is valid.
pub async fn push(state: &AppState, text: &str) -> domain::Result<PushOutcome> {
    if text.trim().is_empty() {
        return Err(Error::validation(ValidationErrorKind::MissingMessage));
    }

    let message = BroadcastMessage::new(text);
    let clients = state.stream_manager.broadcast_message(&message);
    let report = state
        .webhook_dispatcher
        .broadcast(&state.webhook_registry, &message)
        .await;

    info!(
        "Push '{}' reached {clients} stream client(s) and {}/{} webhook(s)",
        message.text, report.delivered, report.total
    );

    Ok(PushOutcome {
        message,
        clients,
        webhooks_notified: report.delivered,
        total_webhooks: report.total,
    })
}
