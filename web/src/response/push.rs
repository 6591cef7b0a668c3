use serde::Serialize;
use service::broadcast::PushOutcome;
use utoipa::ToSchema;

/// JSON summary returned by `POST /api/push`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PushResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    /// Live stream connections after the broadcast.
    pub clients: usize,
    /// Webhook deliveries that answered with HTTP 200.
    pub webhooks_notified: usize,
    pub total_webhooks: usize,
}

impl From<PushOutcome> for PushResponse {
    fn from(outcome: PushOutcome) -> Self {
        Self {
            status: "success".to_string(),
            message: outcome.message.text.clone(),
            timestamp: outcome.message.timestamp_rfc3339(),
            clients: outcome.clients,
            webhooks_notified: outcome.webhooks_notified,
            total_webhooks: outcome.total_webhooks,
        }
    }
}
