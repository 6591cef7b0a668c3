use serde::Serialize;
use utoipa::ToSchema;

/// JSON summary returned by `POST /api/register` and `POST /api/unregister`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookMutationResponse {
    /// "success", or "not_found" for an unregister of an absent URL.
    pub status: String,
    pub webhook_url: String,
    pub total_webhooks: usize,
}

/// JSON body of `GET /api/webhooks`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookListResponse {
    pub webhooks: Vec<String>,
    pub total: usize,
}
