use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/register` and `POST /api/unregister`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct WebhookParams {
    /// The endpoint to deliver pushes to; must start with `http://` or `https://`.
    #[schema(example = "http://localhost:3000/webhook")]
    pub webhook_url: String,
}
