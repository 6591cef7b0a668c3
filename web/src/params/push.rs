use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/push`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PushParams {
    /// Text to fan out to every connected receiver.
    #[schema(example = "deploy finished")]
    pub message: String,
}
