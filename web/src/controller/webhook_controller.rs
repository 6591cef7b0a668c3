use crate::controller::require_body;
use crate::error::Result;
use crate::params::webhook::WebhookParams;
use crate::response::webhook::{WebhookListResponse, WebhookMutationResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::*;
use service::AppState;

/// POST a webhook URL to register it for push delivery
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = WebhookParams,
    responses(
        (status = 200, description = "Webhook registered (idempotent)", body = WebhookMutationResponse),
        (status = 400, description = "Missing or invalid webhook URL"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    payload: core::result::Result<Json<WebhookParams>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let params = require_body(payload)?;
    debug!("REGISTER webhook: {:?}", params.webhook_url);

    let total_webhooks = app_state.webhook_registry.register(&params.webhook_url)?;

    Ok(Json(WebhookMutationResponse {
        status: "success".to_string(),
        webhook_url: params.webhook_url,
        total_webhooks,
    }))
}

/// POST a webhook URL to remove it from push delivery
#[utoipa::path(
    post,
    path = "/api/unregister",
    request_body = WebhookParams,
    responses(
        (status = 200, description = "Webhook removed, or reported not_found if it was never registered", body = WebhookMutationResponse),
        (status = 400, description = "Missing webhook URL"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    payload: core::result::Result<Json<WebhookParams>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let params = require_body(payload)?;
    debug!("UNREGISTER webhook: {:?}", params.webhook_url);

    let (status, total_webhooks) = app_state.webhook_registry.unregister(&params.webhook_url);

    Ok(Json(WebhookMutationResponse {
        status: status.as_str().to_string(),
        webhook_url: params.webhook_url,
        total_webhooks,
    }))
}

/// GET all registered webhooks
#[utoipa::path(
    get,
    path = "/api/webhooks",
    responses(
        (status = 200, description = "Every registered webhook URL and the total count", body = WebhookListResponse),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse> {
    let webhooks = app_state.webhook_registry.list();
    let total = webhooks.len();

    Ok(Json(WebhookListResponse { webhooks, total }))
}
