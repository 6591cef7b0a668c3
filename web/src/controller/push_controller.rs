use crate::controller::require_body;
use crate::error::Result;
use crate::params::push::PushParams;
use crate::response::push::PushResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::*;
use service::{broadcast, AppState};

/// POST a message to every connected receiver
#[utoipa::path(
    post,
    path = "/api/push",
    request_body = PushParams,
    responses(
        (status = 200, description = "Message broadcast to all connected stream clients and registered webhooks", body = PushResponse),
        (status = 400, description = "Missing or malformed message"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn push(
    State(app_state): State<AppState>,
    payload: core::result::Result<Json<PushParams>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let params = require_body(payload)?;
    debug!("PUSH message: {:?}", params.message);

    let outcome = broadcast::push(&app_state, &params.message).await?;

    Ok(Json(PushResponse::from(outcome)))
}
