use crate::controller::{
    dashboard_controller, health_check_controller, push_controller, stream_controller,
    webhook_controller,
};
use crate::params;
use crate::response;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use service::{AppState, Config};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;

// This is the global definition of our OpenAPI spec. To be a part of the
// rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
    info(title = "Webstream Platform API"),
    paths(
        push_controller::push,
        webhook_controller::register,
        webhook_controller::unregister,
        webhook_controller::index,
        health_check_controller::health_check,
    ),
    components(schemas(
        params::push::PushParams,
        params::webhook::WebhookParams,
        response::push::PushResponse,
        response::webhook::WebhookMutationResponse,
        response::webhook::WebhookListResponse,
    )),
    tags(
        (name = "webstream_platform", description = "Real-time message fan-out API")
    )
)]
pub(crate) struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(dashboard_routes())
        .merge(stream_routes(app_state.clone()))
        .merge(push_routes(app_state.clone()))
        .merge(webhook_routes(app_state))
        .merge(health_routes())
        .merge(api_docs_routes())
        .layer(cors)
}

fn dashboard_routes() -> Router {
    Router::new().route("/", get(dashboard_controller::index))
}

fn stream_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/stream", get(stream_controller::subscribe))
        .with_state(app_state)
}

fn push_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/push", post(push_controller::push))
        .with_state(app_state)
}

fn webhook_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(webhook_controller::register))
        .route("/api/unregister", post(webhook_controller::unregister))
        .route("/api/webhooks", get(webhook_controller::index))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn api_docs_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

/// Build the CORS layer from config. EventSource clients are usually
/// served from another origin, so the default configuration leaves the
/// API open ("*"); a comma-separated origin list narrows it.
fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
