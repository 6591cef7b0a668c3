use axum::response::Html;

/// GET / - the management dashboard: register/unregister webhooks, push a
/// test message and watch the live stream.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}
