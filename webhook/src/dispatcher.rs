use crate::registry::Registry;
use domain::error::{Error, SetupErrorKind, TransportErrorKind};
use domain::BroadcastMessage;
use futures::future::join_all;
use log::*;
use reqwest::StatusCode;
use std::time::Duration;

/// Per-request delivery timeout. A slow endpoint fails its own delivery,
/// never the broadcast it is part of.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Aggregate result of one webhook broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub total: usize,
}

/// Delivers broadcast payloads to every registered endpoint over HTTP POST.
///
/// Holds the one shared `reqwest::Client`; its connection pool is built at
/// startup and reused for every delivery rather than reopened per request.
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    pub fn new() -> domain::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .user_agent(concat!("webstream-platform/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::setup(SetupErrorKind::Client, e))?;

        Ok(Self { client })
    }

    /// POST the message to every registered endpoint concurrently and
    /// aggregate per-endpoint results. The join waits for all deliveries
    /// regardless of individual failures; failed endpoints are logged and
    /// stay registered.
    pub async fn broadcast(
        &self,
        registry: &Registry,
        message: &BroadcastMessage,
    ) -> DeliveryReport {
        let endpoints = registry.list();
        let total = endpoints.len();
        if endpoints.is_empty() {
            warn!("No webhooks registered");
            return DeliveryReport {
                delivered: 0,
                total: 0,
            };
        }

        let results = join_all(endpoints.iter().map(|url| self.deliver(url, message))).await;

        let mut delivered = 0;
        for (url, result) in endpoints.iter().zip(results) {
            match result {
                Ok(()) => {
                    info!("Successfully sent to webhook: {url}");
                    delivered += 1;
                }
                Err(e) => error!("Failed to send to webhook {url}: {e}"),
            }
        }

        info!("Sent to {delivered}/{total} webhooks");
        DeliveryReport { delivered, total }
    }

    /// One POST. Success is exactly HTTP 200; any other status, a timeout,
    /// or a connection error is a transport failure local to this endpoint.
    async fn deliver(&self, url: &str, message: &BroadcastMessage) -> domain::Result<()> {
        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    TransportErrorKind::Timeout
                } else {
                    TransportErrorKind::Network
                };
                Error::transport(kind, e)
            })?;

        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(Error::transport_status(response.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Json;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    async fn spawn_receiver(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test receiver");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/hook")
    }

    #[tokio::test]
    async fn failing_endpoint_is_counted_and_kept() {
        let ok_url = spawn_receiver(Router::new().route("/hook", post(|| async { "ok" }))).await;
        let failing_url = spawn_receiver(Router::new().route(
            "/hook",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let registry = Registry::new();
        registry.register(&ok_url).unwrap();
        registry.register(&failing_url).unwrap();

        let dispatcher = Dispatcher::new().unwrap();
        let report = dispatcher
            .broadcast(&registry, &BroadcastMessage::new("hello"))
            .await;

        assert_eq!(
            report,
            DeliveryReport {
                delivered: 1,
                total: 2
            }
        );
        // Failures never unregister the endpoint
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test]
    async fn unreachable_endpoint_counts_as_failure() {
        let registry = Registry::new();
        registry.register("http://127.0.0.1:1/hook").unwrap();

        let dispatcher = Dispatcher::new().unwrap();
        let report = dispatcher
            .broadcast(&registry, &BroadcastMessage::new("hello"))
            .await;

        assert_eq!(report.delivered, 0);
        assert_eq!(report.total, 1);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn broadcast_with_no_endpoints_reports_zero_of_zero() {
        let dispatcher = Dispatcher::new().unwrap();
        let report = dispatcher
            .broadcast(&Registry::new(), &BroadcastMessage::new("void"))
            .await;
        assert_eq!(
            report,
            DeliveryReport {
                delivered: 0,
                total: 0
            }
        );
    }

    #[tokio::test]
    async fn delivery_envelope_carries_message_and_timestamp() {
        let (tx, rx) = oneshot::channel();
        let tx = Arc::new(Mutex::new(Some(tx)));
        let router = Router::new().route(
            "/hook",
            post(move |Json(body): Json<serde_json::Value>| {
                let tx = tx.lock().unwrap().take();
                async move {
                    if let Some(tx) = tx {
                        let _ = tx.send(body);
                    }
                    "ok"
                }
            }),
        );
        let url = spawn_receiver(router).await;

        let registry = Registry::new();
        registry.register(&url).unwrap();

        let dispatcher = Dispatcher::new().unwrap();
        let message = BroadcastMessage::new("deploy finished");
        let report = dispatcher.broadcast(&registry, &message).await;
        assert_eq!(report.delivered, 1);

        let body = rx.await.expect("receiver captured the payload");
        assert_eq!(body["message"], "deploy finished");
        assert_eq!(
            body["timestamp"].as_str().unwrap(),
            message.timestamp_rfc3339()
        );
    }
}
