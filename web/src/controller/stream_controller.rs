use async_stream::stream;
use axum::extract::State;
use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use domain::BroadcastMessage;
use futures::Stream;
use log::*;
use service::AppState;
use sse::{ConnectionId, Manager};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Interval between `: keepalive` comment frames. A client that vanished
/// without closing its socket is detected when one of these writes fails,
/// so worst-case dead-connection residency is about one interval.
const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);

/// Unregisters the connection when the response stream is dropped -
/// whether the client closed cleanly, the socket errored mid-broadcast,
/// or a keepalive write failed.
struct ConnectionCleanup {
    manager: Arc<Manager>,
    connection_id: ConnectionId,
}

impl Drop for ConnectionCleanup {
    fn drop(&mut self) {
        debug!(
            "SSE connection {} closed, cleaning up",
            self.connection_id.as_str()
        );
        self.manager.unregister_connection(&self.connection_id);
    }
}

/// GET /stream - subscribe to the live message stream.
pub async fn subscribe(State(app_state): State<AppState>) -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-cache")], establish(app_state))
}

/// Register the connection and build the long-lived SSE response. The
/// confirmation frame always precedes any pushed message or keepalive on
/// the connection.
fn establish(app_state: AppState) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let manager = Arc::clone(&app_state.stream_manager);
    let connection_id = manager.register_connection(tx);
    debug!("Establishing SSE connection {}", connection_id.as_str());

    let stream = stream! {
        let _cleanup = ConnectionCleanup {
            manager: Arc::clone(&manager),
            connection_id,
        };

        let connected = BroadcastMessage::new("Connected to event stream");
        yield Ok(Event::default().data(connected.stream_frame()));

        while let Some(event) = rx.recv().await {
            yield event;
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(KEEPALIVE_INTERVAL)
            .text("keepalive"),
    )
}
