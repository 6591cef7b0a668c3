use crate::connection::{ConnectionId, ConnectionRegistry, EventSender};
use axum::response::sse::Event;
use domain::BroadcastMessage;
use log::*;
use std::sync::Arc;

/// High-level interface over the connection registry: registration,
/// removal and the stream-side broadcast.
pub struct Manager {
    registry: Arc<ConnectionRegistry>,
}

impl Manager {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new()),
        }
    }

    /// Register a new connection and return its unique ID
    pub fn register_connection(&self, sender: EventSender) -> ConnectionId {
        let connection_id = self.registry.register(sender);
        info!("Registered new SSE connection {}", connection_id.as_str());
        connection_id
    }

    /// Unregister a connection by ID
    pub fn unregister_connection(&self, connection_id: &ConnectionId) {
        self.registry.unregister(connection_id);
    }

    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }

    /// Fan a message out to every open connection over a snapshot of the
    /// registry. A failed send marks that connection dead without
    /// disturbing the other sends; the dead ones are pruned in bulk after
    /// all sends settle.
    ///
    /// Returns the number of live connections remaining after pruning.
    pub fn broadcast_message(&self, message: &BroadcastMessage) -> usize {
        let snapshot = self.registry.snapshot();
        if snapshot.is_empty() {
            warn!("No stream connections registered");
            return 0;
        }

        let frame = message.stream_frame();
        let total = snapshot.len();
        let mut dead = Vec::new();

        for (connection_id, info) in snapshot {
            let event = Event::default().data(frame.clone());
            if info.sender.send(Ok(event)).is_err() {
                warn!(
                    "Failed to send to connection {}, scheduling removal",
                    connection_id.as_str()
                );
                dead.push(connection_id);
            }
        }

        for connection_id in &dead {
            self.registry.unregister(connection_id);
        }

        info!(
            "Broadcast reached {}/{total} stream connection(s), pruned {}",
            total - dead.len(),
            dead.len()
        );

        self.registry.len()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
