use axum::response::sse::Event;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::convert::Infallible;
use tokio::sync::mpsc::UnboundedSender;

/// The channel half used to write frames to one open connection.
pub type EventSender = UnboundedSender<Result<Event, Infallible>>;

/// Unique identifier for a connection (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One open SSE session: the write handle plus when the client connected.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub sender: EventSender,
    pub connected_at: DateTime<Utc>,
}

/// Concurrency-safe registry of open stream connections.
///
/// Handles are unique by construction, so registration needs no duplicate
/// check, and removal of an absent handle is a no-op rather than an error.
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a new connection - O(1)
    pub fn register(&self, sender: EventSender) -> ConnectionId {
        let connection_id = ConnectionId::new();

        self.connections.insert(
            connection_id.clone(),
            ConnectionInfo {
                sender,
                connected_at: Utc::now(),
            },
        );

        connection_id
    }

    /// Idempotent removal - O(1); absence is a no-op.
    pub fn unregister(&self, connection_id: &ConnectionId) {
        self.connections.remove(connection_id);
    }

    /// Immutable copy of the current membership, safe to iterate while
    /// registrations and removals land concurrently.
    pub fn snapshot(&self) -> Vec<(ConnectionId, ConnectionInfo)> {
        self.connections
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn unregister_is_idempotent() {
        let registry = ConnectionRegistry::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let connection_id = registry.register(tx);
        assert_eq!(registry.len(), 1);

        registry.unregister(&connection_id);
        registry.unregister(&connection_id);
        assert!(registry.is_empty());

        // Removing a handle that was never registered is also a no-op
        registry.unregister(&ConnectionId::new());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn snapshot_is_stable_under_concurrent_mutation() {
        let registry = ConnectionRegistry::new();
        let mut receivers = Vec::new();
        for _ in 0..4 {
            let (tx, rx) = mpsc::unbounded_channel();
            receivers.push(rx);
            registry.register(tx);
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 4);

        // Mutating the registry does not disturb an already-taken snapshot
        for (connection_id, _) in &snapshot {
            registry.unregister(connection_id);
        }
        assert!(registry.is_empty());
        assert_eq!(snapshot.len(), 4);
    }
}
