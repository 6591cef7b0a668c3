//! The ephemeral broadcast payload shared by both delivery modes.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// One message to fan out: raw text plus the server-generated UTC
/// timestamp. Never persisted and never retried after a delivery attempt
/// completes.
///
/// Serializes to the webhook wire envelope `{"message", "timestamp"}`,
/// with the timestamp in RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastMessage {
    #[serde(rename = "message")]
    pub text: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub timestamp: DateTime<Utc>,
}

/// Pin the wire rendering to RFC 3339 with microsecond precision so the
/// JSON envelope and the SSE frame agree on the same string.
fn serialize_rfc3339<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, true))
}

impl BroadcastMessage {
    /// Stamp `text` with the current UTC time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// RFC 3339 rendering used in SSE frames and JSON summaries.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// The single-line SSE envelope: `[<timestamp>] <text>`.
    pub fn stream_frame(&self) -> String {
        format!("[{}] {}", self.timestamp_rfc3339(), self.text)
    }
}
