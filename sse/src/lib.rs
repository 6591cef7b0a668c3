//! Server-Sent Events (SSE) infrastructure: the live-connection registry
//! and the stream-side broadcaster.
//!
//! # Architecture
//!
//! - **Registry + broadcast**: `ConnectionRegistry` owns every open
//!   connection from registration until removal; `Manager` fans messages
//!   out over an immutable snapshot of the membership.
//! - **Send failure is the death signal**: a connection present in the
//!   registry is assumed writable. The first failed send marks it dead and
//!   the broadcaster prunes it in bulk after all sends settle.
//! - **Ephemeral messages**: a receiver that is offline misses the message;
//!   there is no replay.
//!
//! The HTTP handshake, keepalive frames and disconnect cleanup live in the
//! `web` crate; this crate only deals in channel senders.

pub mod connection;
pub mod manager;

pub use connection::{ConnectionId, ConnectionRegistry};
pub use manager::Manager;
