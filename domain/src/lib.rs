//! Shared value types and the error tree for the webstream platform.
//!
//! This crate is a leaf: it has no dependencies on the other internal
//! crates, so every layer (registries, broadcasters, web, control) can
//! speak the same message and error vocabulary without cycles.

pub mod error;
pub mod message;

pub use error::Error;
pub use message::BroadcastMessage;

pub type Result<T> = core::result::Result<T, error::Error>;
