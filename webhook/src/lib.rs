//! Webhook infrastructure: the registered-endpoint set and the push-side
//! dispatcher.
//!
//! The same registry + broadcast shape as the `sse` crate, with two
//! deliberate differences: membership is a set of URLs rather than live
//! connections, and delivery failure never removes an endpoint. Webhook
//! consumers are externally managed, so a transient failure must not
//! silently unregister them.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::{DeliveryReport, Dispatcher};
pub use registry::{Registry, RemovalStatus};
