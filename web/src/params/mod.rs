//! Typed parameters for endpoint inputs.
//!
//! Request bodies are deserialized into explicit structs with named fields
//! rather than probed dynamically, so a missing or malformed field is
//! rejected at the boundary with a 400 before any handler logic runs.

pub mod push;
pub mod webhook;
