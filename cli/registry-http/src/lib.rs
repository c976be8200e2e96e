//! Low-level primitives for talking to JSON REST registries.
//!
//! This crate provides the three building blocks consumed by the
//! `companies-house` query pipeline:
//! - a blocking HTTP transport with status and timeout validation
//! - key-path traversal over parsed JSON trees
//! - Basic-Auth header value encoding

pub mod auth;
pub mod json;
pub mod transport;

pub use json::{traverse, TraverseError};
pub use transport::{send, TransportError};
