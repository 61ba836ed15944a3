//! kulti-client: fire-and-forget delivery to the Kulti state server.
//! Streaming failures never propagate into the host agent process.

pub mod client;

pub use client::{
    ConnectionStatus, DEFAULT_TIMEOUT_MS, KultiClient, KultiClientConfig, validate_connection,
};
