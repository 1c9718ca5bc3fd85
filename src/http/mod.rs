//! HTTP server module.
//!
//! Serves the router over plain HTTP. TLS termination is left to the
//! orchestrator or reverse proxy in front of the probe target. The server
//! shuts down gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
