//! HTTP server module.
//!
//! Binds the configured address and serves the router over plain HTTP.
//! TLS termination is left to a reverse proxy in front of the service.
//!
//! The server includes graceful shutdown on SIGTERM/SIGINT. Static assets
//! are served from disk by `static_files`.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};
