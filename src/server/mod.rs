//! HTTP server built on the request assembler and response writer.
//!
//! The server accepts TCP connections on a background task and serves each one on
//! its own task.

mod config;
mod error;
mod handler;
mod http_server;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use handler::{handler_fn, HandlerFn, HandlerFuture, ResponseSink, ResponseWriter};
pub use http_server::Server;
