//! Error types for the HTTP server.

use thiserror::Error;

use crate::request::Error as RequestError;
use crate::response::Error as ResponseError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be read or parsed.
    #[error("Request error: {0}")]
    RequestError(#[from] RequestError),

    /// The response could not be written.
    #[error("Response error: {0}")]
    ResponseError(#[from] ResponseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    InternalError(String),
}
