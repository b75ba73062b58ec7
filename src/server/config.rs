//! Server configuration.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::request::DEFAULT_BUFFER_SIZE;
use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field is optional when loading from JSON; missing fields take their
/// default values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The initial size of each connection's read buffer; it doubles as needed.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 42069)),
            read_buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}
