//! Error types for request assembly.

use thiserror::Error;

use crate::headers::Error as HeaderError;
use crate::request::ParseState;

/// Errors that can occur while assembling an HTTP request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not split into method, target and version.
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The method contains something other than uppercase ASCII letters.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The version is not exactly `HTTP/1.1`.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A header line could not be parsed.
    #[error("Invalid header: {0}")]
    HeaderError(#[from] HeaderError),

    /// The `Content-Length` header is not a non-negative integer.
    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// The stream ended before the header block was complete.
    #[error("Unexpected end of stream while {0}")]
    UnexpectedEof(ParseState),

    /// The stream ended before the declared body length was received.
    #[error("Truncated body: expected {expected} bytes, received {received}")]
    TruncatedBody { expected: usize, received: usize },

    /// Data was fed to a request that is already complete.
    #[error("Trying to parse data in a done state")]
    ParseAfterDone,

    /// I/O error reading from the source.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether the error was caused by the stream ending early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::UnexpectedEof(_) | Error::TruncatedBody { .. })
    }
}
