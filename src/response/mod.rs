//! HTTP response writing.
//!
//! A [`Writer`] emits a response in strict order (status line, headers, body) and
//! supports chunked transfer-encoding with trailers.

mod defaults;
mod error;
mod status;
mod writer;

// Re-export public items
pub use defaults::default_headers;
pub use error::Error;
pub use status::StatusCode;
pub use writer::{Writer, WriterState};
