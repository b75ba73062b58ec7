//! HTTP request assembly.
//!
//! A [`Request`] is built incrementally from an async byte source: the request line
//! first, then header lines until a blank line, then exactly `Content-Length` body
//! bytes if that header was sent. Reads of any size are accepted, down to one byte
//! at a time.

mod assembler;
mod buffer;
mod error;
mod line;

// Re-export public items
pub use error::Error;
pub use line::{parse_request_line, RequestLine};
pub use assembler::{
    request_from_reader, request_from_reader_with_capacity, ParseState, Request,
    DEFAULT_BUFFER_SIZE,
};
