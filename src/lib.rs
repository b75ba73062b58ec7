//! HTTP/1.1 over raw byte streams.
//!
//! This library parses HTTP/1.1 requests incrementally from any async byte source and
//! writes HTTP/1.1 responses to any async byte sink, without relying on an existing
//! HTTP implementation.
//!
//! # Features
//!
//! - Incremental request assembly that accepts reads of any size, down to one byte
//! - Case-insensitive headers with duplicate fields merged as `"a, b"`
//! - Fixed-length request bodies via `Content-Length`
//! - An ordered response writer (status line, headers, body) with chunked
//!   transfer-encoding and trailers
//! - A small task-per-connection server with cooperative shutdown
//!
//! # Examples
//!
//! ## Reading a request
//!
//! ```
//! use http_from_tcp::request_from_reader;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), http_from_tcp::RequestError> {
//! let mut source: &[u8] = b"GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\n\r\n";
//! let request = request_from_reader(&mut source).await?;
//!
//! assert_eq!(request.request_line.method, "GET");
//! assert_eq!(request.request_line.target, "/coffee");
//! assert_eq!(request.headers.get("Host"), Some("localhost:42069"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing a chunked response
//!
//! ```
//! use http_from_tcp::{Headers, StatusCode, Writer};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), http_from_tcp::ResponseError> {
//! let mut headers = Headers::new();
//! headers.set("Transfer-Encoding", "chunked");
//! headers.set("Trailer", "X-Content-Length");
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_status_line(StatusCode::Ok).await?;
//! writer.write_headers(&headers).await?;
//! writer.write_chunked_body(b"hello").await?;
//!
//! headers.set("X-Content-Length", "5");
//! writer.write_chunked_body_done(&headers).await?;
//!
//! assert!(writer.get_ref().ends_with(b"5\r\nhello\r\n0\r\nX-Content-Length: 5\r\n\r\n"));
//! # Ok(())
//! # }
//! ```
//!
//! See the `demos` directory for complete programs, including a server.

pub mod headers;
pub mod lines;
pub mod request;
pub mod response;
pub mod server;

// Re-export commonly used items for convenience
pub use headers::{Error as HeaderError, Headers};
pub use request::{
    request_from_reader, request_from_reader_with_capacity, Error as RequestError, ParseState,
    Request, RequestLine,
};
pub use response::{default_headers, Error as ResponseError, StatusCode, Writer, WriterState};
pub use server::{Error as ServerError, ResponseWriter, Server, ServerConfig};
