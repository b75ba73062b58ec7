//! Default response headers.

use crate::headers::Headers;

/// Headers for a plain-text response of `content_len` bytes on a connection that
/// closes after the response.
pub fn default_headers(content_len: usize) -> Headers {
    let mut headers = Headers::new();
    headers.set("Content-Length", content_len.to_string());
    headers.set("Connection", "close");
    headers.set("Content-Type", "text/plain");
    headers
}
