//! Request-line parsing.

use std::fmt;
use std::str::FromStr;

use crate::headers::find_crlf;
use crate::request::error::Error;

const HTTP_PROTOCOL: &str = "HTTP";
const HTTP_VERSION: &str = "1.1";

/// The first line of an HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    /// The method, uppercase ASCII letters only (GET, POST, ...)
    pub method: String,
    /// The request target, e.g. `/index.html`
    pub target: String,
    /// The version number without the protocol prefix; always `1.1`
    pub version: String,
}

impl FromStr for RequestLine {
    type Err = Error;

    /// Parse a request line without its trailing CRLF.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [method, target, version_spec] = parts.as_slice() else {
            return Err(Error::MalformedRequestLine(s.to_string()));
        };

        if !method.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::InvalidMethod(method.to_string()));
        }

        match version_spec.split_once('/') {
            Some((HTTP_PROTOCOL, HTTP_VERSION)) => {}
            _ => return Err(Error::InvalidVersion(version_spec.to_string())),
        }

        Ok(RequestLine {
            method: method.to_string(),
            target: target.to_string(),
            version: HTTP_VERSION.to_string(),
        })
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {HTTP_PROTOCOL}/{}", self.method, self.target, self.version)
    }
}

/// Parse one CRLF-terminated request line from the front of `data`.
///
/// Returns `None` when no complete line is buffered yet, otherwise the number of
/// bytes consumed (including the CRLF) and the parsed line.
pub fn parse_request_line(data: &[u8]) -> Result<Option<(usize, RequestLine)>, Error> {
    let Some(idx) = find_crlf(data) else {
        return Ok(None);
    };

    let line = std::str::from_utf8(&data[..idx])
        .map_err(|_| Error::MalformedRequestLine(String::from_utf8_lossy(&data[..idx]).into_owned()))?;
    let request_line = line.parse()?;

    Ok(Some((idx + 2, request_line)))
}
