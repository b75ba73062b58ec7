//! Incremental HTTP request assembly.

use std::fmt;

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::headers::Headers;
use crate::request::buffer::ReadBuffer;
use crate::request::error::Error;
use crate::request::line::{parse_request_line, RequestLine};

/// Initial capacity of the assembler's read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 8;

/// Upper bound on body capacity reserved up front from `Content-Length`.
const MAX_BODY_PREALLOC: usize = 64 * 1024;

/// Parse a `Content-Length` value: plain ASCII digits only, no sign or whitespace.
fn parse_content_length(value: &str) -> Option<usize> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Where the assembler is in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    AwaitingRequestLine,
    ParsingHeaders,
    ReadingBody,
    Done,
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseState::AwaitingRequestLine => write!(f, "awaiting request line"),
            ParseState::ParsingHeaders => write!(f, "parsing headers"),
            ParseState::ReadingBody => write!(f, "reading body"),
            ParseState::Done => write!(f, "done"),
        }
    }
}

/// Represents an HTTP request, complete or in progress.
#[derive(Debug, Clone)]
pub struct Request {
    /// The parsed request line
    pub request_line: RequestLine,
    /// The HTTP headers
    pub headers: Headers,
    /// The request body; empty unless `Content-Length` was declared
    pub body: Vec<u8>,
    state: ParseState,
    content_length: usize,
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Create an empty request awaiting its request line.
    pub fn new() -> Self {
        Self {
            request_line: RequestLine::default(),
            headers: Headers::new(),
            body: Vec::new(),
            state: ParseState::AwaitingRequestLine,
            content_length: 0,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// The body length declared by `Content-Length`, or 0 when none was sent.
    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// Feed buffered bytes to the state machine.
    ///
    /// Consumes as much of `data` as the current state allows, moving through several
    /// states in one call when enough data is present. Returns the number of bytes
    /// consumed; unconsumed bytes must be offered again together with newer data.
    pub fn parse(&mut self, data: &[u8]) -> Result<usize, Error> {
        if self.is_done() {
            return Err(Error::ParseAfterDone);
        }

        let mut total = 0;
        while !self.is_done() {
            let n = self.parse_single(&data[total..])?;
            if n == 0 {
                break;
            }
            total += n;
        }
        Ok(total)
    }

    fn parse_single(&mut self, data: &[u8]) -> Result<usize, Error> {
        match self.state {
            ParseState::AwaitingRequestLine => {
                let Some((n, request_line)) = parse_request_line(data)? else {
                    return Ok(0);
                };
                self.request_line = request_line;
                self.state = ParseState::ParsingHeaders;
                Ok(n)
            }
            ParseState::ParsingHeaders => {
                let mut total = 0;
                loop {
                    let (n, end_of_headers) = self.headers.parse(&data[total..])?;
                    total += n;
                    if end_of_headers {
                        self.finish_headers()?;
                        return Ok(total);
                    }
                    if n == 0 {
                        return Ok(total);
                    }
                }
            }
            ParseState::ReadingBody => {
                let remaining = self.content_length - self.body.len();
                let take = remaining.min(data.len());
                self.body.extend_from_slice(&data[..take]);
                if self.body.len() == self.content_length {
                    self.state = ParseState::Done;
                }
                Ok(take)
            }
            ParseState::Done => Err(Error::ParseAfterDone),
        }
    }

    fn finish_headers(&mut self) -> Result<(), Error> {
        if let Some(value) = self.headers.get("content-length") {
            self.content_length = parse_content_length(value)
                .ok_or_else(|| Error::InvalidContentLength(value.to_string()))?;
        }

        // The declared length is untrusted; the body grows as bytes arrive.
        self.state = if self.content_length > 0 {
            self.body.reserve(self.content_length.min(MAX_BODY_PREALLOC));
            ParseState::ReadingBody
        } else {
            ParseState::Done
        };
        Ok(())
    }

    /// The error to report when the source ends in the current state.
    fn truncated(&self) -> Error {
        match self.state {
            ParseState::ReadingBody => Error::TruncatedBody {
                expected: self.content_length,
                received: self.body.len(),
            },
            state => Error::UnexpectedEof(state),
        }
    }
}

/// Read and assemble one request from `reader`.
///
/// Reads until the request is complete; bytes after the end of the request are left
/// unread or discarded. The source ending early is a truncation error.
pub async fn request_from_reader<R>(reader: &mut R) -> Result<Request, Error>
where
    R: AsyncRead + Unpin + ?Sized,
{
    request_from_reader_with_capacity(reader, DEFAULT_BUFFER_SIZE).await
}

/// Like [`request_from_reader`], starting from a read buffer of `capacity` bytes.
pub async fn request_from_reader_with_capacity<R>(
    reader: &mut R,
    capacity: usize,
) -> Result<Request, Error>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = ReadBuffer::with_capacity(capacity);
    let mut request = Request::new();

    while !request.is_done() {
        let n = reader.read(buf.unfilled_mut()).await?;
        if n == 0 {
            return Err(request.truncated());
        }
        buf.advance(n);

        let consumed = request.parse(buf.filled())?;
        buf.consume(consumed);
    }

    debug!(
        "Assembled request {} ({} header fields, {} body bytes, buffer capacity {})",
        request.request_line,
        request.headers.len(),
        request.body.len(),
        buf.capacity()
    );
    Ok(request)
}
