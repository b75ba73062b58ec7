//! Sequential HTTP response writer.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::headers::{canonical_name, Headers};
use crate::response::error::Error;
use crate::response::status::StatusCode;

const CRLF: &[u8] = b"\r\n";

/// Which part of the response the writer expects next.
///
/// States only ever move forward: `StatusLine → Headers → Body → Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WriterState {
    StatusLine,
    Headers,
    Body,
    Done,
}

/// Writes one HTTP response to a sink, enforcing status line, headers, body order.
///
/// Every write method checks the current state before touching the sink; a call
/// out of order fails with [`Error::OutOfOrder`] and writes nothing.
#[derive(Debug)]
pub struct Writer<W> {
    sink: W,
    state: WriterState,
}

impl<W> Writer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: WriterState::StatusLine,
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn expect_state(&self, expected: WriterState) -> Result<(), Error> {
        if self.state != expected {
            return Err(Error::OutOfOrder {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }
}

impl<W: AsyncWrite + Unpin> Writer<W> {
    /// Write the status line for `status`.
    pub async fn write_status_line(&mut self, status: StatusCode) -> Result<(), Error> {
        self.expect_state(WriterState::StatusLine)?;
        self.sink.write_all(status.status_line()).await?;
        self.state = WriterState::Headers;
        Ok(())
    }

    /// Write the status line for a numeric code.
    ///
    /// Codes outside [`StatusCode`] fail with [`Error::UnknownStatusCode`] and leave
    /// the writer in its current state.
    pub async fn write_status_code(&mut self, code: u16) -> Result<(), Error> {
        self.expect_state(WriterState::StatusLine)?;
        self.write_status_line(StatusCode::try_from(code)?).await
    }

    /// Write every header with a non-empty value, then the blank line ending the block.
    pub async fn write_headers(&mut self, headers: &Headers) -> Result<(), Error> {
        self.expect_state(WriterState::Headers)?;

        let mut block = Vec::new();
        for (name, value) in headers.iter().filter(|(_, value)| !value.is_empty()) {
            push_field(&mut block, &canonical_name(name), value);
        }
        block.extend_from_slice(CRLF);

        self.sink.write_all(&block).await?;
        self.state = WriterState::Body;
        Ok(())
    }

    /// Write the whole body and finish the response.
    ///
    /// Returns the number of bytes written.
    pub async fn write_body(&mut self, body: &[u8]) -> Result<usize, Error> {
        self.expect_state(WriterState::Body)?;
        self.sink.write_all(body).await?;
        self.state = WriterState::Done;
        Ok(body.len())
    }

    /// Write one chunk of a chunked body: `<hex length>\r\n<data>\r\n`.
    ///
    /// May be called any number of times while in the body state. An empty chunk
    /// writes nothing, since a zero-length chunk would end the body. Returns the number
    /// of bytes written to the sink, framing included.
    pub async fn write_chunked_body(&mut self, chunk: &[u8]) -> Result<usize, Error> {
        self.expect_state(WriterState::Body)?;
        if chunk.is_empty() {
            return Ok(0);
        }

        let mut frame = format!("{:X}\r\n", chunk.len()).into_bytes();
        frame.reserve(chunk.len() + CRLF.len());
        frame.extend_from_slice(chunk);
        frame.extend_from_slice(CRLF);

        self.sink.write_all(&frame).await?;
        Ok(frame.len())
    }

    /// Terminate a chunked body and finish the response.
    ///
    /// Writes the last chunk `0\r\n`, then one trailer field for every name listed in
    /// the `Trailer` header of `trailers` that has a non-empty value there, then the
    /// final `\r\n`. Returns the number of bytes written.
    pub async fn write_chunked_body_done(&mut self, trailers: &Headers) -> Result<usize, Error> {
        self.expect_state(WriterState::Body)?;

        let mut out = b"0\r\n".to_vec();
        let announced = trailers.get("trailer").unwrap_or_default();
        for name in announced.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            if let Some(value) = trailers.get(name).filter(|value| !value.is_empty()) {
                push_field(&mut out, name, value);
            }
        }
        out.extend_from_slice(CRLF);

        self.sink.write_all(&out).await?;
        self.state = WriterState::Done;
        Ok(out.len())
    }

    /// Flush the underlying sink.
    pub async fn flush(&mut self) -> Result<(), Error> {
        self.sink.flush().await?;
        Ok(())
    }
}

fn push_field(out: &mut Vec<u8>, name: &str, value: &str) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(CRLF);
}
