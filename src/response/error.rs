//! Error types for response writing.

use thiserror::Error;

use crate::response::WriterState;

/// Errors that can occur while writing an HTTP response.
#[derive(Debug, Error)]
pub enum Error {
    /// A write operation was called in the wrong writer state.
    #[error("Writer state out of order: expected {expected:?}, currently {actual:?}")]
    OutOfOrder {
        expected: WriterState,
        actual: WriterState,
    },

    /// The status code is not one the writer knows how to emit.
    #[error("Unknown status code: {0}")]
    UnknownStatusCode(u16),

    /// I/O error writing to the sink.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
