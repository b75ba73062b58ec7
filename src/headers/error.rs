//! Error types for header-line parsing.

use thiserror::Error;

/// Errors that can occur while parsing a single header line.
#[derive(Debug, Error)]
pub enum Error {
    /// The header line has no `:` separating name and value.
    #[error("Malformed header line (no colon): {0:?}")]
    MissingColon(String),

    /// There is whitespace between the field-name and the colon.
    #[error("Malformed field-name (space before colon): {0:?}")]
    SpaceBeforeColon(String),

    /// The field-name is empty or starts with whitespace.
    #[error("Malformed field-name: {0:?}")]
    MalformedFieldName(String),

    /// The field-name contains a character outside the token set.
    #[error("Invalid character in field-name: {0:?}")]
    InvalidFieldName(String),
}
