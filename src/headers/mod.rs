//! HTTP header collection and header-line parsing.
//!
//! Field names are stored lower-cased, lookups are case-insensitive, and setting a
//! name that is already present merges the values with `", "`.

mod error;
mod map;
mod parse;
mod tests;

// Re-export public items
pub use error::Error;
pub use map::{canonical_name, Headers};
pub use parse::is_token_char;
pub(crate) use parse::find_crlf;
