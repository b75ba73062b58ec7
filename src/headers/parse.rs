//! Header-line parsing.

use crate::headers::error::Error;
use crate::headers::map::Headers;

const CRLF: &[u8] = b"\r\n";

/// Check whether `b` belongs to the `token` character set of field-names.
pub fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

pub(crate) fn find_crlf(data: &[u8]) -> Option<usize> {
    data.windows(CRLF.len()).position(|w| w == CRLF)
}

impl Headers {
    /// Parse one CRLF-terminated header line from the front of `data`.
    ///
    /// Returns the number of bytes consumed and whether the blank line ending the
    /// header block was reached. `(0, false)` means no complete line is buffered yet.
    /// A successfully parsed field is merged into `self` with [`Headers::set`].
    pub fn parse(&mut self, data: &[u8]) -> Result<(usize, bool), Error> {
        let Some(idx) = find_crlf(data) else {
            return Ok((0, false));
        };
        if idx == 0 {
            return Ok((CRLF.len(), true));
        }

        let line = &data[..idx];
        let lossy = || String::from_utf8_lossy(line).into_owned();

        let Some(colon) = line.iter().position(|&b| b == b':') else {
            return Err(Error::MissingColon(lossy()));
        };

        let prefix = &line[..colon];
        if prefix.last().copied().is_some_and(is_blank) {
            return Err(Error::SpaceBeforeColon(lossy()));
        }
        if prefix.is_empty() || prefix.first().copied().is_some_and(is_blank) {
            return Err(Error::MalformedFieldName(lossy()));
        }
        if !prefix.iter().all(|&b| is_token_char(b)) {
            return Err(Error::InvalidFieldName(lossy()));
        }

        // Token characters are all ASCII.
        let name: String = prefix.iter().map(|&b| char::from(b)).collect();
        let value = String::from_utf8_lossy(line[colon + 1..].trim_ascii());

        self.set(name, value);
        Ok((idx + CRLF.len(), false))
    }
}
