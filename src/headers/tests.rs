//! Tests for header storage and header-line parsing.

#[cfg(test)]
mod tests {
    use crate::headers::{canonical_name, is_token_char, Error, Headers};

    #[test]
    fn test_valid_single_header() {
        let mut headers = Headers::new();
        let data = b"Host: localhost:42069\r\n\r\n";
        let (n, done) = headers.parse(data).unwrap();
        assert_eq!(headers.get("host"), Some("localhost:42069"));
        assert_eq!(n, 23);
        assert!(!done);

        let (n, done) = headers.parse(&data[n..]).unwrap();
        assert_eq!(n, 2);
        assert!(done);
    }

    #[test]
    fn test_leading_whitespace_is_rejected() {
        let mut headers = Headers::new();
        let result = headers.parse(b" Host: localhost:42069 \r\n");
        assert!(matches!(result, Err(Error::MalformedFieldName(_))));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_space_before_colon_is_rejected() {
        let mut headers = Headers::new();
        let result = headers.parse(b"           Host : localhost:42069             \r\n\r\n");
        assert!(matches!(result, Err(Error::SpaceBeforeColon(_))));

        let result = headers.parse(b"Host\t: localhost\r\n");
        assert!(matches!(result, Err(Error::SpaceBeforeColon(_))));
    }

    #[test]
    fn test_empty_field_name_is_rejected() {
        let mut headers = Headers::new();
        let result = headers.parse(b": value\r\n");
        assert!(matches!(result, Err(Error::MalformedFieldName(_))));
    }

    #[test]
    fn test_valid_three_headers() {
        let mut headers = Headers::new();
        let mut data: &[u8] = b"Host: example.com\r\nUser-Agent: test-agent/1.0\r\nAccept: */*\r\n\r\n";

        let (n, done) = headers.parse(data).unwrap();
        data = &data[n..];
        assert_eq!(headers.get("host"), Some("example.com"));
        assert_eq!(n, 19);
        assert!(!done);

        let (n, done) = headers.parse(data).unwrap();
        data = &data[n..];
        assert_eq!(headers.get("user-agent"), Some("test-agent/1.0"));
        assert_eq!(n, 28);
        assert!(!done);

        let (n, done) = headers.parse(data).unwrap();
        data = &data[n..];
        assert_eq!(headers.get("accept"), Some("*/*"));
        assert_eq!(n, 13);
        assert!(!done);

        let (n, done) = headers.parse(data).unwrap();
        assert_eq!(n, 2);
        assert!(done);
    }

    #[test]
    fn test_done_ignores_trailing_data() {
        let mut headers = Headers::new();
        let (n, done) = headers.parse(b"\r\n extra text ignored").unwrap();
        assert_eq!(n, 2);
        assert!(done);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_partial_line_needs_more_data() {
        let mut headers = Headers::new();
        let (n, done) = headers.parse(b"Host: loca").unwrap();
        assert_eq!(n, 0);
        assert!(!done);

        // A lone CR is not a line terminator yet.
        let (n, done) = headers.parse(b"Host: localhost\r").unwrap();
        assert_eq!(n, 0);
        assert!(!done);
    }

    #[test]
    fn test_parse_keeps_existing_headers() {
        let mut headers = Headers::new();
        headers.set("User-Agent", "curl/7.54.1");
        headers.set("Accept-Language", "en-US");

        let (n, done) = headers.parse(b"Host: localhost:42069\r\n").unwrap();
        assert_eq!(n, 23);
        assert!(!done);
        assert_eq!(headers.get("host"), Some("localhost:42069"));
        assert_eq!(headers.get("accept-language"), Some("en-US"));
        assert_eq!(headers.get("user-agent"), Some("curl/7.54.1"));
    }

    #[test]
    fn test_missing_colon() {
        let mut headers = Headers::new();
        assert!(matches!(
            headers.parse(b"Host localhost\r\n"),
            Err(Error::MissingColon(_))
        ));
        assert!(matches!(
            headers.parse(b"Host localhost 42069\r\n"),
            Err(Error::MissingColon(_))
        ));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_colon_after_space_in_name() {
        let mut headers = Headers::new();
        assert!(matches!(
            headers.parse(b"Host localhost:42069\r\n"),
            Err(Error::InvalidFieldName(_))
        ));
    }

    #[test]
    fn test_invalid_character_in_field_name() {
        let mut headers = Headers::new();
        let result = headers.parse("H©st: localhost:42069\r\n\r\n".as_bytes());
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));

        let result = headers.parse(b"Ho st: localhost\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));

        let result = headers.parse(b"Host(x): localhost\r\n");
        assert!(matches!(result, Err(Error::InvalidFieldName(_))));
    }

    #[test]
    fn test_multiple_values_are_merged() {
        let mut headers = Headers::new();
        let mut data: &[u8] =
            b"Set-Person: lane-loves-go\r\nSet-Person: prime-loves-zig\r\nSet-Person: tj-loves-ocaml\r\n\r\n";
        let mut done = false;
        while !done {
            let (n, end) = headers.parse(data).unwrap();
            data = &data[n..];
            done = end;
        }
        assert_eq!(
            headers.get("set-person"),
            Some("lane-loves-go, prime-loves-zig, tj-loves-ocaml")
        );
    }

    #[test]
    fn test_value_whitespace_is_trimmed() {
        let mut headers = Headers::new();
        headers.parse(b"X-Test:\t  value:with:colons \t\r\n").unwrap();
        assert_eq!(headers.get("x-test"), Some("value:with:colons"));

        headers.parse(b"X-Empty:\r\n").unwrap();
        assert_eq!(headers.get("x-empty"), Some(""));
    }

    #[test]
    fn test_case_insensitive_access() {
        let mut headers = Headers::new();
        headers.set("Content-Type", "text/plain");
        assert_eq!(headers.get("content-type"), Some("text/plain"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/plain"));
        assert!(headers.contains("Content-type"));
        assert_eq!(headers.iter().next(), Some(("content-type", "text/plain")));

        headers.set("CONTENT-TYPE", "text/html");
        assert_eq!(headers.get("Content-Type"), Some("text/plain, text/html"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_set_exclusive_overwrites() {
        let mut headers = Headers::new();
        headers.set("Accept", "a");
        headers.set("Accept", "b");
        headers.set_exclusive("ACCEPT", "c");
        assert_eq!(headers.get("accept"), Some("c"));
    }

    #[test]
    fn test_remove() {
        let mut headers = Headers::new();
        headers.set("Content-Length", "10");
        assert_eq!(headers.remove("CONTENT-LENGTH"), Some("10".to_string()));
        assert_eq!(headers.get("content-length"), None);
        assert_eq!(headers.remove("content-length"), None);
    }

    #[test]
    fn test_from_iterator_merges() {
        let headers: Headers = [("Accept", "a"), ("accept", "b"), ("Host", "x")]
            .into_iter()
            .collect();
        assert_eq!(headers.get("accept"), Some("a, b"));
        assert_eq!(headers.get("host"), Some("x"));
    }

    #[test]
    fn test_token_chars() {
        for b in b"abcXYZ019!#$%&'*+-.^_`|~" {
            assert!(is_token_char(*b), "{} should be a token char", *b as char);
        }
        for b in b" \t:()<>@,;\\\"/[]?={}" {
            assert!(!is_token_char(*b), "{} should not be a token char", *b as char);
        }
        assert!(!is_token_char(0xC2));
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("content-length"), "Content-Length");
        assert_eq!(canonical_name("x-content-sha256"), "X-Content-Sha256");
        assert_eq!(canonical_name("HOST"), "Host");
    }
}
