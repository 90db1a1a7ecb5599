//! Small dependency-free helpers shared by networking and configuration code.

pub mod config;

use std::fmt::Write;

/// Percent-encode a string for use in URL paths and query values (RFC 3986).
///
/// Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) pass
/// through; space becomes `%20`; every other byte is hex-escaped.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::percent_encode;

    #[test]
    /// What: Percent encoding covers unreserved, space, and multi-byte input
    ///
    /// - Input: Plain, spaced, punctuated, and non-ASCII strings
    /// - Output: RFC 3986 escaping with %20 spaces and uppercase hex
    fn percent_encode_cases() {
        assert_eq!(percent_encode(""), "");
        assert_eq!(percent_encode("Cardiologist"), "Cardiologist");
        assert_eq!(percent_encode("Dr. Chen"), "Dr.%20Chen");
        assert_eq!(percent_encode("a+b"), "a%2Bb");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }
}
