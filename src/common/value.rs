// src/common/value.rs

//! Numeric payload extraction.
//!
//! Responders terminate the numeric text with whatever happens to follow it
//! (units, padding, stray bytes), so the value is taken as the longest valid
//! decimal prefix of the payload, matching C `strtod`/`atof` semantics:
//! leading ASCII whitespace is skipped, an optional sign, integer and
//! fraction digits and an optional exponent are consumed, and everything
//! after the prefix is ignored.

use core::str::{self, FromStr};

/// Parses the leading decimal floating-point literal out of `bytes`.
///
/// Returns `None` when no digits are found at all; trailing non-numeric
/// bytes (including non-UTF-8 garbage) never cause a failure.
pub fn parse_value_prefix(bytes: &[u8]) -> Option<f32> {
    let mut pos = 0;

    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    let start = pos;

    if matches!(bytes.get(pos), Some(&b'+') | Some(&b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    while matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
        pos += 1;
        digits += 1;
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while matches!(bytes.get(pos), Some(b) if b.is_ascii_digit()) {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts if at least one exponent digit follows it
    let mut end = pos;
    if matches!(bytes.get(pos), Some(&b'e') | Some(&b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(&b'+') | Some(&b'-')) {
            exp_pos += 1;
        }
        let mut exp_digits = 0;
        while matches!(bytes.get(exp_pos), Some(b) if b.is_ascii_digit()) {
            exp_pos += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = exp_pos;
        }
    }

    // The prefix is pure ASCII by construction
    let literal = str::from_utf8(&bytes[start..end]).ok()?;
    f32::from_str(literal).ok()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(parse_value_prefix(b"23.5"), Some(23.5));
        assert_eq!(parse_value_prefix(b"55"), Some(55.0));
        assert_eq!(parse_value_prefix(b"0.0"), Some(0.0));
        assert_eq!(parse_value_prefix(b".5"), Some(0.5));
        assert_eq!(parse_value_prefix(b"7."), Some(7.0));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_value_prefix(b"+23.5"), Some(23.5));
        assert_eq!(parse_value_prefix(b"-4.2"), Some(-4.2));
        assert_eq!(parse_value_prefix(b"-0"), Some(0.0));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(parse_value_prefix(b" 23.5"), Some(23.5));
        assert_eq!(parse_value_prefix(b"\t -4.2"), Some(-4.2));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_value_prefix(b"23.5 "), Some(23.5));
        assert_eq!(parse_value_prefix(b"23.5 hPa"), Some(23.5));
        assert_eq!(parse_value_prefix(b"12.3.4"), Some(12.3));
        assert_eq!(parse_value_prefix(b"88mm"), Some(88.0));
        // Non-UTF-8 bytes after the literal are fine
        assert_eq!(parse_value_prefix(b"1.5\xFF\xFE"), Some(1.5));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_value_prefix(b"1.5e2"), Some(150.0));
        assert_eq!(parse_value_prefix(b"1e-1"), Some(0.1));
        // A dangling exponent marker is not part of the literal
        assert_eq!(parse_value_prefix(b"2e"), Some(2.0));
        assert_eq!(parse_value_prefix(b"2e+x"), Some(2.0));
    }

    #[test]
    fn test_no_numeric_prefix() {
        assert_eq!(parse_value_prefix(b""), None);
        assert_eq!(parse_value_prefix(b"abc"), None);
        assert_eq!(parse_value_prefix(b"+"), None);
        assert_eq!(parse_value_prefix(b"-."), None);
        assert_eq!(parse_value_prefix(b" e5"), None);
    }
}
