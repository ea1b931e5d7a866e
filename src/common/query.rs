// src/common/query.rs

//! WeatherBus query formatting.
//!
//! A query is the two-character ASCII sequence `?` + sensor code. The line
//! terminator is appended by the transmission layer, never by the encoder.

use core::fmt;

use arrayvec::ArrayString;

use super::code::SensorCode;

/// Maximum formatted query length: `?` plus one code character, which may
/// occupy up to four bytes if a non-ASCII custom code is used.
pub const MAX_QUERY_LEN: usize = 5;

/// A single outgoing sensor query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Query {
    code: SensorCode,
}

impl Query {
    /// Builds the query for the given sensor code.
    pub const fn new(code: SensorCode) -> Self {
        Query { code }
    }

    /// Returns the code this query addresses (and the expected leading byte
    /// of the response frame).
    pub const fn code(&self) -> SensorCode {
        self.code
    }

    /// Formats the query into a fixed-capacity buffer for transmission.
    ///
    /// Infallible: the buffer is sized for the worst-case code character.
    pub fn format_into(&self) -> ArrayString<MAX_QUERY_LEN> {
        let mut buffer = ArrayString::new();
        buffer.push('?');
        buffer.push(self.code.as_char());
        buffer
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.code)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String as HeaplessString;

    #[test]
    fn test_query_formatting() {
        assert_eq!(Query::new(SensorCode::TEMPERATURE).format_into().as_str(), "?T");
        assert_eq!(Query::new(SensorCode::HUMIDITY).format_into().as_str(), "?H");
        assert_eq!(Query::new(SensorCode::PRESSURE).format_into().as_str(), "?P");
        assert_eq!(Query::new(SensorCode::UV).format_into().as_str(), "?U");
        assert_eq!(Query::new(SensorCode::AIR_QUALITY).format_into().as_str(), "?A");
        assert_eq!(Query::new(SensorCode::RAINFALL).format_into().as_str(), "?R");
        assert_eq!(Query::new(SensorCode::WIND_SPEED).format_into().as_str(), "?W");
        assert_eq!(Query::new(SensorCode::WIND_DIRECTION).format_into().as_str(), "?D");
        assert_eq!(Query::new(SensorCode::CANOPY_TEMPERATURE).format_into().as_str(), "?C");
    }

    #[test]
    fn test_custom_query_formatting() {
        // A custom code behaves exactly like a built-in one
        assert_eq!(Query::new(SensorCode::custom('Z')).format_into().as_str(), "?Z");
    }

    #[test]
    fn test_no_trailing_characters() {
        let formatted = Query::new(SensorCode::TEMPERATURE).format_into();
        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted.as_bytes(), b"?T");
    }

    #[test]
    fn test_display_matches_format_into() {
        let query = Query::new(SensorCode::WIND_SPEED);
        let mut output = HeaplessString::<8>::new();
        write!(output, "{}", query).unwrap();
        assert_eq!(output.as_str(), query.format_into().as_str());
    }
}
