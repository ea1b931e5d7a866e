// src/common/code.rs

use core::fmt;

/// One-character sensor type code used on the wire.
///
/// The leading byte of every response frame is the code of the sensor that
/// was queried; anything else on the line before it is treated as noise.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SensorCode(char);

impl SensorCode {
    /// Air temperature, degrees Celsius.
    pub const TEMPERATURE: SensorCode = SensorCode('T');
    /// Relative humidity, percent.
    pub const HUMIDITY: SensorCode = SensorCode('H');
    /// Barometric pressure, hPa.
    pub const PRESSURE: SensorCode = SensorCode('P');
    /// UV index.
    pub const UV: SensorCode = SensorCode('U');
    /// Air quality index.
    pub const AIR_QUALITY: SensorCode = SensorCode('A');
    /// Cumulative rainfall since last query, mm.
    pub const RAINFALL: SensorCode = SensorCode('R');
    /// Wind speed, m/s.
    pub const WIND_SPEED: SensorCode = SensorCode('W');
    /// Wind direction, degrees.
    pub const WIND_DIRECTION: SensorCode = SensorCode('D');
    /// Canopy temperature, degrees Celsius.
    pub const CANOPY_TEMPERATURE: SensorCode = SensorCode('C');

    /// Creates a code for a sensor type not covered by the named constants.
    ///
    /// The protocol places no constraint on the character beyond it being the
    /// first byte of the response, so no validation is performed. Responders
    /// on the bus ignore queries they do not recognise, which surfaces at the
    /// caller as a timeout.
    pub const fn custom(code_char: char) -> Self {
        SensorCode(code_char)
    }

    #[inline]
    pub const fn as_char(&self) -> char {
        self.0
    }

    /// Checks whether a received byte is the start-of-frame byte for this code.
    ///
    /// Codes outside the ASCII range can never match a single wire byte.
    #[inline]
    pub fn matches_byte(&self, byte: u8) -> bool {
        self.0.is_ascii() && self.0 as u8 == byte
    }
}

impl From<char> for SensorCode {
    fn from(value: char) -> Self {
        SensorCode::custom(value)
    }
}

impl From<SensorCode> for char {
    fn from(value: SensorCode) -> Self {
        value.0
    }
}

impl fmt::Display for SensorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_codes() {
        assert_eq!(SensorCode::TEMPERATURE.as_char(), 'T');
        assert_eq!(SensorCode::HUMIDITY.as_char(), 'H');
        assert_eq!(SensorCode::PRESSURE.as_char(), 'P');
        assert_eq!(SensorCode::UV.as_char(), 'U');
        assert_eq!(SensorCode::AIR_QUALITY.as_char(), 'A');
        assert_eq!(SensorCode::RAINFALL.as_char(), 'R');
        assert_eq!(SensorCode::WIND_SPEED.as_char(), 'W');
        assert_eq!(SensorCode::WIND_DIRECTION.as_char(), 'D');
        assert_eq!(SensorCode::CANOPY_TEMPERATURE.as_char(), 'C');
    }

    #[test]
    fn test_custom_code() {
        let code = SensorCode::custom('Z');
        assert_eq!(code.as_char(), 'Z');
        assert_eq!(SensorCode::from('Z'), code);
        assert_eq!(char::from(code), 'Z');
    }

    #[test]
    fn test_matches_byte() {
        assert!(SensorCode::TEMPERATURE.matches_byte(b'T'));
        assert!(!SensorCode::TEMPERATURE.matches_byte(b't'));
        assert!(!SensorCode::TEMPERATURE.matches_byte(b'H'));
        // Non-ASCII codes can never appear as a single wire byte
        assert!(!SensorCode::custom('é').matches_byte(0xE9));
    }

    #[test]
    fn test_display() {
        use core::fmt::Write;
        let mut out = heapless::String::<4>::new();
        write!(out, "{}", SensorCode::RAINFALL).unwrap();
        assert_eq!(out.as_str(), "R");
    }
}
