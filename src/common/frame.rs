// src/common/frame.rs

//! Response frame recognition.
//!
//! A response frame is `<code><optional-text>:<numeric-text>` terminated by a
//! newline, at most [`MAX_FRAME_LEN`] bytes before the terminator. Bytes are
//! fed in one at a time as they arrive off the bus; the parser discards
//! everything up to the expected start byte, accumulates the frame, and
//! extracts the value after the `:` separator once the frame terminates.

use arrayvec::ArrayVec;

use super::code::SensorCode;
use super::value::parse_value_prefix;

/// Maximum frame length excluding the terminator: the code byte plus up to
/// 30 bytes of payload text. A byte arriving on a full buffer terminates the
/// frame in place of a newline.
pub const MAX_FRAME_LEN: usize = 31;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ParseState {
    WaitForStart,
    ReadPayload,
    Done,
}

/// Incremental parser for a single response frame.
///
/// Built fresh for every query; frame contents are never carried over from
/// one invocation to the next.
#[derive(Debug)]
pub struct FrameParser {
    expected: SensorCode,
    state: ParseState,
    buffer: ArrayVec<u8, MAX_FRAME_LEN>,
}

impl FrameParser {
    /// Creates a parser expecting a frame for the given sensor code.
    pub fn new(expected: SensorCode) -> Self {
        FrameParser {
            expected,
            state: ParseState::WaitForStart,
            buffer: ArrayVec::new(),
        }
    }

    /// Feeds one received byte into the state machine.
    ///
    /// Returns `true` once the frame has terminated, after which further
    /// bytes are ignored. Bytes ahead of the start-of-frame match are
    /// silently discarded: line noise and stale frames never raise an error,
    /// they just delay the match until the deadline expires.
    pub fn push(&mut self, byte: u8) -> bool {
        match self.state {
            ParseState::WaitForStart => {
                if self.expected.matches_byte(byte) {
                    self.buffer.push(byte);
                    self.state = ParseState::ReadPayload;
                }
                false
            }
            ParseState::ReadPayload => {
                if byte == b'\n' || self.buffer.is_full() {
                    self.state = ParseState::Done;
                    true
                } else {
                    self.buffer.push(byte);
                    false
                }
            }
            ParseState::Done => true,
        }
    }

    /// Whether a complete frame has been recognised.
    pub fn is_done(&self) -> bool {
        self.state == ParseState::Done
    }

    /// Extracts the numeric value from a terminated frame.
    ///
    /// Returns `None` while the frame is incomplete, or when the frame holds
    /// no `:` separator (a malformed frame). A separator followed by text
    /// with no numeric prefix yields `0.0`, per `atof`-style extraction.
    pub fn value(&self) -> Option<f32> {
        if self.state != ParseState::Done {
            return None;
        }
        let colon = self.buffer.iter().position(|&b| b == b':')?;
        Some(parse_value_prefix(&self.buffer[colon + 1..]).unwrap_or(0.0))
    }
}
