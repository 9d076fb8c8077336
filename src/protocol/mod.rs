//! Line-oriented serial command protocol
//! ===========================================================
//!
//! One frame per command: `<tag><decimal integer>` terminated by `\n\r` on
//! send, either `\n` or `\r` on receive. Tag `p`/`P` carries a pitch value,
//! `y`/`Y` a yaw value; any other leading byte and the frame is silently
//! discarded.

pub mod line;

pub use line::{LineBuffer, LineError};

use crate::ipc::Frame;

/* ───── Frame anatomy ───────────────────────────────────────────────── */
pub const TAG_PITCH: u8 = b'p';
pub const TAG_YAW: u8 = b'y';
pub const TERMINATOR: &[u8] = b"\n\r";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    Pitch,
    Yaw,
}

impl Axis {
    pub const fn tag(self) -> u8 {
        match self {
            Axis::Pitch => TAG_PITCH,
            Axis::Yaw => TAG_YAW,
        }
    }

    /// Tag match is case-insensitive; anything else is not a command.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag.to_ascii_lowercase() {
            TAG_PITCH => Some(Axis::Pitch),
            TAG_YAW => Some(Axis::Yaw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedCommand {
    pub axis: Axis,
    pub value: i32,
}

/* ───── Framer ──────────────────────────────────────────────────────── */

/// Serialize one command into a wire frame: tag, decimal value, terminator.
pub fn frame(axis: Axis, value: i32) -> Frame {
    let mut out = Frame::new();
    out.push(axis.tag()).ok();
    push_decimal(value, &mut out);
    out.extend_from_slice(TERMINATOR).ok();
    out
}

// Digits are generated least-significant-first into a scratch buffer, then
// emitted reversed. No leading zeros; zero itself is a single '0'.
fn push_decimal(value: i32, out: &mut Frame) {
    if value == 0 {
        out.push(b'0').ok();
        return;
    }
    if value < 0 {
        out.push(b'-').ok();
    }
    let mut scratch = [0u8; 10];
    let mut n = 0;
    let mut v = value;
    while v != 0 {
        scratch[n] = (v % 10).unsigned_abs() as u8 + b'0';
        n += 1;
        v /= 10;
    }
    while n > 0 {
        n -= 1;
        out.push(scratch[n]).ok();
    }
}

/* ───── Parser ──────────────────────────────────────────────────────── */

/// Interpret one terminated line (terminator already stripped).
///
/// Returns `None` for an empty line or an unrecognized tag. A recognized
/// tag always yields a command: malformed numeric text falls back to 0,
/// the conventional decimal-string conversion contract. That fallback is a
/// compatibility quirk of the wire format, kept deliberately.
pub fn parse_line(line: &[u8]) -> Option<ParsedCommand> {
    let (&tag, payload) = line.split_first()?;
    let axis = Axis::from_tag(tag)?;
    Some(ParsedCommand {
        axis,
        value: parse_decimal(payload),
    })
}

// C `atoi` semantics: optional leading whitespace, optional sign, then
// digits up to the first non-digit. No digits at all parses as 0.
fn parse_decimal(bytes: &[u8]) -> i32 {
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut value = 0i32;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .wrapping_mul(10)
            .wrapping_add((bytes[i] - b'0') as i32);
        i += 1;
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/* ───── Decoder ─────────────────────────────────────────────────────── */

/// Accumulates received bytes and yields one parsed command per line.
#[derive(Default)]
pub struct Decoder {
    line: LineBuffer,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Feed one received byte.
    ///
    /// A terminator consumes the accumulated line: `Ok(Some(_))` if it held
    /// a recognized command, `Ok(None)` otherwise, `Err(Overflow)` if the
    /// line had outgrown the buffer and was discarded. Any other byte is
    /// appended, subject to the buffer's overflow policy.
    pub fn feed(&mut self, byte: u8) -> Result<Option<ParsedCommand>, LineError> {
        if byte == b'\n' || byte == b'\r' {
            let line = self.line.take()?;
            Ok(parse_line(line))
        } else {
            self.line.push(byte);
            Ok(None)
        }
    }

    /// Drop any partially accumulated line.
    pub fn reset(&mut self) {
        self.line.clear();
    }
}
