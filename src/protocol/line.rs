//! Bounded line accumulator for the serial receive path.

use thiserror::Error;

use crate::config::LINE_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Capacity ran out before a terminator arrived. The line is discarded
    /// whole; a truncated payload must never be parsed as a valid command.
    #[error("line exceeded the buffer capacity before a terminator")]
    Overflow,
}

/// Fixed-capacity byte accumulator with a write cursor.
///
/// Overflow policy: once full, further bytes are dropped and the line is
/// marked; the next [`take`](Self::take) reports the overflow and resets.
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
    overflowed: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
            overflowed: false,
        }
    }

    /// Append one byte, dropping it if the buffer is already full.
    pub fn push(&mut self, byte: u8) {
        if self.len < LINE_CAPACITY {
            self.buf[self.len] = byte;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    /// Consume the accumulated line. The cursor resets either way.
    pub fn take(&mut self) -> Result<&[u8], LineError> {
        let len = self.len;
        self.len = 0;
        if core::mem::take(&mut self.overflowed) {
            return Err(LineError::Overflow);
        }
        Ok(&self.buf[..len])
    }

    /// Discard any accumulated bytes and clear the overflow mark.
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
