use crate::error::{DecodeError, DecodeResult};

/// Extracts consecutive big-endian bit fields from a single 64-bit word.
///
/// Fields are taken from the most significant unconsumed bits and returned
/// right-aligned.
#[derive(Debug, Clone, Copy)]
pub struct BitUnpacker {
    word: u64,
    consumed: u8,
}

impl BitUnpacker {
    pub fn new(word: u64) -> Self {
        BitUnpacker { word, consumed: 0 }
    }

    pub fn unpack(&mut self, width: u8) -> DecodeResult<u64> {
        if self.consumed as u16 + width as u16 > 64 {
            return Err(DecodeError::BitOverflow {
                consumed: self.consumed,
                requested: width,
            });
        }
        if width == 0 {
            return Ok(0);
        }

        // consumed < 64 here, otherwise width would have overflowed above
        let value = (self.word << self.consumed) >> (64 - width);
        self.consumed += width;
        Ok(value)
    }

    pub fn bits_consumed(&self) -> u8 {
        self.consumed
    }

    pub fn bits_remaining(&self) -> u8 {
        64 - self.consumed
    }
}
