//! Fixed-width bit field packing for the 168-bit navigation block.
//!
//! Fields are written MSB-first into a 21-byte buffer. Signed fields use
//! two's complement within their width. Values that do not fit their field
//! fail with `EncodingOverflow` instead of wrapping.

use crate::error::{AisError, Result};

/// Total size of a Common Navigation Block in bits.
pub const BLOCK_BITS: usize = 168;

/// Total size of a Common Navigation Block in bytes.
pub const BLOCK_BYTES: usize = BLOCK_BITS / 8;

/// MSB-first bit writer over a fixed navigation block buffer.
pub struct BitWriter {
    buf: [u8; BLOCK_BYTES],
    pos: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            buf: [0u8; BLOCK_BYTES],
            pos: 0,
        }
    }

    /// Bits written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Write an unsigned value into `width` bits.
    pub fn put_unsigned(&mut self, field: &'static str, value: u64, width: u32) -> Result<()> {
        if width < 64 && value >> width != 0 {
            return Err(AisError::EncodingOverflow {
                field,
                value: value.to_string(),
                width,
            });
        }
        self.put_bits(value, width);
        Ok(())
    }

    /// Write a signed value as two's complement into `width` bits.
    pub fn put_signed(&mut self, field: &'static str, value: i64, width: u32) -> Result<()> {
        let min = -(1i64 << (width - 1));
        let max = (1i64 << (width - 1)) - 1;
        if value < min || value > max {
            return Err(AisError::EncodingOverflow {
                field,
                value: value.to_string(),
                width,
            });
        }
        let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
        self.put_bits(value as u64 & mask, width);
        Ok(())
    }

    fn put_bits(&mut self, value: u64, width: u32) {
        debug_assert!(self.pos + width as usize <= BLOCK_BITS);
        for i in (0..width).rev() {
            if (value >> i) & 1 != 0 {
                self.buf[self.pos / 8] |= 0x80 >> (self.pos % 8);
            }
            self.pos += 1;
        }
    }

    /// Return the block buffer. The field widths sum to exactly 168 bits;
    /// anything else is a defect in the caller.
    pub fn finish(self) -> Result<[u8; BLOCK_BYTES]> {
        if self.pos != BLOCK_BITS {
            return Err(AisError::MalformedSentence(format!(
                "navigation block is {} bits, expected {}",
                self.pos, BLOCK_BITS
            )));
        }
        Ok(self.buf)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// MSB-first bit reader over an armored-payload bit buffer.
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Read `width` bits as an unsigned value.
    pub fn take_unsigned(&mut self, width: u32) -> u64 {
        debug_assert!(self.pos + width as usize <= self.buf.len() * 8);
        let mut value = 0u64;
        for _ in 0..width {
            let bit = (self.buf[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u64::from(bit);
            self.pos += 1;
        }
        value
    }

    /// Read `width` bits as a two's-complement signed value.
    pub fn take_signed(&mut self, width: u32) -> i64 {
        let raw = self.take_unsigned(width);
        if width < 64 && raw >> (width - 1) != 0 {
            raw as i64 - (1i64 << width)
        } else {
            raw as i64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_one(value: i64, width: u32) -> u64 {
        let mut w = BitWriter::new();
        w.put_signed("test", value, width).unwrap();
        let buf = w.buf;
        let mut r = BitReader::new(&buf);
        r.take_unsigned(width)
    }

    #[test]
    fn test_negative_wraps_as_twos_complement() {
        // -20 in 8 bits is the same pattern as 236
        assert_eq!(write_one(-20, 8), 236);
        assert_eq!(write_one(-1, 8), 255);
        assert_eq!(write_one(-128, 8), 128);
    }

    #[test]
    fn test_signed_round_trip() {
        for value in [-128i64, -100, -1, 0, 1, 100, 127] {
            let mut w = BitWriter::new();
            w.put_signed("test", value, 8).unwrap();
            let buf = w.buf;
            let mut r = BitReader::new(&buf);
            assert_eq!(r.take_signed(8), value);
        }
    }

    #[test]
    fn test_wide_signed_round_trip() {
        for value in [-108_600_000i64, -43_200_000, 0, 78_189_742, 108_600_000] {
            let mut w = BitWriter::new();
            w.put_signed("test", value, 28).unwrap();
            let buf = w.buf;
            let mut r = BitReader::new(&buf);
            assert_eq!(r.take_signed(28), value);
        }
    }

    #[test]
    fn test_unsigned_overflow_rejected() {
        let mut w = BitWriter::new();
        let err = w.put_unsigned("mmsi", 1 << 30, 30).unwrap_err();
        assert!(matches!(
            err,
            crate::error::AisError::EncodingOverflow { field: "mmsi", .. }
        ));
    }

    #[test]
    fn test_signed_overflow_rejected() {
        let mut w = BitWriter::new();
        assert!(w.put_signed("rot", 128, 8).is_err());
        assert!(w.put_signed("rot", -129, 8).is_err());
        assert!(w.put_signed("rot", 127, 8).is_ok());
    }

    #[test]
    fn test_finish_requires_full_block() {
        let mut w = BitWriter::new();
        w.put_unsigned("test", 1, 6).unwrap();
        assert!(w.finish().is_err());
    }

    #[test]
    fn test_full_block_positions() {
        let mut w = BitWriter::new();
        for width in [6u32, 2, 30, 4, 8, 10, 1, 28, 27, 12, 9, 6, 2, 3, 1, 19] {
            w.put_unsigned("test", 0, width).unwrap();
        }
        assert_eq!(w.position(), BLOCK_BITS);
        assert!(w.finish().is_ok());
    }
}
