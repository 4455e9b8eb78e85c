//! Bit-level output for the packed encoding mode.

use std::io::{Result as IoResult, Write};

/// A bit-level writer that packs individual bits into bytes, MSB first.
///
/// Used by the packed output mode. Verbatim bytes may be interleaved with
/// bit runs, but only at byte boundaries; [`BitWriter::align`] pads the
/// pending partial byte with zero bits first.
pub struct BitWriter<W: Write> {
    writer: W,
    current_byte: u8,
    bits_in_current: u8,
}

impl<W: Write> BitWriter<W> {
    /// Creates a new BitWriter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_byte: 0,
            bits_in_current: 0,
        }
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) -> IoResult<()> {
        if bit {
            self.current_byte |= 1 << (7 - self.bits_in_current);
        }
        self.bits_in_current += 1;

        if self.bits_in_current == 8 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        Ok(())
    }

    /// Pads any pending partial byte with zero bits and writes it out.
    pub fn align(&mut self) -> IoResult<()> {
        if self.bits_in_current > 0 {
            self.writer.write_all(&[self.current_byte])?;
            self.current_byte = 0;
            self.bits_in_current = 0;
        }
        Ok(())
    }

    /// Writes whole bytes, aligning to a byte boundary first.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> IoResult<()> {
        self.align()?;
        self.writer.write_all(bytes)
    }

    /// Aligns and flushes the underlying writer.
    pub fn flush(&mut self) -> IoResult<()> {
        self.align()?;
        self.writer.flush()
    }
}
