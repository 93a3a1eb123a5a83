//! Bit-level output for packing code bits into bytes.
//!
//! `BitSink` accepts single bits and forwards whole bytes to any
//! `std::io::Write`. Bits are packed MSB-first (the first bit written lands in
//! the most significant position of its byte), which is the order a decoder
//! walks the code tree in.
//!
//! # Padding Rules
//! - `close` pads an incomplete final byte with trailing zeros
//! - A sink that is dropped without `close` pads and flushes best-effort, so
//!   the final partial byte survives even on error paths
//!
//! # Example
//! ```
//! use henc_core::bitio::BitSink;
//!
//! let mut sink = BitSink::new(Vec::new());
//! sink.write_code(&[1, 0, 1]).unwrap();
//! sink.write_code(&[1, 1]).unwrap();
//! // Total: 10111 -> padded to 10111000
//!
//! let bytes = sink.close().unwrap();
//! assert_eq!(bytes, vec![0b10111000]);
//! ```

use crate::error::{BitIoError, Result};
use std::io::Write;

/// Writes bits MSB-first into an underlying byte sink.
///
/// # Invariants
/// - `bit_count` is always < 8 between calls
/// - `inner` is `Some` until the sink is closed or dropped
#[derive(Debug)]
pub struct BitSink<W: Write> {
    /// Underlying byte sink
    inner: Option<W>,
    /// Accumulator for the current partial byte (right-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
    /// Complete bytes handed to `inner`
    bytes_written: u64,
}

impl<W: Write> BitSink<W> {
    /// Wrap a byte sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner: Some(inner),
            bit_buffer: 0,
            bit_count: 0,
            bytes_written: 0,
        }
    }

    /// Write a single bit.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBit` if `bit` is neither 0 nor 1
    /// - `Error::Io` if the underlying sink rejects a completed byte
    pub fn write_bit(&mut self, bit: u8) -> Result<()> {
        if bit > 1 {
            return Err(BitIoError::InvalidBit(bit).into());
        }

        self.bit_buffer = (self.bit_buffer << 1) | bit;
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.emit_byte()?;
        }

        Ok(())
    }

    /// Write every bit of a code, first bit first.
    pub fn write_code(&mut self, bits: &[u8]) -> Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Total number of bits accepted so far (including the partial byte).
    pub fn bits_written(&self) -> u64 {
        self.bytes_written * 8 + self.bit_count as u64
    }

    /// Number of complete bytes handed to the underlying sink.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Pad the final byte with zeros, flush, and release the underlying sink.
    ///
    /// Consuming `self` makes a second close impossible.
    pub fn close(mut self) -> Result<W> {
        self.pad_and_flush()?;
        self.inner.take().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "bit sink already released").into()
        })
    }

    fn pad_and_flush(&mut self) -> Result<()> {
        if self.bit_count > 0 {
            self.bit_buffer <<= 8 - self.bit_count;
            self.emit_byte()?;
        }
        if let Some(inner) = self.inner.as_mut() {
            inner.flush()?;
        }
        Ok(())
    }

    fn emit_byte(&mut self) -> Result<()> {
        let byte = self.bit_buffer;
        self.bit_buffer = 0;
        self.bit_count = 0;
        if let Some(inner) = self.inner.as_mut() {
            inner.write_all(&[byte])?;
            self.bytes_written += 1;
        }
        Ok(())
    }
}

impl<W: Write> Drop for BitSink<W> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            // Errors have nowhere to go from Drop
            let _ = self.pad_and_flush();
            self.inner.take();
        }
    }
}
