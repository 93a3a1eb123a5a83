//! Adaptive encoding driver.
//!
//! The encoder reads symbols one at a time, emits each through the current
//! code table, and feeds it back into the frequency model. The code table is
//! rebuilt on a fixed schedule so a decoder can reproduce every table without
//! any tree being transmitted.
//!
//! # Schedule
//!
//! After the `count`-th data symbol (1-based):
//! - **Rebuild** if `count < block_size` and `count` is a power of two
//!   (warm-up: 1, 2, 4, 8, ...), or if `count` is a multiple of `block_size`
//! - **Reset** the model to all-ones if `count` is a multiple of `block_size`
//!
//! At a block boundary the rebuild happens first, from the counts of the
//! block that just ended, and the model is reset afterwards. The reset model
//! only reaches a code table at the next boundary.
//!
//! # Wire Format
//!
//! ```text
//! code(s1) code(s2) ... code(sN) code(EOF) 0-padding
//! ```
//!
//! No header, tree, or length is written. `alphabet_size` and `block_size` are
//! part of the contract between encoder and decoder; the defaults are 257 and
//! 262144, with symbol 256 marking end-of-stream.

use crate::bitio::BitSink;
use crate::code::CodeTable;
use crate::error::{Error, ModelError, Result};
use crate::metrics::EncodeStats;
use crate::model::FrequencyTable;
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, info, warn};

/// Default alphabet: 256 byte values plus the end-of-stream marker.
pub const ALPHABET_SIZE: usize = 257;

/// End-of-stream marker in the default alphabet.
pub const EOF_SYMBOL: usize = ALPHABET_SIZE - 1;

/// Symbols per block in the default schedule.
pub const BLOCK_SIZE: u64 = 262_144;

/// Read buffer size used by `encode_reader`.
const READ_CHUNK: usize = 8192;

/// Parameters shared by an encoder and any decoder of its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Number of symbols, end-of-stream marker included
    pub alphabet_size: usize,

    /// Symbols between model resets
    pub block_size: u64,
}

impl EncoderConfig {
    /// The end-of-stream symbol (always the last in the alphabet).
    pub fn eof_symbol(&self) -> usize {
        self.alphabet_size - 1
    }

    /// Check that the configuration can drive an encoder.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_size < 2 {
            return Err(ModelError::InvalidConfiguration {
                reason: format!("alphabet size must be at least 2, got {}", self.alphabet_size),
            }
            .into());
        }
        if self.block_size == 0 {
            return Err(Error::Config("block size must be nonzero".to_string()));
        }
        Ok(())
    }

    /// Whether the code table is rebuilt after the `count`-th symbol.
    pub fn rebuild_reason(&self, count: u64) -> Option<RebuildReason> {
        if count == 0 {
            None
        } else if count % self.block_size == 0 {
            Some(RebuildReason::BlockBoundary)
        } else if count < self.block_size && count.is_power_of_two() {
            Some(RebuildReason::WarmUp)
        } else {
            None
        }
    }

    /// Whether the model is reset after the `count`-th symbol.
    pub fn is_block_boundary(&self, count: u64) -> bool {
        count != 0 && count % self.block_size == 0
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            alphabet_size: ALPHABET_SIZE,
            block_size: BLOCK_SIZE,
        }
    }
}

/// Why a code table was rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildReason {
    /// Power-of-two symbol count within the first block
    WarmUp,
    /// Symbol count is a multiple of the block size
    BlockBoundary,
}

/// Streaming adaptive Huffman encoder over a byte sink.
///
/// Owns the frequency model, current code table and bit sink for one session.
/// Call `finish` to emit the end-of-stream marker and close the output, or
/// `abort` to close it without the marker.
pub struct AdaptiveEncoder<W: Write> {
    config: EncoderConfig,
    sink: BitSink<W>,
    model: FrequencyTable,
    codes: CodeTable,
    /// Data symbols encoded so far
    count: u64,
    stats: EncodeStats,
}

impl<W: Write> AdaptiveEncoder<W> {
    /// Create an encoder with the default alphabet and block size.
    pub fn new(output: W) -> Result<Self> {
        Self::with_config(output, EncoderConfig::default())
    }

    /// Create an encoder with explicit parameters.
    ///
    /// The model starts all-ones, so every symbol (end-of-stream included)
    /// has a code before any data is seen.
    pub fn with_config(output: W, config: EncoderConfig) -> Result<Self> {
        config.validate()?;

        let model = FrequencyTable::uniform(config.alphabet_size)?;
        let codes = CodeTable::from_tree(&model.build_code_tree()?)?;

        let mut stats = EncodeStats::new();
        stats.tree_rebuilds = 1;

        Ok(Self {
            config,
            sink: BitSink::new(output),
            model,
            codes,
            count: 0,
            stats,
        })
    }

    /// Encode one byte.
    pub fn encode_byte(&mut self, byte: u8) -> Result<()> {
        self.encode_symbol(byte as usize)
    }

    /// Encode one data symbol and advance the schedule.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` if `symbol` is the end-of-stream marker or
    ///   lies outside the alphabet
    /// - Any model, code or I/O error from the step; the session is then
    ///   unusable and should be aborted
    pub fn encode_symbol(&mut self, symbol: usize) -> Result<()> {
        let eof = self.config.eof_symbol();
        if symbol >= eof {
            return Err(ModelError::OutOfRange { symbol, limit: eof }.into());
        }

        self.emit(symbol)?;
        self.model.increment(symbol)?;
        self.count += 1;
        self.stats.input_symbols += 1;

        if let Some(reason) = self.config.rebuild_reason(self.count) {
            self.codes = CodeTable::from_tree(&self.model.build_code_tree()?)?;
            self.stats.tree_rebuilds += 1;
            debug!(count = self.count, ?reason, "rebuilt code table");
        }

        if self.config.is_block_boundary(self.count) {
            self.model = FrequencyTable::uniform(self.config.alphabet_size)?;
            self.stats.model_resets += 1;
            debug!(count = self.count, "reset frequency model");
        }

        Ok(())
    }

    /// Encode every byte of a slice.
    pub fn encode_all(&mut self, data: &[u8]) -> Result<()> {
        for &byte in data {
            self.encode_byte(byte)?;
        }
        Ok(())
    }

    /// Encode every byte from `input` until end-of-stream.
    pub fn encode_reader<R: Read>(&mut self, mut input: R) -> Result<()> {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.encode_all(&buf[..n])?;
        }
    }

    /// Emit the end-of-stream marker, close the sink and return it with the
    /// session statistics.
    pub fn finish(mut self) -> Result<(W, EncodeStats)> {
        self.emit(self.config.eof_symbol())?;

        let Self { sink, mut stats, .. } = self;
        stats.output_bytes = sink.bits_written().div_ceil(8);
        let output = sink.close()?;
        stats.complete();

        info!(
            input_symbols = stats.input_symbols,
            output_bytes = stats.output_bytes,
            tree_rebuilds = stats.tree_rebuilds,
            model_resets = stats.model_resets,
            "encoding complete"
        );

        Ok((output, stats))
    }

    /// Close the sink without the end-of-stream marker.
    ///
    /// Pending bits are still padded and written.
    pub fn abort(self) -> Result<W> {
        warn!(count = self.count, "aborting encode session");
        self.sink.close()
    }

    /// Statistics so far.
    pub fn stats(&self) -> &EncodeStats {
        &self.stats
    }

    /// Code table currently used for emission.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// Current frequency model.
    pub fn model(&self) -> &FrequencyTable {
        &self.model
    }

    /// Data symbols encoded so far.
    pub fn symbols_encoded(&self) -> u64 {
        self.count
    }

    /// Bits emitted so far.
    pub fn bits_written(&self) -> u64 {
        self.sink.bits_written()
    }

    /// Parameters of this session.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    fn emit(&mut self, symbol: usize) -> Result<()> {
        let code = self.codes.get_code(symbol)?;
        self.sink.write_code(code)?;
        self.stats.output_bits += code.len() as u64;
        Ok(())
    }
}

/// Encode a whole byte stream with the default parameters.
///
/// The sink is closed on every path: with the end-of-stream marker on
/// success, without it if reading or encoding fails.
pub fn encode<R: Read, W: Write>(input: R, output: W) -> Result<EncodeStats> {
    encode_with_config(input, output, EncoderConfig::default())
}

/// Encode a whole byte stream with explicit parameters.
pub fn encode_with_config<R: Read, W: Write>(
    input: R,
    output: W,
    config: EncoderConfig,
) -> Result<EncodeStats> {
    let mut encoder = AdaptiveEncoder::with_config(output, config)?;

    match encoder.encode_reader(input) {
        Ok(()) => encoder.finish().map(|(_, stats)| stats),
        Err(err) => {
            if let Err(close_err) = encoder.abort() {
                warn!(error = %close_err, "failed to close output after encode error");
            }
            Err(err)
        }
    }
}

/// Encode a byte slice into a new buffer with the default parameters.
pub fn encode_to_vec(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = AdaptiveEncoder::new(Vec::new())?;
    encoder.encode_all(data)?;
    encoder.finish().map(|(bytes, _)| bytes)
}
