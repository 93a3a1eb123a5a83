//! Reference decoder used only by the tests.
//!
//! Replays the encoder's rebuild/reset schedule over the same alphabet and
//! block size, walking the current tree one bit at a time.

#![allow(dead_code)]

use henc_core::encoder::EncoderConfig;
use henc_core::model::FrequencyTable;
use henc_core::tree::Node;

/// Reads bits MSB-first from a byte buffer.
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    pub fn read_bit(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.bit_position / 8)?;
        let bit = (byte >> (7 - self.bit_position % 8)) & 1;
        self.bit_position += 1;
        Some(bit)
    }

    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }
}

/// Decoded data symbols plus the number of padding bits after the
/// end-of-stream marker.
pub struct Decoded {
    pub symbols: Vec<usize>,
    pub padding_bits: usize,
    pub padding_is_zero: bool,
}

/// Decode a stream produced with `config`.
///
/// Panics on a truncated stream, which is a test failure.
pub fn decode_symbols(encoded: &[u8], config: EncoderConfig) -> Decoded {
    let mut reader = BitReader::new(encoded);
    let mut model = FrequencyTable::uniform(config.alphabet_size).unwrap();
    let mut tree = model.build_code_tree().unwrap();
    let mut symbols = Vec::new();
    let mut count = 0u64;

    loop {
        let mut node = tree.root();
        let symbol = loop {
            match node {
                Node::Leaf(symbol) => break *symbol,
                Node::Internal(left, right) => {
                    let bit = reader.read_bit().expect("stream ended before end-of-stream marker");
                    node = if bit == 0 { &**left } else { &**right };
                }
            }
        };

        if symbol == config.eof_symbol() {
            break;
        }

        symbols.push(symbol);
        model.increment(symbol).unwrap();
        count += 1;

        if config.rebuild_reason(count).is_some() {
            tree = model.build_code_tree().unwrap();
        }
        if config.is_block_boundary(count) {
            model = FrequencyTable::uniform(config.alphabet_size).unwrap();
        }
    }

    let padding_bits = reader.bits_remaining();
    let mut padding_is_zero = true;
    while let Some(bit) = reader.read_bit() {
        padding_is_zero &= bit == 0;
    }

    Decoded {
        symbols,
        padding_bits,
        padding_is_zero,
    }
}

/// Decode a byte stream produced with `config`.
pub fn decode(encoded: &[u8], config: EncoderConfig) -> Vec<u8> {
    decode_symbols(encoded, config)
        .symbols
        .into_iter()
        .map(|s| s as u8)
        .collect()
}
