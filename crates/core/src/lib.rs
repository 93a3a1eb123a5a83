//! henc-core: Adaptive Huffman entropy encoder
//!
//! This library turns a byte stream into a compact bit stream with a prefix
//! code that adapts to the data as it is read:
//! - Counts symbol frequencies as bytes go by
//! - Rebuilds a Huffman code tree on a fixed, reproducible schedule
//! - Packs each symbol's code MSB-first into output bytes
//! - Ends the stream with a reserved end-of-stream symbol
//!
//! # Architecture
//!
//! Modules, leaves first:
//! - `bitio`: Bit sink packing single bits into bytes
//! - `model`: Frequency table over a closed alphabet
//! - `tree`: Deterministic code tree construction
//! - `code`: Per-symbol code lookup derived from a tree
//! - `encoder`: Adaptive driver with the rebuild/reset schedule
//! - `metrics`: Per-session statistics
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and propagated
//! - **Deterministic**: Equal frequency snapshots always yield the same tree,
//!   so a decoder replaying the schedule stays in lockstep
//! - **Guaranteed release**: The output is padded and flushed on every exit path
//!
//! # Example
//! ```
//! let encoded = henc_core::encode_to_vec(b"abracadabra").unwrap();
//! assert_eq!(encoded.len(), 12);
//! ```

pub mod bitio;
pub mod code;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod model;
pub mod tree;

// Re-export commonly used types
pub use encoder::{
    encode, encode_to_vec, encode_with_config, AdaptiveEncoder, EncoderConfig, ALPHABET_SIZE,
    BLOCK_SIZE, EOF_SYMBOL,
};
pub use error::{Error, Result};
pub use metrics::EncodeStats;
