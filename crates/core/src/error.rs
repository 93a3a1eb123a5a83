//! Error types for the henc encoder.
//!
//! All operations return structured errors rather than panicking. None of
//! these conditions is recoverable at the point of detection: the encoder
//! aborts the session and closes its output.

use thiserror::Error;

/// Top-level error type for all operations in the encoder.
///
/// Each variant corresponds to a specific failure domain:
/// - Model: frequency table construction and updates
/// - Code: tree building and code table derivation
/// - Bit I/O: packing bits into the output byte sink
/// - I/O: reading the byte source or writing the byte sink
#[derive(Debug, Error)]
pub enum Error {
    /// Frequency model error (bad configuration, bad symbol, saturated counter)
    #[error("frequency model error: {0}")]
    Model(#[from] ModelError),

    /// Code tree or code table invariant violated
    #[error("code construction error: {0}")]
    Code(#[from] CodeError),

    /// Bit I/O operation failed
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Byte source or byte sink failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Frequency model errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Table too small or otherwise unusable
    #[error("invalid frequency table: {reason}")]
    InvalidConfiguration { reason: String },

    /// Symbol index outside `[0, limit)`
    #[error("symbol {symbol} out of range (alphabet size {limit})")]
    OutOfRange { symbol: usize, limit: usize },

    /// Counter already at its maximum representable value
    #[error("frequency counter for symbol {symbol} would overflow")]
    Overflow { symbol: usize },
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// Bit value other than 0 or 1
    #[error("invalid bit value {0}: must be 0 or 1")]
    InvalidBit(u8),
}

/// Code tree and code table errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    /// Symbol had no leaf in the tree the table was built from
    #[error("no code for symbol {symbol}")]
    NoCode { symbol: usize },

    /// Traversal found the same symbol at two leaves
    #[error("symbol {symbol} has more than one code")]
    DuplicateSymbol { symbol: usize },

    /// Leaf symbol exceeds the table's declared alphabet size
    #[error("leaf symbol {symbol} out of range (alphabet size {limit})")]
    SymbolOutOfRange { symbol: usize, limit: usize },

    /// Fewer than two leaves could be formed
    #[error("code tree needs at least two symbols, got {candidates}")]
    AssertionFailed { candidates: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
