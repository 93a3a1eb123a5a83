//! Symbol frequency model.
//!
//! A `FrequencyTable` holds one occurrence counter per symbol of a closed
//! alphabet `[0, limit)`. The encoder increments counters as symbols go by
//! and periodically turns a snapshot of the table into a code tree.
//!
//! Counters saturate: incrementing a counter that already holds `u32::MAX`
//! is an error and leaves the counter untouched. The encoder resets the table
//! on a fixed schedule long before that can happen in practice.

use crate::error::{ModelError, Result};
use crate::tree::CodeTree;
use std::fmt;

/// Occurrence counts over a closed symbol alphabet.
///
/// # Invariants
/// - `counts.len() >= 2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u32>,
}

impl FrequencyTable {
    /// Create a table from initial counts (index = symbol).
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfiguration` if fewer than two counts
    /// are given.
    pub fn new(counts: Vec<u32>) -> Result<Self> {
        if counts.len() < 2 {
            return Err(ModelError::InvalidConfiguration {
                reason: format!("at least 2 symbols required, got {}", counts.len()),
            }
            .into());
        }
        Ok(Self { counts })
    }

    /// Create a table of `limit` symbols, each with count 1.
    ///
    /// Every symbol of a uniform table is codable before any data is seen.
    pub fn uniform(limit: usize) -> Result<Self> {
        Self::new(vec![1; limit])
    }

    /// Number of symbols in the alphabet.
    pub fn symbol_limit(&self) -> usize {
        self.counts.len()
    }

    /// Current count for `symbol`.
    pub fn get(&self, symbol: usize) -> Result<u32> {
        self.check_range(symbol)?;
        Ok(self.counts[symbol])
    }

    /// Overwrite the count for `symbol`.
    pub fn set(&mut self, symbol: usize, freq: u32) -> Result<()> {
        self.check_range(symbol)?;
        self.counts[symbol] = freq;
        Ok(())
    }

    /// Add one to the count for `symbol`.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` if `symbol >= symbol_limit()`
    /// - `ModelError::Overflow` if the counter is already saturated
    pub fn increment(&mut self, symbol: usize) -> Result<()> {
        self.check_range(symbol)?;
        let count = &mut self.counts[symbol];
        *count = count
            .checked_add(1)
            .ok_or(ModelError::Overflow { symbol })?;
        Ok(())
    }

    /// All counts, indexed by symbol.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Build the prefix-code tree for the current counts.
    pub fn build_code_tree(&self) -> Result<CodeTree> {
        CodeTree::from_frequencies(&self.counts)
    }

    fn check_range(&self, symbol: usize) -> Result<()> {
        if symbol >= self.counts.len() {
            return Err(ModelError::OutOfRange {
                symbol,
                limit: self.counts.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.counts.iter().enumerate() {
            writeln!(f, "{}\t{}", symbol, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_uniform() {
        let table = FrequencyTable::uniform(257).unwrap();
        assert_eq!(table.symbol_limit(), 257);
        assert!(table.counts().iter().all(|&c| c == 1));
    }

    #[test]
    fn test_too_small() {
        for counts in [vec![], vec![5]] {
            let result = FrequencyTable::new(counts);
            assert!(matches!(
                result,
                Err(Error::Model(ModelError::InvalidConfiguration { .. }))
            ));
        }
    }

    #[test]
    fn test_get_set_increment() {
        let mut table = FrequencyTable::new(vec![0, 3, 7]).unwrap();
        assert_eq!(table.get(1).unwrap(), 3);

        table.set(0, 10).unwrap();
        table.increment(0).unwrap();
        table.increment(2).unwrap();

        assert_eq!(table.counts(), &[11, 3, 8]);
    }

    #[test]
    fn test_out_of_range() {
        let mut table = FrequencyTable::uniform(4).unwrap();

        assert!(matches!(
            table.get(4),
            Err(Error::Model(ModelError::OutOfRange { symbol: 4, limit: 4 }))
        ));
        assert!(matches!(
            table.set(9, 1),
            Err(Error::Model(ModelError::OutOfRange { .. }))
        ));
        assert!(matches!(
            table.increment(4),
            Err(Error::Model(ModelError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_overflow_leaves_counter_unchanged() {
        let mut table = FrequencyTable::uniform(2).unwrap();
        table.set(1, u32::MAX).unwrap();

        let result = table.increment(1);
        assert!(matches!(
            result,
            Err(Error::Model(ModelError::Overflow { symbol: 1 }))
        ));
        assert_eq!(table.get(1).unwrap(), u32::MAX);
    }

    #[test]
    fn test_display() {
        let table = FrequencyTable::new(vec![4, 0]).unwrap();
        assert_eq!(table.to_string(), "0\t4\n1\t0\n");
    }
}
