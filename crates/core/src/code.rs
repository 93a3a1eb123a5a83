//! Per-symbol code lookup derived from a code tree.
//!
//! A `CodeTable` is built once per tree by a depth-first walk that records
//! each leaf's root-to-leaf path (0 = left, 1 = right). Codes are stored as
//! one `u8` per bit so they can be fed straight into a `BitSink`.

use crate::error::{CodeError, ModelError, Result};
use crate::tree::{CodeTree, Node};

/// Read-only mapping from symbol to code bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Code per symbol; `None` if the symbol had no leaf
    codes: Vec<Option<Vec<u8>>>,
}

impl CodeTable {
    /// Derive codes from a tree over an alphabet of `symbol_limit` symbols.
    ///
    /// # Errors
    /// - `CodeError::SymbolOutOfRange` if a leaf holds a symbol `>= symbol_limit`
    /// - `CodeError::DuplicateSymbol` if two leaves hold the same symbol
    pub fn new(tree: &CodeTree, symbol_limit: usize) -> Result<Self> {
        let mut codes = vec![None; symbol_limit];
        let mut prefix = Vec::new();
        collect_codes(tree.root(), &mut prefix, &mut codes)?;
        Ok(Self { codes })
    }

    /// Derive codes using the tree's own alphabet size.
    pub fn from_tree(tree: &CodeTree) -> Result<Self> {
        Self::new(tree, tree.symbol_limit())
    }

    /// Code bits for `symbol`, first bit first.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` if `symbol` is outside the alphabet
    /// - `CodeError::NoCode` if the symbol had no leaf in the tree
    pub fn get_code(&self, symbol: usize) -> Result<&[u8]> {
        match self.codes.get(symbol) {
            None => Err(ModelError::OutOfRange {
                symbol,
                limit: self.codes.len(),
            }
            .into()),
            Some(None) => Err(CodeError::NoCode { symbol }.into()),
            Some(Some(code)) => Ok(code),
        }
    }

    /// Length in bits of the code for `symbol`.
    pub fn code_len(&self, symbol: usize) -> Result<usize> {
        self.get_code(symbol).map(<[u8]>::len)
    }

    /// Size of the alphabet.
    pub fn symbol_limit(&self) -> usize {
        self.codes.len()
    }

    /// Iterate over `(symbol, code)` for every symbol that has a code.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|bits| (symbol, bits)))
    }
}

fn collect_codes(node: &Node, prefix: &mut Vec<u8>, codes: &mut [Option<Vec<u8>>]) -> Result<()> {
    match node {
        Node::Internal(left, right) => {
            prefix.push(0);
            collect_codes(left, prefix, codes)?;
            prefix.pop();

            prefix.push(1);
            collect_codes(right, prefix, codes)?;
            prefix.pop();
        }
        Node::Leaf(symbol) => {
            let limit = codes.len();
            let slot = codes.get_mut(*symbol).ok_or(CodeError::SymbolOutOfRange {
                symbol: *symbol,
                limit,
            })?;
            if slot.is_some() {
                return Err(CodeError::DuplicateSymbol { symbol: *symbol }.into());
            }
            *slot = Some(prefix.clone());
        }
    }
    Ok(())
}
