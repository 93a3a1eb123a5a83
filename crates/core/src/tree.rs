//! Prefix-code tree construction.
//!
//! A code tree is a strict binary tree: every `Internal` node owns exactly two
//! children and every `Leaf` holds one symbol. The path from the root to a
//! leaf (0 = left, 1 = right) is that symbol's code.
//!
//! # Deterministic Construction
//!
//! Building is greedy minimum-combination with a total order on candidates:
//! - Every symbol with a nonzero count becomes a leaf candidate with
//!   `(weight = count, tiebreak = symbol)`
//! - If fewer than two candidates exist, zero-weight leaves are added for the
//!   lowest-indexed unused symbols until there are two
//! - The two smallest `(weight, tiebreak)` candidates are merged into an
//!   internal node (first popped goes left) with
//!   `weight = sum` and `tiebreak = min`
//!
//! Tiebreaks stay unique among live candidates, so the order is total and two
//! builds over the same counts always produce the same tree. A decoder
//! replaying the encoder's schedule depends on this.

use crate::error::{CodeError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// A node of a code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol
    Leaf(usize),
    /// Branch with a left (bit 0) and right (bit 1) child
    Internal(Box<Node>, Box<Node>),
}

impl Node {
    /// Combine two subtrees under a new internal node.
    pub fn internal(left: Node, right: Node) -> Self {
        Node::Internal(Box::new(left), Box::new(right))
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Internal(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// An immutable prefix-code tree whose root is always an internal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    root: Node,
    symbol_limit: usize,
}

impl CodeTree {
    /// Wrap an existing root.
    ///
    /// # Errors
    /// Returns `CodeError::AssertionFailed` if `root` is a lone leaf, which
    /// would give its symbol an empty code.
    pub fn new(root: Node, symbol_limit: usize) -> Result<Self> {
        if let Node::Leaf(_) = root {
            return Err(CodeError::AssertionFailed { candidates: 1 }.into());
        }
        Ok(Self { root, symbol_limit })
    }

    /// Build a tree from per-symbol counts (index = symbol).
    ///
    /// # Errors
    /// Returns `CodeError::AssertionFailed` if fewer than two leaves can be
    /// formed, i.e. the alphabet has fewer than two symbols.
    pub fn from_frequencies(freqs: &[u32]) -> Result<Self> {
        let mut queue: BinaryHeap<Candidate> = freqs
            .iter()
            .enumerate()
            .filter(|&(_, &freq)| freq > 0)
            .map(|(symbol, &freq)| Candidate::leaf(symbol, freq as u64))
            .collect();

        // Pad with zero-weight leaves so at least two candidates exist
        for (symbol, _) in freqs.iter().enumerate().filter(|&(_, &freq)| freq == 0) {
            if queue.len() >= 2 {
                break;
            }
            queue.push(Candidate::leaf(symbol, 0));
        }

        if queue.len() < 2 {
            return Err(CodeError::AssertionFailed {
                candidates: queue.len(),
            }
            .into());
        }

        while let (Some(first), Some(second)) = (queue.pop(), queue.pop()) {
            let merged = Candidate {
                weight: first.weight + second.weight,
                tiebreak: first.tiebreak.min(second.tiebreak),
                node: Node::internal(first.node, second.node),
            };
            if queue.is_empty() {
                return Self::new(merged.node, freqs.len());
            }
            queue.push(merged);
        }

        // The loop above always returns once two candidates exist
        Err(CodeError::AssertionFailed { candidates: 0 }.into())
    }

    /// Root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Size of the alphabet the tree was built for.
    pub fn symbol_limit(&self) -> usize {
        self.symbol_limit
    }
}

impl fmt::Display for CodeTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn walk(node: &Node, prefix: &mut String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match node {
                Node::Leaf(symbol) => writeln!(f, "Code {}: Symbol {}", prefix, symbol),
                Node::Internal(left, right) => {
                    prefix.push('0');
                    walk(left, prefix, f)?;
                    prefix.pop();
                    prefix.push('1');
                    walk(right, prefix, f)?;
                    prefix.pop();
                    Ok(())
                }
            }
        }

        walk(&self.root, &mut String::new(), f)
    }
}

/// A subtree waiting in the build queue.
#[derive(Debug)]
struct Candidate {
    weight: u64,
    tiebreak: usize,
    node: Node,
}

impl Candidate {
    fn leaf(symbol: usize, weight: u64) -> Self {
        Self {
            weight,
            tiebreak: symbol,
            node: Node::Leaf(symbol),
        }
    }
}

// BinaryHeap is a max-heap, so the ordering is reversed: the smallest
// (weight, tiebreak) pair compares greatest and pops first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.tiebreak).cmp(&(self.weight, self.tiebreak))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.tiebreak == other.tiebreak
    }
}

impl Eq for Candidate {}
