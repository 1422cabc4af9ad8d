//! # succinct-louds
//!
//! Ordered trees and character-keyed tries encoded as LOUDS bit strings.
//!
//! A tree with `N` nodes becomes a bit string of `2N + 1` bits plus small
//! rank/select tables. Every pointer of a linked tree is replaced by
//! arithmetic over bit positions, so navigation (parent, children, siblings)
//! costs a handful of rank/select queries.
//!
//! ## Module Organization
//!
//! - [`bits`] - Bit vectors with rank and select support (dense and compact)
//! - [`trees`] - LOUDS encoder and the generic tree navigator
//! - [`trie`] - Trie builder and the succinct trie specialization
//!
//! ## Quick Start
//!
//! ```
//! use succinct_louds::SuccinctTrie;
//!
//! let trie: SuccinctTrie = ["app", "apple", "application", "banana", "band"]
//!     .into_iter()
//!     .collect();
//!
//! assert!(trie.search("app"));
//! assert!(!trie.search("appl"));
//! assert!(trie.starts_with("appl"));
//! assert_eq!(
//!     trie.words_with_prefix("app"),
//!     vec!["app", "apple", "application"]
//! );
//! ```
//!
//! ## Generic trees
//!
//! ```
//! use succinct_louds::trees::{Louds, TreeNode};
//!
//! let mut root = TreeNode::new("root");
//! root.add_child(TreeNode::new("a"));
//! root.add_child(TreeNode::new("b"));
//!
//! let louds: Louds<&str> = Louds::from_tree(&root);
//! assert_eq!(louds.to_bit_string(), "10 110 0 0");
//! assert_eq!(louds.first_child(0), Some(1));
//! assert_eq!(louds.payload(2), Some(&"b"));
//! ```

#![warn(missing_docs)]

// =============================================================================
// Core modules
// =============================================================================

/// Bit vectors with rank and select support.
pub mod bits;

/// LOUDS encoding and tree navigation.
pub mod trees;

/// Succinct trie built on the LOUDS navigator.
pub mod trie;

/// Error types for fallible construction.
pub mod error;

/// Internal utilities (not part of public API).
pub(crate) mod util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use bits::{BitBuf, CompactBitVec, DenseBitVec, FromWords};
pub use error::{Error, Result};
pub use trees::{Louds, OrderedNode, TreeNode};
pub use trie::{NodeLabel, SuccinctTrie, TrieBuilder, Words};

// =============================================================================
// Core traits
// =============================================================================

/// Trait for rank/select operations on bitvectors.
///
/// Positions are 0-based and ranks are *inclusive*:
/// - `rank1(i)`: Count 1-bits in positions `[0, i]`
/// - `select1(k)`: Find position of the k-th 1-bit (1-indexed)
///
/// Out-of-domain queries never panic. Ranks past the end saturate to the
/// total count, and selects for a missing bit return `None`.
pub trait RankSelect {
    /// Number of bits.
    fn len(&self) -> usize;

    /// Returns true if the vector holds no bits.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bit at position `i`, `false` when out of range.
    fn get(&self, i: usize) -> bool;

    /// Total number of 1-bits.
    fn count_ones(&self) -> usize;

    /// Total number of 0-bits.
    #[inline]
    fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Count 1-bits in positions `[0, i]`.
    ///
    /// Returns the total one-count if `i >= len()`.
    fn rank1(&self, i: usize) -> usize;

    /// Count 0-bits in positions `[0, i]`.
    ///
    /// Default implementation: `i - rank1(i) + 1`
    #[inline]
    fn rank0(&self, i: usize) -> usize {
        if i >= self.len() {
            return self.count_zeros();
        }
        i + 1 - self.rank1(i)
    }

    /// Find position of the k-th 1-bit (1-indexed).
    ///
    /// Returns `None` if `k == 0` or fewer than `k` ones exist.
    fn select1(&self, k: usize) -> Option<usize>;

    /// Find position of the k-th 0-bit (1-indexed).
    ///
    /// Returns `None` if `k == 0` or fewer than `k` zeros exist.
    fn select0(&self, k: usize) -> Option<usize>;

    /// Heap memory owned by the bits and their index tables, in bytes.
    fn heap_size(&self) -> usize;
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for building indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Sample rate for select acceleration in [`CompactBitVec`] (default: 256)
    pub select_sample_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            select_sample_rate: 256,
        }
    }
}

impl Config {
    /// Set the select sample rate. Zero is treated as one.
    pub fn with_select_sample_rate(mut self, rate: u32) -> Self {
        self.select_sample_rate = rate.max(1);
        self
    }
}
