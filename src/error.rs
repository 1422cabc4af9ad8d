//! Error types for building LOUDS structures from raw parts.
//!
//! Queries never fail; they report absence with `None`, `false` or an empty
//! result. Only constructors that accept caller-supplied encodings can reject
//! their input.

use thiserror::Error;

/// Errors raised while validating a LOUDS encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The bit-string rendering contained something other than `0`, `1` or
    /// whitespace.
    #[error("invalid character {found:?} at offset {offset} in LOUDS bit string")]
    InvalidBitChar {
        /// Byte offset of the offending character.
        offset: usize,
        /// The character that was found.
        found: char,
    },

    /// The encoding does not start with the `10` super-root prefix.
    #[error("LOUDS encoding must start with the super-root prefix \"10\"")]
    MissingSuperRoot,

    /// A LOUDS encoding of `n` nodes has `n` ones and `n + 1` zeros.
    #[error("unbalanced LOUDS encoding: {ones} ones and {zeros} zeros")]
    UnbalancedBits {
        /// Number of 1-bits found.
        ones: usize,
        /// Number of 0-bits found.
        zeros: usize,
    },

    /// A 0-bit closes the child list of a node no earlier 1-bit created.
    #[error("0-bit at position {position} closes an undiscovered node")]
    UndiscoveredNode {
        /// Position of the offending 0-bit.
        position: usize,
    },

    /// One payload is required per node.
    #[error("payload count mismatch: {nodes} nodes but {payloads} payloads")]
    PayloadCountMismatch {
        /// Number of nodes in the encoding.
        nodes: usize,
        /// Number of payloads supplied.
        payloads: usize,
    },
}

/// A specialized Result type for LOUDS construction.
pub type Result<T> = std::result::Result<T, Error>;
