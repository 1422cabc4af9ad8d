//! The LOUDS navigator: tree operations as rank/select arithmetic.

use core::fmt;
use core::ops::Range;

use super::{encode, Encoded, OrderedNode, TreeNode};
use crate::bits::{BitBuf, DenseBitVec, FromWords};
use crate::error::{Error, Result};
use crate::{Config, RankSelect};

/// An immutable ordered tree stored as LOUDS bits plus a payload per node.
///
/// Nodes are numbered `0..node_count()` in BFS order with the root at 0.
/// Every navigation method returns `None` (or `false`/0) for absent
/// relatives and for node numbers outside the tree; none of them panic.
///
/// The bit backend `B` defaults to [`DenseBitVec`]; any [`RankSelect`]
/// implementation works, e.g. [`CompactBitVec`](crate::CompactBitVec).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Louds<P, B = DenseBitVec> {
    bits: B,
    payloads: Vec<P>,
}

impl<P, B: RankSelect + FromWords> Louds<P, B> {
    /// Freeze an encoding produced by [`encode`].
    pub fn from_encoded(encoded: Encoded<P>) -> Self {
        Self::from_encoded_with_config(encoded, &Config::default())
    }

    /// Freeze an encoding with explicit backend configuration.
    pub fn from_encoded_with_config(encoded: Encoded<P>, config: &Config) -> Self {
        Self {
            bits: encoded.bits.freeze_with_config(config),
            payloads: encoded.payloads,
        }
    }

    /// Encode any ordered tree, computing each node's payload with `visit`.
    pub fn from_tree_with<N, F>(root: &N, visit: F) -> Self
    where
        N: OrderedNode,
        F: FnMut(&N) -> P,
    {
        Self::from_encoded(encode(root, visit))
    }
}

impl<P: Clone, B: RankSelect + FromWords> Louds<P, B> {
    /// Encode a [`TreeNode`] tree, cloning each payload.
    pub fn from_tree(root: &TreeNode<P>) -> Self {
        Self::from_tree_with(root, |node| node.payload.clone())
    }
}

impl<B: RankSelect + FromWords> Louds<(), B> {
    /// Parse the rendering produced by [`to_bit_string`](Self::to_bit_string).
    ///
    /// Whitespace is ignored; the result carries `()` payloads.
    pub fn from_bit_string(s: &str) -> Result<Self> {
        let mut buf = BitBuf::with_capacity(s.len());
        for (offset, c) in s.char_indices() {
            match c {
                '0' => buf.push(false),
                '1' => buf.push(true),
                c if c.is_whitespace() => {}
                found => return Err(Error::InvalidBitChar { offset, found }),
            }
        }
        let nodes = buf.len() / 2;
        Self::from_parts(buf.freeze(), vec![(); nodes])
    }
}

impl<P, B: RankSelect> Louds<P, B> {
    /// Assemble from an existing bit vector and payloads, validating the
    /// encoding.
    pub fn from_parts(bits: B, payloads: Vec<P>) -> Result<Self> {
        if bits.len() < 2 || !bits.get(0) || bits.get(1) {
            return Err(Error::MissingSuperRoot);
        }

        let ones = bits.count_ones();
        let zeros = bits.count_zeros();
        if zeros != ones + 1 {
            return Err(Error::UnbalancedBits { ones, zeros });
        }

        // The j-th 0 closes node j-2 (j = 1 is the super-root), whose edge
        // is the (j-1)-th 1. All but the final 0 need the j-th 1 before them.
        let mut seen_ones = 0;
        let mut closed = 0;
        for position in 0..bits.len() {
            if bits.get(position) {
                seen_ones += 1;
            } else {
                closed += 1;
                if closed <= ones && seen_ones < closed {
                    return Err(Error::UndiscoveredNode { position });
                }
            }
        }

        if payloads.len() != ones {
            return Err(Error::PayloadCountMismatch {
                nodes: ones,
                payloads: payloads.len(),
            });
        }

        Ok(Self { bits, payloads })
    }

    /// The root's node number.
    #[inline]
    pub fn root(&self) -> usize {
        0
    }

    /// Number of nodes, excluding the super-root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.payloads.len()
    }

    /// Length of the bit string, always `2 * node_count() + 1`.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// The underlying rank/select bit vector.
    #[inline]
    pub fn bits(&self) -> &B {
        &self.bits
    }

    /// Payload of node `v`.
    #[inline]
    pub fn payload(&self, v: usize) -> Option<&P> {
        self.payloads.get(v)
    }

    /// All payloads in node-number order.
    #[inline]
    pub fn payloads(&self) -> &[P] {
        &self.payloads
    }

    /// Heap memory used by bits, tables and payloads, in bytes.
    pub fn heap_size(&self) -> usize {
        self.bits.heap_size() + self.payloads.capacity() * core::mem::size_of::<P>()
    }

    /// Parent of `v`: `rank0(select1(v + 1) - 1) - 1`.
    #[inline]
    pub fn parent(&self, v: usize) -> Option<usize> {
        if v >= self.node_count() {
            return None;
        }
        let edge = self.bits.select1(v + 1)?;
        self.bits.rank0(edge.checked_sub(1)?).checked_sub(1)
    }

    /// First child of `v`: `select0(v + 1) - v` when the next bit is a 1.
    #[inline]
    pub fn first_child(&self, v: usize) -> Option<usize> {
        if v >= self.node_count() {
            return None;
        }
        let start = self.bits.select0(v + 1)?;
        if !self.bits.get(start + 1) {
            return None;
        }
        Some(start - v)
    }

    /// Last child of `v`: `rank1(select0(v + 2) - 2)`.
    #[inline]
    pub fn last_child(&self, v: usize) -> Option<usize> {
        self.first_child(v)?;
        let end = self.bits.select0(v + 2)?;
        Some(self.bits.rank1(end.checked_sub(2)?))
    }

    /// Number of children of `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        match (self.first_child(v), self.last_child(v)) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    /// The `i`-th child of `v`, 1-based.
    #[inline]
    pub fn child(&self, v: usize, i: usize) -> Option<usize> {
        if i == 0 {
            return None;
        }
        let first = self.first_child(v)?;
        let last = self.last_child(v)?;
        (i - 1 <= last - first).then(|| first + i - 1)
    }

    /// Children of `v` as a contiguous range of node numbers.
    #[inline]
    pub fn children(&self, v: usize) -> Range<usize> {
        match (self.first_child(v), self.last_child(v)) {
            (Some(first), Some(last)) => first..last + 1,
            _ => 0..0,
        }
    }

    /// 1-based position of `v` among its parent's children; `None` for the
    /// root.
    #[inline]
    pub fn child_rank(&self, v: usize) -> Option<usize> {
        let parent = self.parent(v)?;
        let first = self.first_child(parent)?;
        Some(v - first + 1)
    }

    /// The sibling right after `v`.
    #[inline]
    pub fn next_sibling(&self, v: usize) -> Option<usize> {
        let parent = self.parent(v)?;
        self.child(parent, self.child_rank(v)? + 1)
    }

    /// The sibling right before `v`.
    #[inline]
    pub fn prev_sibling(&self, v: usize) -> Option<usize> {
        let parent = self.parent(v)?;
        self.child(parent, self.child_rank(v)? - 1)
    }

    /// True if `v` is a node without children.
    #[inline]
    pub fn is_leaf(&self, v: usize) -> bool {
        v < self.node_count() && self.first_child(v).is_none()
    }

    /// Bits as `0`/`1` with a space after every `0`, e.g. `10 1110 0 0 0 0`.
    pub fn to_bit_string(&self) -> String {
        self.to_string()
    }
}

impl<P, B: RankSelect> fmt::Display for Louds<P, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.bits.len();
        for i in 0..len {
            if self.bits.get(i) {
                f.write_str("1")?;
            } else {
                f.write_str("0")?;
                if i + 1 < len {
                    f.write_str(" ")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompactBitVec;

    //        0
    //      / | \
    //     1  2  3
    //       / \
    //      4   5
    fn sample_tree() -> TreeNode<u32> {
        TreeNode::with_children(
            0,
            vec![
                TreeNode::new(1),
                TreeNode::with_children(2, vec![TreeNode::new(4), TreeNode::new(5)]),
                TreeNode::new(3),
            ],
        )
    }

    #[test]
    fn test_construction() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());
        assert_eq!(louds.node_count(), 6);
        assert_eq!(louds.bit_len(), 13);
        assert_eq!(louds.to_bit_string(), "10 1110 0 110 0 0 0");
        assert_eq!(louds.payloads(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rank_select_on_encoding() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());
        let bits = louds.bits();
        assert_eq!(bits.rank1(10), 6);
        assert_eq!(bits.select1(4), Some(4));
        assert_eq!(bits.rank0(10), 5);
        assert_eq!(bits.select0(5), Some(10));
        assert_eq!(bits.rank1(0), 1);
        assert_eq!(bits.rank1(100), louds.node_count());
        assert_eq!(bits.select1(0), None);
        assert_eq!(bits.select1(100), None);
        assert_eq!(bits.select0(0), None);
    }

    #[test]
    fn test_navigation() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());

        assert_eq!(louds.parent(0), None);
        assert_eq!(louds.first_child(0), Some(1));
        assert_eq!(louds.last_child(0), Some(3));
        assert_eq!(louds.degree(0), 3);
        assert!(!louds.is_leaf(0));

        for leaf in [1, 3, 4, 5] {
            assert!(louds.is_leaf(leaf), "node {} should be a leaf", leaf);
            assert_eq!(louds.degree(leaf), 0);
            assert_eq!(louds.first_child(leaf), None);
            assert_eq!(louds.last_child(leaf), None);
        }

        assert_eq!(louds.parent(1), Some(0));
        assert_eq!(louds.parent(2), Some(0));
        assert_eq!(louds.parent(3), Some(0));
        assert_eq!(louds.parent(4), Some(2));
        assert_eq!(louds.parent(5), Some(2));
        assert_eq!(louds.first_child(2), Some(4));
        assert_eq!(louds.last_child(2), Some(5));
        assert_eq!(louds.degree(2), 2);
        assert_eq!(louds.children(2), 4..6);
        assert_eq!(louds.children(3), 0..0);
    }

    #[test]
    fn test_siblings() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());
        assert_eq!(louds.next_sibling(1), Some(2));
        assert_eq!(louds.next_sibling(2), Some(3));
        assert_eq!(louds.next_sibling(3), None);
        assert_eq!(louds.prev_sibling(1), None);
        assert_eq!(louds.prev_sibling(2), Some(1));
        assert_eq!(louds.prev_sibling(3), Some(2));
        assert_eq!(louds.next_sibling(4), Some(5));
        assert_eq!(louds.next_sibling(5), None);
        assert_eq!(louds.prev_sibling(4), None);
        assert_eq!(louds.prev_sibling(5), Some(4));
        assert_eq!(louds.prev_sibling(0), None);
        assert_eq!(louds.next_sibling(0), None);
    }

    #[test]
    fn test_child_and_child_rank() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());
        assert_eq!(louds.child(0, 1), Some(1));
        assert_eq!(louds.child(0, 2), Some(2));
        assert_eq!(louds.child(0, 3), Some(3));
        assert_eq!(louds.child(0, 4), None);
        assert_eq!(louds.child(1, 1), None);
        assert_eq!(louds.child(1, 0), None);
        assert_eq!(louds.child(2, 1), Some(4));
        assert_eq!(louds.child(2, 2), Some(5));
        assert_eq!(louds.child(3, 2), None);

        assert_eq!(louds.child_rank(0), None);
        assert_eq!(louds.child_rank(1), Some(1));
        assert_eq!(louds.child_rank(2), Some(2));
        assert_eq!(louds.child_rank(3), Some(3));
        assert_eq!(louds.child_rank(4), Some(1));
        assert_eq!(louds.child_rank(5), Some(2));
    }

    #[test]
    fn test_out_of_range_nodes() {
        let louds: Louds<u32> = Louds::from_tree(&sample_tree());
        for v in [6, 7, 100, usize::MAX - 2] {
            assert_eq!(louds.parent(v), None);
            assert_eq!(louds.first_child(v), None);
            assert_eq!(louds.last_child(v), None);
            assert_eq!(louds.degree(v), 0);
            assert_eq!(louds.child_rank(v), None);
            assert_eq!(louds.next_sibling(v), None);
            assert!(!louds.is_leaf(v));
            assert_eq!(louds.payload(v), None);
        }
    }

    #[test]
    fn test_compact_backend_navigates_identically() {
        let dense: Louds<u32> = Louds::from_tree(&sample_tree());
        let compact: Louds<u32, CompactBitVec> = Louds::from_tree(&sample_tree());
        for v in 0..6 {
            assert_eq!(dense.parent(v), compact.parent(v));
            assert_eq!(dense.first_child(v), compact.first_child(v));
            assert_eq!(dense.last_child(v), compact.last_child(v));
            assert_eq!(dense.next_sibling(v), compact.next_sibling(v));
        }
        assert_eq!(dense.to_bit_string(), compact.to_bit_string());
    }

    #[test]
    fn test_parse_bit_string() {
        let parsed: Louds<()> = Louds::from_bit_string("10 1110 0 110 0 0 0").unwrap();
        assert_eq!(parsed.node_count(), 6);
        assert_eq!(parsed.children(2), 4..6);

        assert_eq!(
            Louds::<()>::from_bit_string("10 1x0").unwrap_err(),
            Error::InvalidBitChar {
                offset: 4,
                found: 'x'
            }
        );
        assert_eq!(
            Louds::<()>::from_bit_string("0110").unwrap_err(),
            Error::MissingSuperRoot
        );
        assert_eq!(
            Louds::<()>::from_bit_string("10 10").unwrap_err(),
            Error::UnbalancedBits { ones: 2, zeros: 2 }
        );
        // Node 1 is closed before any edge created it.
        assert_eq!(
            Louds::<()>::from_bit_string("10 0 10").unwrap_err(),
            Error::UndiscoveredNode { position: 2 }
        );
    }

    #[test]
    fn test_payload_count_checked() {
        let bits: DenseBitVec = "100".chars().map(|c| c == '1').collect::<BitBuf>().freeze();
        assert_eq!(
            Louds::from_parts(bits, vec!['a', 'b']).unwrap_err(),
            Error::PayloadCountMismatch {
                nodes: 1,
                payloads: 2
            }
        );
    }
}
