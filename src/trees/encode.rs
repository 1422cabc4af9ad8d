//! Breadth-first LOUDS encoding.

use std::collections::VecDeque;

use tracing::debug;

use super::OrderedNode;
use crate::BitBuf;

/// Raw LOUDS bits plus one payload per node, in node-number order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded<P> {
    /// `2N + 1` bits, starting with the `10` super-root prefix.
    pub bits: BitBuf,
    /// Entry v = payload produced for node v.
    pub payloads: Vec<P>,
}

/// Encode the tree rooted at `root`.
///
/// `visit` is called once per node in BFS order; its result becomes that
/// node's payload. The bits only depend on the child counts.
pub fn encode<N, P, F>(root: &N, mut visit: F) -> Encoded<P>
where
    N: OrderedNode,
    F: FnMut(&N) -> P,
{
    let mut bits = BitBuf::new();
    let mut payloads = Vec::new();

    // Super-root with the real root as its only child.
    bits.push(true);
    bits.push(false);

    let mut queue = VecDeque::new();
    queue.push_back(root);
    while let Some(node) = queue.pop_front() {
        payloads.push(visit(node));
        let children = node.children();
        bits.push_ones(children.len());
        bits.push(false);
        queue.extend(children.iter());
    }

    debug!(nodes = payloads.len(), bits = bits.len(), "encoded LOUDS tree");
    debug_assert_eq!(bits.len(), 2 * payloads.len() + 1);

    Encoded { bits, payloads }
}
