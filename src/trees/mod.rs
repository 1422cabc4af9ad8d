//! LOUDS (Level-Order Unary Degree Sequence) trees.
//!
//! A tree is written breadth-first: after a synthetic `10` for the
//! super-root, every node contributes one `1` per child followed by a `0`.
//! Node numbers are the BFS order, so the k-th `1` is the edge into node
//! `k - 1` and the k-th `0` closes the child list of node `k - 2`.
//!
//! ```text
//!        0             bits:  10 1110 0 110 0 0 0
//!      / | \                  ^  ^    ^ ^   ^ ^ ^
//!     1  2  3           super-root  0 1  2   3 4 5
//!       / \
//!      4   5
//! ```

mod encode;
mod louds;
mod node;

pub use encode::{encode, Encoded};
pub use louds::Louds;
pub use node::{OrderedNode, TreeNode};
