//! Input trees accepted by the LOUDS encoder.

/// A rooted tree whose nodes expose their children in order.
pub trait OrderedNode: Sized {
    /// Children of this node, in the order they should be numbered.
    fn children(&self) -> &[Self];
}

/// Pointer-linked ordered tree with a payload per node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// Value carried by this node.
    pub payload: T,
    /// Children, in order.
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Create a childless node.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn with_children(payload: T, children: Vec<TreeNode<T>>) -> Self {
        Self { payload, children }
    }

    /// Append `child` as the last child and return a reference to it.
    pub fn add_child(&mut self, child: TreeNode<T>) -> &mut TreeNode<T> {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl<T> OrderedNode for TreeNode<T> {
    #[inline]
    fn children(&self) -> &[Self] {
        &self.children
    }
}
