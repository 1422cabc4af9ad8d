//! Depth-first key enumeration.

use super::SuccinctTrie;
use crate::bits::DenseBitVec;
use crate::RankSelect;

/// Iterator over stored keys in depth-first, label-ascending order.
///
/// Created by [`SuccinctTrie::words`] and [`SuccinctTrie::iter_prefix`].
/// Uses an explicit stack of `(node, path length)` pairs and one shared path
/// buffer, so neither deep keys nor wide nodes recurse.
#[derive(Clone, Debug)]
pub struct Words<'a, B = DenseBitVec> {
    trie: &'a SuccinctTrie<B>,
    /// Nodes still to visit, with the path length of their parent.
    stack: Vec<(usize, usize)>,
    path: String,
    /// The start node's own key, yielded before its descendants.
    pending: Option<String>,
}

impl<'a, B: RankSelect> Words<'a, B> {
    /// Enumerate the subtree of `start`, whose key is `prefix`.
    pub(crate) fn new(trie: &'a SuccinctTrie<B>, start: Option<usize>, prefix: &str) -> Self {
        let mut words = Self {
            trie,
            stack: Vec::new(),
            path: String::new(),
            pending: None,
        };
        if let Some(start) = start {
            words.path.push_str(prefix);
            if trie.is_terminal(start) {
                words.pending = Some(prefix.to_string());
            }
            words.push_children(start);
        }
        words
    }

    /// Push children last-to-first so the smallest label pops first.
    fn push_children(&mut self, node: usize) {
        let here = self.path.len();
        for child in self.trie.louds().children(node).rev() {
            self.stack.push((child, here));
        }
    }
}

impl<'a, B: RankSelect> Iterator for Words<'a, B> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        while let Some((node, parent_len)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(label) = self.trie.label(node) {
                self.path.push(label);
            }
            self.push_children(node);
            if self.trie.is_terminal(node) {
                return Some(self.path.clone());
            }
        }
        None
    }
}
