//! Intermediate pointer trie used to build a [`SuccinctTrie`].

use std::fmt;

use tracing::debug;

use super::{NodeLabel, SuccinctTrie};
use crate::bits::FromWords;
use crate::trees::{encode, Louds, OrderedNode};
use crate::{Config, RankSelect};

/// Label given to the root, which has no incoming edge.
pub(crate) const ROOT_LABEL: char = '\0';

struct TrieNode {
    label: char,
    terminal: bool,
    children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(label: char) -> Self {
        Self {
            label,
            terminal: false,
            children: Vec::new(),
        }
    }

    fn shallow(&self) -> Self {
        Self {
            label: self.label,
            terminal: self.terminal,
            children: Vec::new(),
        }
    }
}

// Long keys make deep chains: copy and tear them down without recursing.
impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut root = self.shallow();
        {
            let mut stack = vec![(self, &mut root)];
            while let Some((src, dst)) = stack.pop() {
                dst.children = src.children.iter().map(TrieNode::shallow).collect();
                stack.extend(src.children.iter().zip(dst.children.iter_mut()));
            }
        }
        root
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl OrderedNode for TrieNode {
    #[inline]
    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Collects keys into a pointer trie, then encodes it as LOUDS.
///
/// Insertion order does not matter: children are sorted by label when the
/// trie is built.
///
/// ```
/// use succinct_louds::{SuccinctTrie, TrieBuilder};
///
/// let mut builder = TrieBuilder::new();
/// builder.insert("band");
/// builder.insert("banana");
/// builder.insert("");
/// let trie: SuccinctTrie = builder.build();
///
/// assert_eq!(trie.all_words(), vec!["banana", "band"]);
/// ```
#[derive(Clone)]
pub struct TrieBuilder {
    root: TrieNode,
    nodes: usize,
    keys: usize,
    skipped: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    /// Create a builder holding only the root.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(ROOT_LABEL),
            nodes: 1,
            keys: 0,
            skipped: 0,
        }
    }

    /// Add `key`. Empty keys are skipped and reported as `false`.
    ///
    /// Inserting a key twice is a no-op the second time.
    pub fn insert(&mut self, key: &str) -> bool {
        if key.is_empty() {
            self.skipped += 1;
            return false;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            let idx = match node.children.iter().position(|child| child.label == c) {
                Some(idx) => idx,
                None => {
                    node.children.push(TrieNode::new(c));
                    self.nodes += 1;
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }

        if !node.terminal {
            node.terminal = true;
            self.keys += 1;
        }
        true
    }

    /// Number of distinct keys inserted so far.
    pub fn key_count(&self) -> usize {
        self.keys
    }

    /// Number of trie nodes so far, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Encode with the default [`Config`].
    pub fn build<B: RankSelect + FromWords>(self) -> SuccinctTrie<B> {
        self.build_with_config(&Config::default())
    }

    /// Sort every child list by label, then encode breadth-first.
    pub fn build_with_config<B: RankSelect + FromWords>(
        mut self,
        config: &Config,
    ) -> SuccinctTrie<B> {
        let mut stack = vec![&mut self.root];
        while let Some(node) = stack.pop() {
            node.children.sort_unstable_by_key(|child| child.label);
            stack.extend(node.children.iter_mut());
        }

        let encoded = encode(&self.root, |node| NodeLabel {
            label: node.label,
            terminal: node.terminal,
        });
        debug!(keys = self.keys, skipped = self.skipped, nodes = self.nodes, "built trie");

        SuccinctTrie::from_louds(Louds::from_encoded_with_config(encoded, config), self.keys)
    }
}

impl fmt::Debug for TrieBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieBuilder")
            .field("keys", &self.keys)
            .field("nodes", &self.nodes)
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}

impl<S: AsRef<str>> Extend<S> for TrieBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = TrieBuilder::new();
        builder.extend(iter);
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_prefixes_merge() {
        let builder: TrieBuilder = ["app", "apple", "apt"].into_iter().collect();
        // root, a, p, p, l, e, t
        assert_eq!(builder.node_count(), 7);
        assert_eq!(builder.key_count(), 3);
    }

    #[test]
    fn test_duplicates_and_empty_keys() {
        let mut builder = TrieBuilder::new();
        assert!(builder.insert("ab"));
        assert!(builder.insert("ab"));
        assert!(!builder.insert(""));
        assert_eq!(builder.key_count(), 1);
        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.skipped, 1);
    }

    #[test]
    fn test_children_sorted_on_build() {
        let builder: TrieBuilder = ["c", "a", "b"].into_iter().collect();
        let trie: SuccinctTrie = builder.build();
        let labels: Vec<char> = trie
            .louds()
            .children(0)
            .filter_map(|v| trie.label(v))
            .collect();
        assert_eq!(labels, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_clone_and_debug_deep_builder() {
        let long = "x".repeat(200_000);
        let mut builder = TrieBuilder::new();
        builder.insert(&long);
        builder.insert("xy");

        let copy = builder.clone();
        assert_eq!(
            format!("{:?}", copy),
            "TrieBuilder { keys: 2, nodes: 200002, skipped: 0, .. }"
        );
        drop(builder);

        let trie: SuccinctTrie = copy.build();
        assert!(trie.search(&long));
        assert!(trie.search("xy"));
        assert!(!trie.search("xyz"));
        assert_eq!(trie.node_count(), 200_002);
    }

    #[test]
    fn test_clone_keeps_structure() {
        let builder: TrieBuilder = ["b", "ab", "a", "abc"].into_iter().collect();
        let copy = builder.clone();
        let original: SuccinctTrie = builder.build();
        let cloned: SuccinctTrie = copy.build();
        assert_eq!(original, cloned);
        assert_eq!(cloned.all_words(), vec!["a", "ab", "abc", "b"]);
    }

    #[test]
    fn test_terminator_marker_is_not_text() {
        // A '*' label must not be confused with an end-of-word marker.
        let trie: SuccinctTrie = ["a*", "b"].into_iter().collect();
        assert!(trie.search("a*"));
        assert!(!trie.search("a"));
        assert!(trie.search("b"));
    }
}
