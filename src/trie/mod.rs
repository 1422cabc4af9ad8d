//! Character-keyed trie on top of the LOUDS navigator.
//!
//! Each node carries the label of its incoming edge and a terminator flag.
//! Because children are numbered consecutively and sorted by label, a
//! node's children form a sorted slice of the payload array, and child
//! lookup is a binary search over that slice.
//!
//! ```
//! use succinct_louds::SuccinctTrie;
//!
//! let trie: SuccinctTrie = ["dog", "domain", "door"].into_iter().collect();
//!
//! let d = trie.find_child(0, 'd').unwrap();
//! let o = trie.find_child(d, 'o').unwrap();
//! assert_eq!(trie.degree(o), 3); // g, m, o
//! assert_eq!(trie.words_with_prefix("do"), vec!["dog", "domain", "door"]);
//! ```

mod builder;
mod words;

pub use builder::TrieBuilder;
pub use words::Words;

use crate::bits::{DenseBitVec, FromWords};
use crate::trees::Louds;
use crate::{Config, RankSelect};

/// Per-node trie payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeLabel {
    /// Label of the edge into this node (`'\0'` for the root).
    pub label: char,
    /// True if a stored key ends at this node.
    pub terminal: bool,
}

/// An immutable trie stored as LOUDS bits plus one [`NodeLabel`] per node.
///
/// Build it with [`TrieBuilder`], [`SuccinctTrie::from_keys`] or `collect()`.
/// Raw tree navigation is available through the delegating methods or
/// [`louds`](Self::louds).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccinctTrie<B = DenseBitVec> {
    louds: Louds<NodeLabel, B>,
    key_count: usize,
}

impl<B: RankSelect + FromWords> SuccinctTrie<B> {
    /// Build from a list of keys. Empty keys are skipped.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter().collect::<TrieBuilder>().build()
    }

    /// Build from a list of keys with explicit backend configuration.
    pub fn from_keys_with_config<I, S>(keys: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .collect::<TrieBuilder>()
            .build_with_config(config)
    }
}

impl<B: RankSelect> SuccinctTrie<B> {
    pub(crate) fn from_louds(louds: Louds<NodeLabel, B>, key_count: usize) -> Self {
        debug_assert!(
            (0..louds.node_count()).all(|v| {
                louds.payloads()[louds.children(v)]
                    .windows(2)
                    .all(|pair| pair[0].label < pair[1].label)
            }),
            "trie children must be strictly sorted by label"
        );
        Self { louds, key_count }
    }

    /// The underlying navigator.
    #[inline]
    pub fn louds(&self) -> &Louds<NodeLabel, B> {
        &self.louds
    }

    /// Number of distinct keys stored.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// True if no keys are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Number of nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.louds.node_count()
    }

    /// Length of the LOUDS bit string.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.louds.bit_len()
    }

    /// Heap memory used by bits, tables and labels, in bytes.
    pub fn heap_size(&self) -> usize {
        self.louds.heap_size()
    }

    /// Diagnostic rendering of the bit string.
    pub fn to_bit_string(&self) -> String {
        self.louds.to_bit_string()
    }

    /// Label of the edge into `v`; `None` for the root and unknown nodes.
    #[inline]
    pub fn label(&self, v: usize) -> Option<char> {
        if v == self.louds.root() {
            return None;
        }
        self.louds.payload(v).map(|p| p.label)
    }

    /// True if a stored key ends at `v`.
    #[inline]
    pub fn is_terminal(&self, v: usize) -> bool {
        self.louds.payload(v).is_some_and(|p| p.terminal)
    }

    /// Child of `v` reached by label `c`, by binary search over the
    /// children's labels.
    pub fn find_child(&self, v: usize, c: char) -> Option<usize> {
        let children = self.louds.children(v);
        let first = children.start;
        self.louds.payloads()[children]
            .binary_search_by(|p| p.label.cmp(&c))
            .ok()
            .map(|offset| first + offset)
    }

    /// Node reached by walking `prefix` from the root.
    pub fn node_for_prefix(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(self.louds.root(), |node, c| self.find_child(node, c))
    }

    /// True if `key` was inserted.
    pub fn search(&self, key: &str) -> bool {
        self.node_for_prefix(key).is_some_and(|node| self.is_terminal(node))
    }

    /// True if some inserted key starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.node_for_prefix(prefix).is_some()
    }

    /// Lazily enumerate every key.
    pub fn words(&self) -> Words<'_, B> {
        self.iter_prefix("")
    }

    /// Lazily enumerate the keys starting with `prefix`.
    pub fn iter_prefix(&self, prefix: &str) -> Words<'_, B> {
        Words::new(self, self.node_for_prefix(prefix), prefix)
    }

    /// Every key, depth-first in label order.
    pub fn all_words(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Keys starting with `prefix`, depth-first in label order.
    ///
    /// Includes `prefix` itself when it is a key; empty when no key starts
    /// with `prefix`.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.iter_prefix(prefix).collect()
    }

    /// See [`Louds::parent`].
    #[inline]
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.louds.parent(v)
    }

    /// See [`Louds::child`].
    #[inline]
    pub fn child(&self, v: usize, i: usize) -> Option<usize> {
        self.louds.child(v, i)
    }

    /// See [`Louds::first_child`].
    #[inline]
    pub fn first_child(&self, v: usize) -> Option<usize> {
        self.louds.first_child(v)
    }

    /// See [`Louds::last_child`].
    #[inline]
    pub fn last_child(&self, v: usize) -> Option<usize> {
        self.louds.last_child(v)
    }

    /// See [`Louds::next_sibling`].
    #[inline]
    pub fn next_sibling(&self, v: usize) -> Option<usize> {
        self.louds.next_sibling(v)
    }

    /// See [`Louds::prev_sibling`].
    #[inline]
    pub fn prev_sibling(&self, v: usize) -> Option<usize> {
        self.louds.prev_sibling(v)
    }

    /// See [`Louds::degree`].
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.louds.degree(v)
    }

    /// See [`Louds::is_leaf`].
    #[inline]
    pub fn is_leaf(&self, v: usize) -> bool {
        self.louds.is_leaf(v)
    }

    /// See [`Louds::child_rank`].
    #[inline]
    pub fn child_rank(&self, v: usize) -> Option<usize> {
        self.louds.child_rank(v)
    }
}

impl<S: AsRef<str>, B: RankSelect + FromWords> FromIterator<S> for SuccinctTrie<B> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<'a, B: RankSelect> IntoIterator for &'a SuccinctTrie<B> {
    type Item = String;
    type IntoIter = Words<'a, B>;

    fn into_iter(self) -> Words<'a, B> {
        self.words()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompactBitVec;

    fn sample() -> SuccinctTrie {
        SuccinctTrie::from_keys(["app", "apple", "application", "banana", "band"])
    }

    #[test]
    fn test_search() {
        let trie = sample();
        assert!(trie.search("app"));
        assert!(trie.search("apple"));
        assert!(trie.search("band"));
        assert!(!trie.search("appl"));
        assert!(!trie.search("ban"));
        assert!(!trie.search("bandana"));
        assert!(!trie.search(""));
        assert!(!trie.search("zebra"));
    }

    #[test]
    fn test_starts_with() {
        let trie = sample();
        assert!(trie.starts_with(""));
        assert!(trie.starts_with("app"));
        assert!(trie.starts_with("appl"));
        assert!(trie.starts_with("application"));
        assert!(!trie.starts_with("applications"));
        assert!(!trie.starts_with("c"));
    }

    #[test]
    fn test_enumeration() {
        let trie = sample();
        assert_eq!(
            trie.words_with_prefix("app"),
            vec!["app", "apple", "application"]
        );
        assert_eq!(trie.words_with_prefix("ban"), vec!["banana", "band"]);
        assert!(trie.words_with_prefix("c").is_empty());
        assert_eq!(
            trie.all_words(),
            vec!["app", "apple", "application", "banana", "band"]
        );
        assert_eq!((&trie).into_iter().count(), 5);
    }

    #[test]
    fn test_empty_trie() {
        let trie: SuccinctTrie = SuccinctTrie::from_keys(Vec::<String>::new());
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.bit_len(), 3);
        assert_eq!(trie.to_bit_string(), "10 0");
        assert!(trie.starts_with(""));
        assert!(!trie.search(""));
        assert!(trie.all_words().is_empty());
    }

    #[test]
    fn test_labels_and_flags() {
        let trie = sample();
        assert_eq!(trie.label(0), None);
        assert!(!trie.is_terminal(0));

        let a = trie.find_child(0, 'a').unwrap();
        let b = trie.find_child(0, 'b').unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(trie.label(a), Some('a'));
        assert_eq!(trie.next_sibling(a), Some(b));
        assert_eq!(trie.find_child(0, 'c'), None);
        assert_eq!(trie.find_child(999, 'a'), None);

        let app = trie.node_for_prefix("app").unwrap();
        assert!(trie.is_terminal(app));
        assert_eq!(trie.degree(app), 1);
        assert_eq!(trie.key_count(), 5);
    }

    #[test]
    fn test_unicode_labels() {
        let trie: SuccinctTrie = ["über", "ünder", "uber", "日本", "日本語"]
            .into_iter()
            .collect();
        assert!(trie.search("日本"));
        assert!(trie.search("über"));
        assert!(!trie.search("日"));
        assert_eq!(trie.words_with_prefix("日"), vec!["日本", "日本語"]);
        assert_eq!(
            trie.all_words(),
            vec!["uber", "über", "ünder", "日本", "日本語"]
        );
    }

    #[test]
    fn test_compact_backend() {
        let dense = sample();
        let compact: SuccinctTrie<CompactBitVec> =
            SuccinctTrie::from_keys(["app", "apple", "application", "banana", "band"]);
        assert_eq!(dense.all_words(), compact.all_words());
        assert_eq!(dense.to_bit_string(), compact.to_bit_string());
        assert!(compact.search("application"));
    }
}
