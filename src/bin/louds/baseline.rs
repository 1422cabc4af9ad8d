//! Pointer-based trie used as the comparison baseline.
//!
//! One heap node per character with a `HashMap` of children. Memory figures
//! are estimates: map capacity times entry size plus the node itself.

use std::collections::HashMap;
use std::fmt;
use std::mem::size_of;

#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

// Tear down deep chains without recursing.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = self.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Hash-map trie with the same query surface as the succinct trie.
pub struct HashTrie {
    root: Node,
    nodes: usize,
}

impl fmt::Debug for HashTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTrie")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

impl Default for HashTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTrie {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            nodes: 1,
        }
    }

    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            let nodes = &mut self.nodes;
            node = node.children.entry(c).or_insert_with(|| {
                *nodes += 1;
                Node::default()
            });
        }
        node.terminal = true;
    }

    fn walk(&self, prefix: &str) -> Option<&Node> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.terminal)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Keys under `prefix`, sorted so the output lines up with the
    /// succinct trie's label order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        let Some(start) = self.walk(prefix) else {
            return out;
        };
        let mut stack = vec![(start, prefix.to_string())];
        while let Some((node, path)) = stack.pop() {
            if node.terminal {
                out.push(path.clone());
            }
            for (&c, child) in &node.children {
                let mut next = path.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        out.sort_unstable();
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Rough heap footprint in bytes.
    pub fn approx_heap_size(&self) -> usize {
        let entry = size_of::<char>() + size_of::<Node>() + size_of::<u64>();
        let mut total = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            total += node.children.capacity() * entry;
            stack.extend(node.children.values());
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries() {
        let mut trie = HashTrie::new();
        for word in ["app", "apple", "application", "banana", "band", ""] {
            trie.insert(word);
        }
        assert!(trie.search("app"));
        assert!(!trie.search("appl"));
        assert!(trie.starts_with("appl"));
        assert!(!trie.starts_with("c"));
        assert_eq!(
            trie.words_with_prefix("app"),
            vec!["app", "apple", "application"]
        );
        assert!(trie.words_with_prefix("x").is_empty());
        // root + a,p,p,l,e,i,c,a,t,i,o,n + b,a,n,a,n,a,d
        assert_eq!(trie.node_count(), 1 + 12 + 7);
        assert!(trie.approx_heap_size() > 0);
    }
}
