//! Prefix Trie
//!
//! Prefixes are inserted into a mutable, hash-keyed tree owned by
//! [`TrieBuilder`]. [`TrieBuilder::build`] consumes the builder and seals the
//! tree into a [`PrefixTrie`]: one flat node table plus one flat edge table,
//! where every node owns a contiguous run of edges sorted by label.
//!
//! The sealed form has no mutating methods and no interior mutability, so a
//! single instance can be queried from any number of threads without locks.

use std::collections::HashMap;

use crate::types::{PrefixEntry, TrieStats};

const ROOT: usize = 0;

// =============================================================================
// Build Phase
// =============================================================================

#[derive(Debug, Default)]
struct BuildNode {
    children: HashMap<char, usize>,
    is_terminal: bool,
}

/// Mutable trie under construction.
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Vec<BuildNode>,
    accepted: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    /// Create a builder holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
            accepted: 0,
        }
    }

    /// Insert one entry.
    ///
    /// The entry is trimmed first. Absent and blank entries are skipped and
    /// `false` is returned. Inserting a prefix that is already present is a
    /// no-op for lookups but still counts as accepted.
    pub fn insert<E: PrefixEntry>(&mut self, entry: E) -> bool {
        let prefix = match entry.as_prefix().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => return false,
        };

        let mut cur = ROOT;
        for ch in prefix.chars() {
            cur = match self.nodes[cur].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(BuildNode::default());
                    self.nodes[cur].children.insert(ch, next);
                    next
                }
            };
        }
        self.nodes[cur].is_terminal = true;
        self.accepted += 1;
        true
    }

    /// Entries accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Seal the tree into its read-only form.
    pub fn build(self) -> PrefixTrie {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut edges = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut distinct = 0usize;

        for node in self.nodes {
            let first_edge = edges.len() as u32;

            let mut children: Vec<(char, usize)> = node.children.into_iter().collect();
            children.sort_unstable_by_key(|&(label, _)| label);
            edges.extend(children.into_iter().map(|(label, target)| Edge {
                label,
                target: target as u32,
            }));

            if node.is_terminal {
                distinct += 1;
            }
            nodes.push(Node {
                first_edge,
                edge_count: edges.len() as u32 - first_edge,
                is_terminal: node.is_terminal,
            });
        }

        let stats = TrieStats {
            accepted: self.accepted,
            distinct,
            nodes: nodes.len(),
            edges: edges.len(),
        };
        log::debug!(
            "PrefixTrie sealed: {} accepted, {} distinct, {} nodes",
            stats.accepted,
            stats.distinct,
            stats.nodes
        );

        PrefixTrie {
            nodes: nodes.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
            stats,
        }
    }
}

impl<E: PrefixEntry> Extend<E> for TrieBuilder {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

// =============================================================================
// Sealed Trie
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Node {
    first_edge: u32,
    edge_count: u32,
    is_terminal: bool,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    label: char,
    target: u32,
}

/// Read-only prefix tree answering longest-prefix queries.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Box<[Node]>,
    edges: Box<[Edge]>,
    stats: TrieStats,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        TrieBuilder::new().build()
    }
}

impl PrefixTrie {
    /// Build and seal a trie from a sequence of entries.
    pub fn build<I>(prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: PrefixEntry,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(prefixes);
        builder.build()
    }

    /// Return the longest registered prefix of `input`, borrowed from `input`.
    ///
    /// The walk stops at the first character with no matching edge. Empty
    /// input never matches.
    pub fn find_longest_prefix<'i>(&self, input: &'i str) -> Option<&'i str> {
        if input.is_empty() {
            return None;
        }
        self.longest_prefix_len(input).map(|len| &input[..len])
    }

    /// Byte length of the longest registered prefix of `input`.
    pub fn longest_prefix_len(&self, input: &str) -> Option<usize> {
        let mut node = ROOT;
        let mut best = None;

        for (offset, ch) in input.char_indices() {
            node = match self.child(node, ch) {
                Some(next) => next,
                None => break,
            };
            if self.nodes[node].is_terminal {
                best = Some(offset + ch.len_utf8());
            }
        }

        best
    }

    /// Whether `prefix` is exactly one of the registered (trimmed) prefixes.
    pub fn contains(&self, prefix: &str) -> bool {
        let mut node = ROOT;
        for ch in prefix.chars() {
            node = match self.child(node, ch) {
                Some(next) => next,
                None => return false,
            };
        }
        self.nodes[node].is_terminal
    }

    /// Number of distinct registered prefixes.
    pub fn len(&self) -> usize {
        self.stats.distinct
    }

    pub fn is_empty(&self) -> bool {
        self.stats.distinct == 0
    }

    pub fn stats(&self) -> TrieStats {
        self.stats
    }

    /// Iterate over every registered prefix in ordinal order.
    pub fn prefixes(&self) -> Prefixes<'_> {
        let mut stack = Vec::new();
        self.push_children(&mut stack, ROOT, 0);
        Prefixes {
            trie: self,
            stack,
            buf: String::new(),
        }
    }

    #[inline]
    fn edges_of(&self, node: usize) -> &[Edge] {
        let node = &self.nodes[node];
        let start = node.first_edge as usize;
        &self.edges[start..start + node.edge_count as usize]
    }

    #[inline]
    fn child(&self, node: usize, label: char) -> Option<usize> {
        let run = self.edges_of(node);
        run.binary_search_by_key(&label, |edge| edge.label)
            .ok()
            .map(|idx| run[idx].target as usize)
    }

    fn push_children(&self, stack: &mut Vec<Frame>, node: usize, parent_len: usize) {
        for edge in self.edges_of(node).iter().rev() {
            stack.push(Frame {
                node: edge.target as usize,
                label: edge.label,
                parent_len,
            });
        }
    }
}

impl<E: PrefixEntry> FromIterator<E> for PrefixTrie {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self::build(iter)
    }
}

// =============================================================================
// Prefix Iterator
// =============================================================================

struct Frame {
    node: usize,
    label: char,
    parent_len: usize,
}

/// Depth-first iterator over registered prefixes. See [`PrefixTrie::prefixes`].
pub struct Prefixes<'t> {
    trie: &'t PrefixTrie,
    stack: Vec<Frame>,
    buf: String,
}

impl Iterator for Prefixes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            self.buf.truncate(frame.parent_len);
            self.buf.push(frame.label);
            self.trie.push_children(&mut self.stack, frame.node, self.buf.len());
            if self.trie.nodes[frame.node].is_terminal {
                return Some(self.buf.clone());
            }
        }
        None
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Build-time entry point.
pub fn build_trie<I>(prefixes: I) -> PrefixTrie
where
    I: IntoIterator,
    I::Item: PrefixEntry,
{
    PrefixTrie::build(prefixes)
}

/// Query entry point. An absent input yields no match.
pub fn longest_prefix<'i>(trie: &PrefixTrie, input: Option<&'i str>) -> Option<&'i str> {
    input.and_then(|input| trie.find_longest_prefix(input))
}
