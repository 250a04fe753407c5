//! TrieMatcher Core Library
//!
//! This crate provides the longest-prefix matching engine for TrieMatcher.
//!
//! # Architecture
//!
//! Prefixes are inserted into a mutable tree once, then sealed into a flat,
//! read-only layout. Queries walk the sealed layout one character at a time,
//! never allocate, and return a slice of the caller's input.
//!
//! # Modules
//!
//! - `trie`: Two-phase prefix tree (builder and sealed trie)
//! - `matcher`: Public-facing matcher that owns one trie
//! - `types`: Shared type definitions

pub mod matcher;
pub mod trie;
pub mod types;

// Re-export commonly used types
pub use matcher::PrefixMatcher;
pub use trie::{build_trie, longest_prefix, PrefixTrie, Prefixes, TrieBuilder};
pub use types::{PrefixEntry, TrieStats};
