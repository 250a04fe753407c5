//! Shared type definitions for TrieMatcher
//!
//! These types describe what the build phase accepts and what a sealed
//! trie reports about itself.

use std::borrow::Cow;

// =============================================================================
// Build Entries
// =============================================================================

/// A single build-time entry that may or may not carry a prefix.
///
/// `None` models an absent entry. Absent entries, and entries that are blank
/// after trimming, are skipped by the builder rather than rejected.
pub trait PrefixEntry {
    /// The raw (untrimmed) prefix text, if any.
    fn as_prefix(&self) -> Option<&str>;
}

impl PrefixEntry for str {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        Some(self)
    }
}

impl PrefixEntry for String {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PrefixEntry for Cow<'_, str> {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: PrefixEntry + ?Sized> PrefixEntry for &T {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        (**self).as_prefix()
    }
}

impl<T: PrefixEntry + ?Sized> PrefixEntry for Box<T> {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        (**self).as_prefix()
    }
}

impl<T: PrefixEntry> PrefixEntry for Option<T> {
    #[inline]
    fn as_prefix(&self) -> Option<&str> {
        self.as_ref().and_then(PrefixEntry::as_prefix)
    }
}

// =============================================================================
// Trie Statistics
// =============================================================================

/// Size figures recorded when a trie is sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieStats {
    /// Entries that survived trimming and blank filtering (duplicates included)
    pub accepted: usize,
    /// Distinct registered prefixes (terminal nodes)
    pub distinct: usize,
    /// Node count, root included
    pub nodes: usize,
    /// Edge count (always `nodes - 1`)
    pub edges: usize,
}
