//! Prefix Matcher
//!
//! Public-facing wrapper that owns one sealed [`PrefixTrie`] and forwards
//! queries to it.

use crate::trie::PrefixTrie;
use crate::types::PrefixEntry;

/// Longest-prefix matcher over a fixed prefix set.
#[derive(Debug, Clone, Default)]
pub struct PrefixMatcher {
    trie: PrefixTrie,
}

impl PrefixMatcher {
    /// Build the matcher. Absent and blank entries are skipped.
    pub fn new<I>(prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: PrefixEntry,
    {
        Self::from(PrefixTrie::build(prefixes))
    }

    /// Longest registered prefix of `input`, or `None`.
    #[inline]
    pub fn find_longest_prefix<'i>(&self, input: &'i str) -> Option<&'i str> {
        self.trie.find_longest_prefix(input)
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }
}

impl From<PrefixTrie> for PrefixMatcher {
    fn from(trie: PrefixTrie) -> Self {
        let stats = trie.stats();
        log::info!(
            "PrefixMatcher initialized with {} prefixes ({} distinct)",
            stats.accepted,
            stats.distinct
        );
        Self { trie }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_find_longest_prefix() {
        let matcher = PrefixMatcher::new(["foo", "tru", "true"]);
        assert_eq!(matcher.find_longest_prefix("truecaller"), Some("true"));
        assert_eq!(matcher.find_longest_prefix("trumpet"), Some("tru"));
        assert_eq!(matcher.find_longest_prefix("bar"), None);
    }

    #[test]
    fn test_single_literal_prefix() {
        let matcher = PrefixMatcher::new(vec![String::from("KAWeq")]);
        assert_eq!(matcher.find_longest_prefix("KAWeqXYZ"), Some("KAWeq"));
        assert_eq!(matcher.find_longest_prefix("zzzzzz"), None);
    }

    #[test]
    fn test_empty_matcher() {
        let matcher = PrefixMatcher::default();
        assert_eq!(matcher.find_longest_prefix(""), None);
        assert_eq!(matcher.find_longest_prefix("anything"), None);
        assert!(matcher.trie().is_empty());
    }

    #[test]
    fn test_wraps_prebuilt_trie() {
        let trie = PrefixTrie::build(["  foo  ", "", "bar", "   "]);
        let matcher = PrefixMatcher::from(trie);
        assert_eq!(matcher.trie().len(), 2);
        assert_eq!(matcher.find_longest_prefix("barn"), Some("bar"));
        assert_eq!(matcher.find_longest_prefix("food"), Some("foo"));
    }

    #[test]
    fn test_shared_across_threads() {
        let matcher = Arc::new(PrefixMatcher::new(["foo", "tru", "true"]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                std::thread::spawn(move || {
                    (0..500)
                        .filter(|_| matcher.find_longest_prefix("truecaller") == Some("true"))
                        .count()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 500);
        }
    }
}
