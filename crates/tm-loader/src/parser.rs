/// Parse a newline-separated prefix list.
///
/// Each line is trimmed and empty lines are dropped. Order and duplicates are
/// preserved; deduplication is the trie's job.
pub fn parse_prefix_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
