//! Prefix lists embedded at compile time
//!
//! Resources travel inside the binary, so they are available regardless of the
//! working directory the program is started from.

use crate::parser::parse_prefix_list;
use crate::source::LoadError;

const RESOURCES: &[(&str, &str)] = &[(
    "sample_prefixes.txt",
    include_str!("../resources/sample_prefixes.txt"),
)];

/// Names of all embedded resources.
pub fn resource_names() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|(name, _)| *name)
}

/// Load an embedded prefix list by name.
pub fn load_from_resource(name: &str) -> Result<Vec<String>, LoadError> {
    let Some((_, text)) = RESOURCES.iter().find(|(candidate, _)| *candidate == name) else {
        log::warn!("Prefix resource not found: {}", name);
        return Err(LoadError::ResourceNotFound(name.to_string()));
    };

    let prefixes = parse_prefix_list(text);
    log::info!("Loaded {} prefixes from resource: {}", prefixes.len(), name);
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::PrefixMatcher;

    #[test]
    fn sample_resource_is_listed() {
        assert!(resource_names().any(|name| name == "sample_prefixes.txt"));
    }

    #[test]
    fn unknown_resource_fails() {
        let err = load_from_resource("missing.txt").unwrap_err();
        assert!(matches!(err, LoadError::ResourceNotFound(ref name) if name == "missing.txt"));
    }

    #[test]
    fn sample_resource_matches() {
        let prefixes = load_from_resource("sample_prefixes.txt").unwrap();
        assert!(!prefixes.is_empty());

        let matcher = PrefixMatcher::new(prefixes);
        assert_eq!(matcher.find_longest_prefix("KAWeqXYZ"), Some("KAWeq"));
        assert_eq!(matcher.find_longest_prefix("KAWx"), Some("KAW"));
        assert_eq!(matcher.find_longest_prefix("zzzzzz"), None);
    }
}
