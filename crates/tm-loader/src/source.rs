//! File and reader sources

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::parser::parse_prefix_list;

/// Error type for prefix list loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Prefix file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Prefix resource not found: {0}")]
    ResourceNotFound(String),
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read prefix list: {0}")]
    Read(#[from] io::Error),
}

/// Load a prefix list from any buffered reader.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>, LoadError> {
    let mut prefixes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            prefixes.push(trimmed.to_string());
        }
    }
    log::debug!("Loaded {} prefixes from reader", prefixes.len());
    Ok(prefixes)
}

/// Load a prefix list from a file.
///
/// A missing file is reported as [`LoadError::NotFound`], distinct from other
/// I/O failures.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            log::warn!("Prefix file not found: {}", path.display());
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let prefixes = parse_prefix_list(&content);
    log::info!("Loaded {} prefixes from {}", prefixes.len(), path.display());
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use tempfile::NamedTempFile;

    fn write_temp(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_file_trims_and_ignores_empty_lines() {
        let file = write_temp(&[" foo ", "", "bar", "   ", "baz"]);
        let loaded = load_from_file(file.path()).unwrap();
        assert_eq!(loaded, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn load_empty_file() {
        let file = write_temp(&[]);
        let loaded = load_from_file(file.path()).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent.txt");
        match load_from_file(&missing) {
            Err(LoadError::NotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn load_reader() {
        let loaded = load_from_reader(Cursor::new("  KAWeq \n\nzz\n")).unwrap();
        assert_eq!(loaded, vec!["KAWeq", "zz"]);
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let err = load_from_reader(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
    }

    #[test]
    fn loaded_file_feeds_matcher() {
        let file = write_temp(&["foo", "tru", "true"]);
        let matcher = tm_core::PrefixMatcher::new(load_from_file(file.path()).unwrap());
        assert_eq!(matcher.find_longest_prefix("truecaller"), Some("true"));
        assert_eq!(matcher.find_longest_prefix("bar"), None);
    }
}
