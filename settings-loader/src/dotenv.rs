//! `.env` discovery and parsing.
//!
//! Parsing never touches the process environment; pairs are handed back to
//! the caller for layering into an [`crate::source::EnvSource`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name looked for during discovery.
pub const DOTENV_FILE: &str = ".env";

/// Ancestor directories checked above the start directory.
pub const MAX_ASCENT: usize = 3;

/// Locates a `.env` file at `start` or in up to [`MAX_ASCENT`] ancestors,
/// returning the first hit.
///
/// Stops early once the filesystem root is reached. Covers the usual
/// layouts where the binary runs from the repository root or a nested
/// build/app directory while `.env` sits at the root.
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..=MAX_ASCENT {
        let candidate = dir.join(DOTENV_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Parses `path` as dotenv-style `KEY=VALUE` pairs.
///
/// Comment and quoting rules are `dotenvy`'s. Duplicate keys within the
/// file resolve to the last occurrence.
pub fn load(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    let mut vars = HashMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".env"), "A=1\n").unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".env"));
    }

    #[test]
    fn test_discover_walks_up_to_three_ancestors() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(".env"), "A=1\n").unwrap();

        let nested = root.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        // .env is exactly three levels above the start directory
        let found = discover(&nested).unwrap();
        assert_eq!(found, root.path().join(".env"));
    }

    #[test]
    fn test_discover_gives_up_beyond_three_ancestors() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(".env"), "A=1\n").unwrap();

        let nested = root.path().join("a/b/c/d");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover(&nested), None);
    }

    #[test]
    fn test_discover_prefers_nearest_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(".env"), "WHERE=root\n").unwrap();

        let nested = root.path().join("svc");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(".env"), "WHERE=svc\n").unwrap();

        assert_eq!(discover(&nested), Some(nested.join(".env")));
    }

    #[test]
    fn test_load_parses_comments_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# local overrides\nDB_HOST=localhost\nDB_PASSWORD=\"p@ss word\"\n",
        )
        .unwrap();

        let vars = load(&path).unwrap();
        assert_eq!(vars.get("DB_HOST").map(String::as_str), Some("localhost"));
        assert_eq!(
            vars.get("DB_PASSWORD").map(String::as_str),
            Some("p@ss word")
        );
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join(".env")).is_err());
    }
}
