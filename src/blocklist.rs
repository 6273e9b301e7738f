//! Blocklist management module
//!
//! Ordered lists of lowercase substrings; a case-insensitive substring match
//! anywhere in the candidate password counts as a hit.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Common passwords that trigger the strict (-60) deduction by default.
const DEFAULT_STRICT: &[&str] = &[
    "love", "123456", "baby", "fuck", "dog", "password", "qwerty", "angel",
    "big", "alex", "sexy", "monkey", "jack", "dragon", "daniel", "asdf",
    "jess", "bull", "jesus",
];

/// Weaker dictionary words that trigger the medium (-20) deduction by default.
const DEFAULT_MEDIUM: &[&str] = &[
    "cat", "letmein", "welcome", "admin", "football", "iloveyou",
];

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blocklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blocklist file is empty")]
    EmptyFile,
}

/// An ordered substring blocklist. Entries are stored lowercased; order is
/// preserved because matching short-circuits on the first hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocklist {
    entries: Vec<String>,
}

impl Blocklist {
    /// Builds a blocklist from arbitrary entries. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// The built-in strict list.
    pub fn default_strict() -> Self {
        Self::new(DEFAULT_STRICT)
    }

    /// The built-in medium list.
    pub fn default_medium() -> Self {
        Self::new(DEFAULT_MEDIUM)
    }

    /// Loads a blocklist from a file, one entry per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no entries
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlocklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist load FAILED: file not found {:?}", path);
            return Err(BlocklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::new(content.lines());

        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blocklist load FAILED: empty file {:?}", path);
            return Err(BlocklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blocklist loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads from the file named by `env_var` when set, otherwise falls back
    /// to the given built-in list.
    pub fn from_env_or(env_var: &str, fallback: Self) -> Result<Self, BlocklistError> {
        match std::env::var(env_var) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(fallback),
        }
    }

    /// Whether any entry occurs as a substring of the candidate
    /// (case-insensitive). Checks entries in order and stops on the first hit.
    pub fn matches(&self, candidate: &str) -> bool {
        let lowered = candidate.to_lowercase();
        self.entries.iter().any(|e| lowered.contains(e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn setup_with_tempfile(entries: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for entry in entries {
            writeln!(temp_file, "{}", entry).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_matches_substring_case_insensitive() {
        let list = Blocklist::new(["qwerty", "dragon"]);
        assert!(list.matches("xQWERTYx9"));
        assert!(list.matches("reddragon42"));
        assert!(!list.matches("plausible-entropy"));
    }

    #[test]
    fn test_new_normalizes_entries() {
        let list = Blocklist::new(["  Love ", "", "Cat"]);
        assert_eq!(list.len(), 2);
        assert!(list.matches("lovebird"));
        assert!(list.matches("CATALOG"));
    }

    #[test]
    fn test_default_lists_contain_known_entries() {
        assert!(Blocklist::default_strict().matches("MyPassword1"));
        assert!(Blocklist::default_strict().matches("xx123456xx"));
        assert!(Blocklist::default_medium().matches("copycat"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Blocklist::from_file("/nonexistent/path/blocklist.txt");
        assert!(matches!(result, Err(BlocklistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_file_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Blocklist::from_file(temp_file.path());
        assert!(matches!(result, Err(BlocklistError::EmptyFile)));
    }

    #[test]
    fn test_from_file_success() {
        let temp_file = setup_with_tempfile(&["hunter2", "Trustno1"]);

        let list = Blocklist::from_file(temp_file.path()).expect("load should succeed");
        assert_eq!(list.len(), 2);
        assert!(list.matches("xxhunter2xx"));
        assert!(list.matches("TRUSTNO1!"));
    }

    #[test]
    #[serial]
    fn test_from_env_or_fallback() {
        remove_env("PWD_TEST_BLOCKLIST_PATH");

        let list = Blocklist::from_env_or("PWD_TEST_BLOCKLIST_PATH", Blocklist::default_medium())
            .expect("fallback should succeed");
        assert!(list.matches("cat"));
    }

    #[test]
    #[serial]
    fn test_from_env_or_reads_file() {
        let temp_file = setup_with_tempfile(&["zxcvbn"]);
        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_TEST_BLOCKLIST_PATH", path);

        let list = Blocklist::from_env_or("PWD_TEST_BLOCKLIST_PATH", Blocklist::default_medium())
            .expect("file load should succeed");
        assert!(list.matches("zxcvbn"));
        assert!(!list.matches("cat"));

        remove_env("PWD_TEST_BLOCKLIST_PATH");
    }
}
