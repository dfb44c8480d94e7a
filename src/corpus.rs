//! Leaked-password corpus
//!
//! Handles loading the leaked-password list and the lookups the matchers need.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Entries must be longer than this (in characters, lower-cased) to take part
/// in substring matching.
pub const MIN_FRAGMENT_LEN: usize = 4;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_CORPUS_PATH`
/// 2. Default path `./assets/leaked-passwords.txt`
pub fn corpus_path() -> PathBuf {
    std::env::var("PWD_CORPUS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/leaked-passwords.txt"))
}

/// An immutable list of leaked passwords.
///
/// Entries keep their source order and duplicates. Build it once and share it
/// by reference; nothing in the engine mutates it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<String>,
    exact: HashSet<String>,
    counts: HashMap<String, usize>,
    fragments: Vec<String>,
}

impl Corpus {
    /// Builds a corpus from in-memory entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

        let mut counts: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for entry in &entries {
            *counts.entry(entry.clone()).or_insert(0) += 1;
        }
        let exact: HashSet<String> = counts.keys().cloned().collect();

        let fragments = entries
            .iter()
            .map(|e| e.to_lowercase())
            .filter(|e| e.chars().count() > MIN_FRAGMENT_LEN)
            .collect();

        Self {
            entries,
            exact,
            counts,
            fragments,
        }
    }

    /// Loads the corpus from the path given by [`corpus_path`].
    ///
    /// # Environment Variable
    ///
    /// Set `PWD_CORPUS_PATH` to specify a custom corpus location.
    /// If not set, defaults to `./assets/leaked-passwords.txt`.
    pub fn load() -> Result<Self, CorpusError> {
        Self::from_path(corpus_path())
    }

    /// Loads the corpus from a specific file, one password per line.
    ///
    /// Lines are decoded leniently: byte sequences that are not valid UTF-8
    /// become `U+FFFD` instead of failing the load. Line terminators (`\n` or
    /// `\r\n`) are stripped; everything else is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Corpus load FAILED: FileNotFound {}", path.display());
            return Err(CorpusError::FileNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Corpus load FAILED: Empty file {}", path.display());
            return Err(CorpusError::EmptyFile);
        }

        let corpus = Self::from_entries(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Corpus loaded: {} passwords ({} distinct) from {:?}",
            corpus.len(),
            corpus.exact.len(),
            path
        );

        Ok(corpus)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, password: &str) -> bool {
        self.exact.contains(password)
    }

    /// How many times `password` appears verbatim.
    pub fn frequency(&self, password: &str) -> usize {
        self.counts.get(password).copied().unwrap_or(0)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Lower-cased entries longer than [`MIN_FRAGMENT_LEN`], in source order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
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
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_corpus_path_default() {
        remove_env("PWD_CORPUS_PATH");

        let path = corpus_path();
        assert_eq!(path, PathBuf::from("./assets/leaked-passwords.txt"));
    }

    #[test]
    #[serial]
    fn test_corpus_path_from_env() {
        let custom_path = "/custom/path/leaks.txt";
        set_env("PWD_CORPUS_PATH", custom_path);

        let path = corpus_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_CORPUS_PATH");
    }

    #[test]
    #[serial]
    fn test_load_file_not_found() {
        set_env("PWD_CORPUS_PATH", "/nonexistent/path/leaks.txt");

        let result = Corpus::load();
        match result {
            Err(CorpusError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env("PWD_CORPUS_PATH");
    }

    #[test]
    fn test_load_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let result = Corpus::from_path(temp_file.path());
        assert!(matches!(result, Err(CorpusError::EmptyFile)));
    }

    #[test]
    fn test_load_keeps_order_duplicates_and_case() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "Password123\r\nqwerty\nqwerty\nDragon\n").expect("Failed to write");

        let corpus = Corpus::from_path(temp_file.path()).expect("corpus should load");
        assert_eq!(corpus.len(), 4);
        assert_eq!(
            corpus.iter().collect::<Vec<_>>(),
            vec!["Password123", "qwerty", "qwerty", "Dragon"]
        );
        assert_eq!(corpus.frequency("qwerty"), 2);
        assert!(corpus.contains("Password123"));
        assert!(!corpus.contains("password123"));
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"caf\xe9\nsunshine\n")
            .expect("Failed to write");

        let corpus = Corpus::from_path(temp_file.path()).expect("corpus should load");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.iter().next(), Some("caf\u{FFFD}"));
        assert!(corpus.contains("sunshine"));
    }

    #[test]
    fn test_fragments_skip_short_entries() {
        let corpus = Corpus::from_entries(["abcd", "ABCDE", "mom", "Sunshine"]);
        assert_eq!(corpus.fragments(), &["abcde".to_string(), "sunshine".to_string()]);
    }

    #[test]
    fn test_fragments_count_characters_not_bytes() {
        // four characters, eight bytes
        let corpus = Corpus::from_entries(["ßßßß", "ßßßßß"]);
        assert_eq!(corpus.fragments(), &["ßßßßß".to_string()]);
    }

    #[test]
    fn test_frequency_missing() {
        let corpus = Corpus::from_entries(["alpha"]);
        assert_eq!(corpus.frequency("beta"), 0);
        assert!(!corpus.is_empty());
    }
}
