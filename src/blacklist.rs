//! Password blacklist store.
//!
//! The store is an ordered list: the embedded default corpus first, then any
//! caller-supplied entries in the order given. Duplicates are kept; the store
//! length feeds the guessing model, so every entry counts.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

/// Environment variable naming an extra corpus file to append.
pub const BLACKLIST_PATH_ENV: &str = "PWD_ENTROPY_BLACKLIST_PATH";

// 598 known-weak passwords of at least 8 characters, compiled from Twitter's
// disallowed passwords, the John the Ripper dictionary and the most common
// RockYou passwords.
static DEFAULT_CORPUS_TEXT: &str = include_str!("../assets/default-blacklist.txt");

static DEFAULT_CORPUS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    DEFAULT_CORPUS_TEXT
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
});

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Ordered collection of known-weak passwords.
///
/// Lookup is exact, case-insensitive string match: the candidate is lowercased
/// and compared against the entries verbatim, so entries are expected to be
/// lowercase already. The embedded corpus and [`read_corpus`] guarantee that;
/// inline additions are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Blacklist {
    entries: Vec<String>,
}

impl Blacklist {
    /// Store holding only the embedded default corpus.
    pub fn new() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Store holding the default corpus followed by `extra`, in order.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = DEFAULT_CORPUS
            .iter()
            .map(|entry| (*entry).to_string())
            .collect();
        entries.extend(extra.into_iter().map(Into::into));
        Self { entries }
    }

    /// Store holding exactly the given entries, without the default corpus.
    /// May be empty, in which case lookups never match.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in store order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Checks whether the lowercased password exactly matches an entry.
    ///
    /// No normalization beyond lowercasing, no substring or edit-distance
    /// matching; the scan is linear in the store size.
    pub fn contains(&self, password: &str) -> bool {
        let needle = password.to_lowercase();
        self.entries.iter().any(|entry| *entry == needle)
    }

    /// Number of entries in the embedded default corpus.
    pub fn default_corpus_len() -> usize {
        DEFAULT_CORPUS.len()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an extra corpus file: one password per line, trimmed and lowercased,
/// blank lines skipped. Order and duplicates are preserved.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or contains
/// nothing but whitespace.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist corpus load FAILED: FileNotFound {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist corpus load FAILED: Empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let entries: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist corpus loaded: {} passwords from {:?}", entries.len(), path);

    Ok(entries)
}

/// Path of an extra corpus file named by [`BLACKLIST_PATH_ENV`], if set.
///
/// Purely a lookup helper: nothing loads this automatically. Hosts that want
/// a deployment-supplied corpus pass the result to
/// [`EvaluatorConfig::blacklist_file`](crate::EvaluatorConfig::blacklist_file).
pub fn env_corpus_path() -> Option<PathBuf> {
    std::env::var(BLACKLIST_PATH_ENV).ok().map(PathBuf::from)
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
    fn test_default_corpus_integrity() {
        assert_eq!(Blacklist::default_corpus_len(), 598);
        let store = Blacklist::new();
        assert_eq!(store.len(), 598);
        assert!(store.entries().iter().all(|entry| !entry.is_empty()));
        assert!(store.contains("password1"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let store = Blacklist::new();
        assert!(store.contains("password"));
        assert!(store.contains("PASSWORD"));
        assert!(store.contains("Password1"));
    }

    #[test]
    fn test_contains_is_exact_match_only() {
        let store = Blacklist::new();
        assert!(!store.contains("password!"));
        assert!(!store.contains("passwor"));
        assert!(!store.contains(""));
    }

    #[test]
    fn test_extras_append_in_order_and_keep_duplicates() {
        let store = Blacklist::with_extra(["hunter2", "password"]);
        assert_eq!(store.len(), 600);
        assert!(store.contains("hunter2"));
        assert_eq!(store.entries()[598], "hunter2");
        // "password" is already entry 0; the duplicate is kept.
        assert_eq!(store.entries()[599], "password");
    }

    #[test]
    fn test_from_entries_can_be_empty() {
        let store = Blacklist::from_entries(Vec::<String>::new());
        assert!(store.is_empty());
        assert!(!store.contains("password"));
    }

    #[test]
    fn test_read_corpus_file_not_found() {
        let result = read_corpus("/nonexistent/path/blacklist.txt");
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));
    }

    #[test]
    fn test_read_corpus_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "   \n\n").expect("Failed to write");

        let result = read_corpus(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_read_corpus_lowercases_and_keeps_order() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "  Hunter2  ").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let entries = read_corpus(temp_file.path()).expect("corpus should load");
        assert_eq!(entries, vec!["hunter2", "qwerty", "qwerty"]);
    }

    #[test]
    #[serial]
    fn test_env_corpus_path_unset() {
        remove_env(BLACKLIST_PATH_ENV);
        assert_eq!(env_corpus_path(), None);
    }

    #[test]
    #[serial]
    fn test_env_corpus_path_set() {
        let custom_path = "/etc/myapp/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        assert_eq!(env_corpus_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_ENV);
    }
}
