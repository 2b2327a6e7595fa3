//! Property file type.
//!
//! Represents a parsed `.properties` file with typed access.
//!
//! Follows the subset of Java `.properties` conventions used by signing
//! configs: `#` and `!` comments, `=`, `:` or whitespace separators, trimmed
//! keys and values. Backslashes are kept literally so Windows keystore paths
//! survive. Files that are not valid UTF-8 are decoded as ISO-8859-1.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::REQUIRED_KEYS;
use crate::error::{ConfigError, Result};

/// A parsed property file
#[derive(Clone, Default)]
pub struct PropertyFile {
    entries: Vec<(String, String)>,
    path: PathBuf,
    exists: bool,
}

/// Presence of a single required key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Present,
    Empty,
    Missing,
}

impl PropertyFile {
    /// Load a property file from disk
    ///
    /// A missing file is not an error: it yields an empty mapping, since
    /// builds that do not sign releases have no credentials file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading property file");

        if !path.is_file() {
            debug!(path = %path.display(), "property file not found");
            return Ok(Self {
                entries: Vec::new(),
                path: path.to_path_buf(),
                exists: false,
            });
        }

        let bytes = std::fs::read(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = decode(bytes);

        let mut props = Self::parse(&contents);
        props.path = path.to_path_buf();
        props.exists = true;

        debug!(entries = props.len(), "property file loaded");
        Ok(props)
    }

    /// Parse property text that did not come from disk
    pub fn parse(contents: &str) -> Self {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let mut props = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip blank lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = split_entry(line);
            props.insert(key, value);
        }

        props
    }

    /// Create from raw key-value pairs, applying the same last-write-wins rule
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut props = Self::default();
        for (k, v) in pairs {
            props.insert(k.as_ref(), v.as_ref());
        }
        props
    }

    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get a value by key, treating an empty value as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// All entries in order of first appearance
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the file was read from (empty when parsed from text)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed when loaded
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// File name used in error messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| crate::core::constants::PROPERTIES_FILE.to_string())
    }

    /// Status of every required key, in check order. Never exposes values.
    pub fn report(&self) -> Vec<(&'static str, KeyStatus)> {
        REQUIRED_KEYS
            .iter()
            .map(|&key| {
                let status = match self.get(key) {
                    None => KeyStatus::Missing,
                    Some("") => KeyStatus::Empty,
                    Some(_) => KeyStatus::Present,
                };
                (key, status)
            })
            .collect()
    }
}

/// Split a trimmed line at the first `=`, `:` or whitespace.
///
/// Whitespace after the key may be followed by one `=` or `:`, so
/// `key value`, `key = value` and `key=value` all parse the same.
fn split_entry(line: &str) -> (&str, &str) {
    let Some(idx) = line.find(|c: char| c == '=' || c == ':' || c.is_whitespace()) else {
        return (line, "");
    };

    let key = &line[..idx];
    let sep = line[idx..].chars().next().unwrap_or(' ');
    let mut rest = line[idx + sep.len_utf8()..].trim_start();
    if sep.is_whitespace() {
        if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
            rest = stripped.trim_start();
        }
    }

    (key, rest.trim_end())
}

/// UTF-8 when valid, otherwise ISO-8859-1 (one byte per char).
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

impl std::fmt::Debug for PropertyFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.entries.iter().map(|(k, _)| k.as_str()).collect();
        f.debug_struct("PropertyFile")
            .field("keys", &keys)
            .field("path", &self.path)
            .field("exists", &self.exists)
            .finish()
    }
}

impl std::fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            KeyStatus::Present => "present",
            KeyStatus::Empty => "empty",
            KeyStatus::Missing => "missing",
        };
        write!(f, "{}", s)
    }
}
