//! Error types.
//!
//! Resolution failures are values, never panics. `main` prints them verbatim
//! and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for keyprops operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Signing configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required key is absent or has an empty value.
    #[error("Missing '{key}' in {file}.")]
    MissingKey { key: &'static str, file: String },

    /// The property file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `.keyprops.toml` could not be read.
    #[error("failed to read .keyprops.toml: {0}")]
    ReadConfig(#[source] std::io::Error),

    /// `.keyprops.toml` is not valid TOML or has unknown values.
    #[error("invalid .keyprops.toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// Refused to overwrite an existing property file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

impl ConfigError {
    /// The missing key, if this is a missing-key error.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingKey { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The file name the key was expected in, if this is a missing-key error.
    pub fn source_file(&self) -> Option<&str> {
        match self {
            ConfigError::MissingKey { file, .. } => Some(file),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
