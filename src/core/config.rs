//! Resolver configuration.
//!
//! Where the property file lives and what to do when it is absent. Read from
//! an optional `.keyprops.toml` under the project root; the property file path
//! can always be overridden explicitly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// What to do when no property file exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningPolicy {
    /// Always resolve; an absent file fails on `storeFile`.
    #[default]
    Required,
    /// An absent file skips signing. An incomplete file still fails.
    Optional,
}

/// Project configuration stored in `.keyprops.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub signing: SigningSection,
}

/// `[signing]` section of `.keyprops.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SigningSection {
    /// Property file path, relative to the root
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub policy: SigningPolicy,
    /// Base directory for a relative `storeFile`, relative to the root
    #[serde(default)]
    pub store_base: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load `.keyprops.toml` from `root`, or defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadConfig` or `ConfigError::Parse` if the file
    /// exists but is unreadable or malformed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(constants::CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no project config, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading project config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadConfig)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }
}

/// Everything the resolver needs, with paths already anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Property file to read
    pub properties_path: PathBuf,
    /// Base directory for a relative keystore path
    pub store_base: PathBuf,
    pub policy: SigningPolicy,
}

impl ResolverConfig {
    /// Default layout: `key.properties` under `root`, strict policy
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            properties_path: root.join(constants::PROPERTIES_FILE),
            store_base: root.to_path_buf(),
            policy: SigningPolicy::Required,
        }
    }

    /// Build from `.keyprops.toml` under `root` (defaults if absent)
    ///
    /// # Errors
    ///
    /// Returns error if the project config is malformed.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let project = ProjectConfig::load(root)?;
        Ok(Self::from_project(root, project))
    }

    /// Anchor a project config at `root`
    pub fn from_project(root: &Path, project: ProjectConfig) -> Self {
        let mut config = Self::new(root);
        if let Some(file) = project.signing.file {
            config.properties_path = root.join(file);
        }
        if let Some(base) = project.signing.store_base {
            config.store_base = root.join(base);
        }
        config.policy = project.signing.policy;
        config
    }

    /// Override the property file path
    pub fn with_properties_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties_path = path.into();
        self
    }

    /// Override the absent-file policy
    pub fn with_policy(mut self, policy: SigningPolicy) -> Self {
        self.policy = policy;
        self
    }
}
