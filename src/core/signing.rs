//! Signing resolution.
//!
//! Ties the property file, the resolver configuration and the absent-file
//! policy together into a single outcome for the build step.

use tracing::{debug, info};

use crate::core::config::{ResolverConfig, SigningPolicy};
use crate::core::credentials::{resolve_signing_credentials, SigningCredentials};
use crate::core::properties::PropertyFile;
use crate::error::Result;

/// Outcome of a successful resolution.
#[derive(Debug)]
pub enum Signing {
    /// Release signing with these credentials
    Release(SigningCredentials),
    /// No property file and the policy allows unsigned builds
    Skipped,
}

impl Signing {
    /// Credentials, if signing is configured
    pub fn credentials(&self) -> Option<&SigningCredentials> {
        match self {
            Signing::Release(creds) => Some(creds),
            Signing::Skipped => None,
        }
    }
}

/// Loads and resolves signing credentials for one build invocation.
#[derive(Debug)]
pub struct Resolver {
    config: ResolverConfig,
    props: PropertyFile,
}

impl Resolver {
    /// Load the property file named by `config`
    ///
    /// # Errors
    ///
    /// Returns error if the property file exists but cannot be read.
    pub fn open(config: ResolverConfig) -> Result<Self> {
        let props = PropertyFile::load(&config.properties_path)?;
        Ok(Self { config, props })
    }

    /// Loaded property file
    pub fn properties(&self) -> &PropertyFile {
        &self.props
    }

    /// Configuration in effect
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve once. Attempted exactly once per build; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for the first missing key, unless
    /// the file is absent and the policy is optional.
    pub fn resolve(&self) -> Result<Signing> {
        if !self.props.exists() && self.config.policy == SigningPolicy::Optional {
            info!(
                path = %self.config.properties_path.display(),
                "no property file, signing skipped"
            );
            return Ok(Signing::Skipped);
        }

        let creds = resolve_signing_credentials(&self.props)?;
        debug!(alias = creds.key_alias(), "release signing configured");
        Ok(Signing::Release(creds))
    }
}

/// Load and resolve in one step.
///
/// # Errors
///
/// See [`Resolver::open`] and [`Resolver::resolve`].
pub fn resolve(config: ResolverConfig) -> Result<Signing> {
    Resolver::open(config)?.resolve()
}
