//! Signing credentials.
//!
//! A `SigningCredentials` value only exists when all four required keys were
//! present and non-empty. The fields are private and the resolver is the only
//! constructor, so a partially populated record cannot be built.

use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD};
use crate::core::properties::PropertyFile;
use crate::error::ConfigError;

/// Release signing credentials resolved from a property file.
///
/// Passwords are wiped from memory on drop and redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningCredentials {
    store_file: PathBuf,
    store_password: Zeroizing<String>,
    key_alias: String,
    key_password: Zeroizing<String>,
}

impl SigningCredentials {
    /// Path to the keystore exactly as written in the property file
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Keystore path anchored at `base` when relative
    pub fn store_file_in(&self, base: impl AsRef<Path>) -> PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            base.as_ref().join(&self.store_file)
        }
    }

    /// Keystore password
    pub fn store_password(&self) -> &str {
        &self.store_password
    }

    /// Alias of the signing key inside the keystore
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Password of the signing key
    pub fn key_password(&self) -> &str {
        &self.key_password
    }
}

impl std::fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .finish()
    }
}

/// Resolve signing credentials from a property file.
///
/// Keys are checked in fixed order (`storeFile`, `storePassword`, `keyAlias`,
/// `keyPassword`) and the first absent or empty one fails the resolution.
/// Values are taken verbatim.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` naming the first missing key and the
/// property file name.
pub fn resolve_signing_credentials(
    props: &PropertyFile,
) -> std::result::Result<SigningCredentials, ConfigError> {
    let file = props.file_name();
    let require = |key: &'static str| {
        props
            .get_non_empty(key)
            .ok_or_else(|| ConfigError::MissingKey {
                key,
                file: file.clone(),
            })
    };

    let store_file = require(STORE_FILE)?;
    let store_password = require(STORE_PASSWORD)?;
    let key_alias = require(KEY_ALIAS)?;
    let key_password = require(KEY_PASSWORD)?;

    debug!(file = %file, "signing credentials resolved");

    Ok(SigningCredentials {
        store_file: PathBuf::from(store_file),
        store_password: Zeroizing::new(store_password.to_string()),
        key_alias: key_alias.to_string(),
        key_password: Zeroizing::new(key_password.to_string()),
    })
}

impl TryFrom<&PropertyFile> for SigningCredentials {
    type Error = ConfigError;

    fn try_from(props: &PropertyFile) -> std::result::Result<Self, Self::Error> {
        resolve_signing_credentials(props)
    }
}
