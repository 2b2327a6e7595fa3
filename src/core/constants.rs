//! Constants used throughout keyprops.
//!
//! Centralizes magic strings and configuration values.

/// Default property file name (key.properties).
pub const PROPERTIES_FILE: &str = "key.properties";

/// Optional project configuration file name (.keyprops.toml).
pub const CONFIG_FILE: &str = ".keyprops.toml";

/// Keystore path key.
pub const STORE_FILE: &str = "storeFile";

/// Keystore password key.
pub const STORE_PASSWORD: &str = "storePassword";

/// Key alias key.
pub const KEY_ALIAS: &str = "keyAlias";

/// Key password key.
pub const KEY_PASSWORD: &str = "keyPassword";

/// Required keys, in the order they are checked.
pub const REQUIRED_KEYS: [&str; 4] = [STORE_FILE, STORE_PASSWORD, KEY_ALIAS, KEY_PASSWORD];

/// Environment variables exported to child processes by `keyprops run`.
pub const ENV_STORE_FILE: &str = "KEYPROPS_STORE_FILE";
pub const ENV_STORE_PASSWORD: &str = "KEYPROPS_STORE_PASSWORD";
pub const ENV_KEY_ALIAS: &str = "KEYPROPS_KEY_ALIAS";
pub const ENV_KEY_PASSWORD: &str = "KEYPROPS_KEY_PASSWORD";

/// Environment variable overriding the property file path.
pub const ENV_FILE_OVERRIDE: &str = "KEYPROPS_FILE";

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "KEYPROPS_LOG";

/// Template written by `keyprops init`.
pub const TEMPLATE: &str = "\
# Release signing credentials. Do not commit this file.
storeFile=
storePassword=
keyAlias=
keyPassword=
";

/// Gitignore entries to protect credentials.
pub const GITIGNORE_ENTRIES: &[&str] = &["key.properties", "*.jks", "*.keystore"];
