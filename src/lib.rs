//! keyprops - Fail-fast release signing credentials for app builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Report key status, fail like the build would
//! │   ├── run           # Run a build with credentials injected
//! │   ├── init          # Write a key.properties template
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── properties    # .properties parsing
//!     ├── credentials   # SigningCredentials and strict resolution
//!     ├── config        # .keyprops.toml and resolver settings
//!     └── signing       # Policy-aware resolution (release or skipped)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use keyprops::{PropertyFile, resolve_signing_credentials};
//!
//! let props = PropertyFile::load("android/key.properties")?;
//! let creds = resolve_signing_credentials(&props)?;
//! println!("signing with alias {}", creds.key_alias());
//! # Ok::<(), keyprops::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{ResolverConfig, SigningPolicy};
pub use crate::core::credentials::{resolve_signing_credentials, SigningCredentials};
pub use crate::core::properties::{KeyStatus, PropertyFile};
pub use crate::core::signing::{Resolver, Signing};
pub use crate::error::{ConfigError, Error, Result};
