//! Core library components.
//!
//! Property file parsing, credential resolution and resolver configuration.
//! Nothing here prints; the CLI owns all output.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod properties;
pub mod signing;
