//! Init command.
//!
//! Writes an empty property file template with owner-only permissions and
//! keeps it out of git, whatever it is named.

#[cfg(unix)]
use std::io::Write;
use std::path::{Component, Path};
use tracing::debug;

use crate::cli::{output, Context};
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Write the template to the configured property file path.
pub fn execute(ctx: &Context, force: bool) -> Result<()> {
    let config = ctx.resolver_config(false)?;
    let path = &config.properties_path;

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.clone()).into());
    }

    write_template(path)?;
    let written = gitignore_entry(&ctx.root, path);
    ensure_gitignore(&ctx.root, written.as_deref())?;

    output::success(&format!("wrote {}", output::path(path.display())));
    output::hint("fill in storeFile, storePassword, keyAlias and keyPassword");
    Ok(())
}

/// Write the template, readable only by the owner on unix.
pub fn write_template(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "writing property template");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(constants::TEMPLATE.as_bytes())?;
        file.flush()?;

        // mode() only applies on create
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, constants::TEMPLATE)?;
    }

    Ok(())
}

/// `.gitignore` pattern for `path`, if it lives under `root`.
fn gitignore_entry(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Add credential patterns, plus `extra` when given, to `<root>/.gitignore`
/// if missing.
pub fn ensure_gitignore(root: &Path, extra: Option<&str>) -> Result<()> {
    let gitignore = root.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut entries: Vec<&str> = constants::GITIGNORE_ENTRIES.to_vec();
    entries.extend(extra);

    let mut updated = existing.clone();
    for entry in entries {
        if !updated.lines().any(|l| l.trim() == entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
