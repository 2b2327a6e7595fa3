//! Run command.
//!
//! Executes a build command with the resolved signing credentials injected as
//! environment variables. On failure the command is never started.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::Context;
use crate::core::constants::{
    ENV_KEY_ALIAS, ENV_KEY_PASSWORD, ENV_STORE_FILE, ENV_STORE_PASSWORD,
};
use crate::core::signing::{self, Signing};
use crate::error::{Error, Result};

/// Run a command with signing credentials in its environment.
pub fn execute(ctx: &Context, optional: bool, command: &[String]) -> Result<()> {
    let config = ctx.resolver_config(optional)?;
    let store_base = config.store_base.clone();
    let signing = signing::resolve(config)?;

    let exit_code = run_with_signing(&signing, &store_base, command)?;
    std::process::exit(exit_code);
}

/// Spawn `command`, exporting credentials when signing is configured.
fn run_with_signing(
    signing: &Signing,
    store_base: &std::path::Path,
    command: &[String],
) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    match signing {
        Signing::Release(creds) => {
            let store_file = creds.store_file_in(store_base);
            cmd.env(ENV_STORE_FILE, &store_file);
            cmd.env(ENV_KEY_ALIAS, creds.key_alias());

            // Copies handed to the child environment are wiped when dropped
            let store_password = Zeroizing::new(creds.store_password().to_string());
            let key_password = Zeroizing::new(creds.key_password().to_string());
            cmd.env(ENV_STORE_PASSWORD, store_password.as_str());
            cmd.env(ENV_KEY_PASSWORD, key_password.as_str());
        }
        Signing::Skipped => {
            // Never leak credentials from the parent into an unsigned build
            for var in [ENV_STORE_FILE, ENV_STORE_PASSWORD, ENV_KEY_ALIAS, ENV_KEY_PASSWORD] {
                cmd.env_remove(var);
            }
        }
    }

    debug!(program = %program, "running command");
    let status = cmd.status()?;
    // Signal-terminated children have no code
    Ok(status.code().unwrap_or(1))
}
