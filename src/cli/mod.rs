//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::{ResolverConfig, SigningPolicy};
use crate::error::Result;

/// keyprops - Fail-fast release signing credentials.
#[derive(Parser)]
#[command(
    name = "keyprops",
    about = "Resolve release signing credentials from key.properties",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Property file to read, relative to --root (overrides .keyprops.toml)
    #[arg(long, global = true, env = "KEYPROPS_FILE")]
    pub file: Option<PathBuf>,

    /// Project root holding key.properties and .keyprops.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check that all signing keys are present
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Skip signing when no property file exists
        #[arg(long)]
        optional: bool,
    },

    /// Run a command with signing credentials in its environment
    Run {
        /// Skip signing when no property file exists
        #[arg(long)]
        optional: bool,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Write a key.properties template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub file: Option<PathBuf>,
}

impl Context {
    /// Resolver configuration for this invocation.
    ///
    /// `--file` / `KEYPROPS_FILE` beat `.keyprops.toml` and, like it, are
    /// anchored at the root when relative; `--optional` can only relax the
    /// policy.
    pub fn resolver_config(&self, optional: bool) -> Result<ResolverConfig> {
        let mut config = ResolverConfig::discover(&self.root)?;
        if let Some(file) = &self.file {
            config = config.with_properties_path(self.root.join(file));
        }
        if optional {
            config = config.with_policy(SigningPolicy::Optional);
        }
        Ok(config)
    }
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> Result<()> {
    use Command::*;

    match command {
        Check { json, optional } => check::execute(ctx, json, optional),
        Run { optional, command } => run::execute(ctx, optional, &command),
        Init { force } => init::execute(ctx, force),
        Completions { shell } => completions::execute(shell),
    }
}
