//! keyprops - Fail-fast release signing credentials for app builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keyprops::cli::output;
use keyprops::cli::{execute, Cli, Context};
use keyprops::core::constants;
use keyprops::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keyprops=debug")
        } else {
            EnvFilter::new("keyprops=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let ctx = Context {
        root: cli.root,
        file: cli.file,
    };

    if let Err(e) = execute(cli.command, &ctx) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingKey { .. }) => {
                Some("fix the property file and re-run, or: keyprops init")
            }
            Error::Config(ConfigError::AlreadyExists(_)) => Some("run: keyprops init --force"),
            Error::Config(ConfigError::Parse(_)) => Some("check .keyprops.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
