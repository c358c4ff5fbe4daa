//! cli
//!
//! Command-line interface layer for classblog.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and apply flag overrides
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that go through the [`crate::engine`] for every data operation.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(enabled) = cli.remote_override() {
        config = config.with_remote_enabled(enabled);
    }

    let ctx = commands::Context {
        config,
        verbosity: cli.verbosity(),
        interactive: cli.interactive(),
        email: cli.login.clone(),
        password: cli.password.clone(),
    };

    commands::dispatch(cli.command, &ctx)
}
