//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Signs in when the command needs a session
//! 2. Calls the engine to execute the command
//! 3. Formats and displays output
//!
//! Handlers never touch the repository directly.
//!
//! # Async Commands
//!
//! Data commands are async because the repository may reach the remote
//! backend. Each handler builds a tokio runtime and blocks on its async
//! body.
//!
//! # Store Lifetime
//!
//! Every invocation starts from a freshly seeded local store, so local-mode
//! changes last only for that invocation.

mod completion;
mod config_cmd;
mod people;
mod posts;
mod whoami;

pub use completion::{completion, write_completion};
pub use people::{people, PeopleKind};
pub use posts::posts;
pub use whoami::whoami;

use std::sync::Arc;

use anyhow::{bail, Context as _, Result};

use crate::access::create_repository;
use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::engine::Engine;
use crate::store::Store;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Per-invocation settings shared by every handler.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved configuration with CLI overrides applied.
    pub config: Config,
    pub verbosity: Verbosity,
    /// Prompts allowed.
    pub interactive: bool,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Whoami => whoami::whoami(ctx),
        Command::Posts { action } => posts::posts(ctx, action),
        Command::Instructors { action } => people::people(ctx, PeopleKind::Instructors, action),
        Command::Students { action } => people::people(ctx, PeopleKind::Students, action),
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Build the repository for this invocation and sign in.
///
/// The email comes from `--login`; the password from `--password` or,
/// when interactive, a masked prompt.
pub(crate) async fn signed_in_engine(ctx: &Context) -> Result<Engine> {
    let repository = create_repository(&ctx.config, Store::seeded())
        .context("Failed to set up data access")?;
    if let Some(primary) = repository.primary_name() {
        output::debug(
            format!("remote backend {} at {}", primary, ctx.config.base_url()),
            ctx.verbosity,
        );
    }

    let Some(email) = ctx.email.as_deref() else {
        bail!("This command needs a signed-in account. Pass --login (and --password).");
    };
    let password = match &ctx.password {
        Some(p) => p.clone(),
        None => prompts::password("Password: ", ctx.interactive)
            .context("No --password given and cannot prompt for one")?,
    };

    let mut engine = Engine::with_repository(Arc::new(repository));
    if !engine.sign_in(email, &password).await {
        bail!("Invalid email or password");
    }
    Ok(engine)
}

/// Ask before deleting unless `--yes` was given.
///
/// Without a terminal the deletion is refused unless `--yes` was given.
pub(crate) fn confirm_delete(ctx: &Context, what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !ctx.interactive {
        bail!("Refusing to delete {} without --yes in non-interactive mode", what);
    }
    Ok(prompts::confirm(&format!("Delete {}?", what), false, true)?)
}

/// Run an async handler body on a fresh runtime.
pub(crate) fn block_on<F: std::future::Future<Output = Result<()>>>(future: F) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(future)
}
